use crate::primitives::*;
use crate::rules::{trumpfdecider::STrumpfDecider, *};
use std::fmt;

/// A game where one player plays alone against all others, with freely chosen trumpf.
#[derive(Clone, Debug)]
pub struct SRulesTrumpfGame {
    epi: EPlayerIndex,
    trumpfdecider: STrumpfDecider,
    playerparties: SPlayerParties,
}

impl SRulesTrumpfGame {
    pub fn new(epi: EPlayerIndex, n_players: usize, trumpfdecider: STrumpfDecider) -> Self {
        SRulesTrumpfGame {
            epi,
            trumpfdecider,
            playerparties: SPlayerParties::new([epi], n_players),
        }
    }
}

impl fmt::Display for SRulesTrumpfGame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Trumpfspiel von {} ({})", self.epi, self.trumpfdecider)
    }
}

impl TRules for SRulesTrumpfGame {
    fn trumpfdecider(&self) -> &STrumpfDecider {
        &self.trumpfdecider
    }

    fn playerparties(&self) -> &SPlayerParties {
        &self.playerparties
    }

    fn all_allowed_cards(&self, stich: &SStich, hand: &SHand) -> SHandVector {
        match stich.first() {
            None => hand.cards().clone(),
            Some(card_first) => all_allowed_cards_within_stich_distinguish_farbe_frei(
                self,
                card_first,
                hand,
                /*fn_farbe_not_frei*/|veccard_same_farbe| veccard_same_farbe,
            ),
        }
    }
}

#[test]
fn test_all_allowed_cards() {
    use crate::primitives::ECard::*;
    let rules = SRulesTrumpfGame::new(0, 4, STrumpfDecider::new_ober_unter_herz());
    let hand = SHand::new_from_iter([EO, HA, H7, EA, E7, GK, SU]);
    let allowed_cards = |slccard_stich: &[ECard], hand: &SHand| -> Vec<ECard> {
        let mut stich = SStich::new(1, 4);
        for &card in slccard_stich {
            stich.push(card);
        }
        let mut veccard = rules.all_allowed_cards(&stich, hand).into_iter().collect::<Vec<_>>();
        veccard.sort();
        veccard
    };
    // leading: everything
    assert_eq!(allowed_cards(&[], &hand).len(), 7);
    // trumpf led: all trumpfs incl. ober, unter and herz
    assert_eq!(allowed_cards(&[HU], &hand), vec![EO, HA, H7, SU]);
    // farbe led: farbe only, ober of that farbe is trumpf
    assert_eq!(allowed_cards(&[EK, E9], &hand), vec![EA, E7]);
    assert_eq!(allowed_cards(&[GO], &hand), vec![EO, HA, H7, SU]);
    // cannot follow: free
    assert_eq!(allowed_cards(&[SA], &hand).len(), 7);
    // herz is trumpf, never a farbe to follow
    let hand_no_trumpf = SHand::new_from_iter([EA, G7, S9]);
    assert_eq!(allowed_cards(&[H9], &hand_no_trumpf), vec![EA, G7, S9]);
    assert_eq!(rules.playerparties().to_string(), "0 vs. 1+2+3");
}

#[test]
fn test_solo_with_other_trumpf() {
    use crate::primitives::ECard::*;
    let rules = SRulesTrumpfGame::new(2, 4, STrumpfDecider::new(EFarbe::Schelln, &[ESchlag::Unter]));
    let mut stich = SStich::new(3, 4);
    for card in [SA, HO, EU, S7] {
        stich.push(card);
    }
    assert_eq!(rules.winner_position(&stich), 2);
    assert_eq!(rules.winner_index(&stich), 1);
    assert_eq!(rules.trumpforfarbe(HO), VTrumpfOrFarbe::Farbe(EFarbe::Herz));
    assert_eq!(rules.to_string(), "Trumpfspiel von 2 (Unter, Schelln)");
}
