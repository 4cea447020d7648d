use crate::primitives::*;
use crate::rules::{rulestrumpf::SRulesTrumpfGame, trumpfdecider::STrumpfDecider, *};
use crate::util::*;
use std::fmt;

/// Sauspiel: the playmaker calls a farbe ace and plays together with whoever holds it.
///
/// Ober, Unter and Herz are trumpf. The holder of the called ace must not hide it:
/// it has to be played as soon as its farbe is led, and it must not be discarded otherwise.
#[derive(Clone, Debug)]
pub struct SRulesRufspiel {
    rulestrumpf: SRulesTrumpfGame,
    card_rufsau: ECard,
    b_davonlaufen: bool,
    playerparties: SPlayerParties,
}

impl SRulesRufspiel {
    /// Fails if `card_rufsau` is trumpf or held by nobody; callers are expected to re-deal.
    pub fn new(ahand: &[SHand], epi: EPlayerIndex, card_rufsau: ECard, b_davonlaufen: bool) -> Result<Self, VRulesError> {
        let n_players = ahand.len();
        assert!(epi<n_players);
        let rulestrumpf = SRulesTrumpfGame::new(epi, n_players, STrumpfDecider::new_ober_unter_herz());
        if rulestrumpf.trumpforfarbe(card_rufsau).is_trumpf() {
            warn!("Rufspiel rejected: {} is trumpf", card_rufsau);
            return Err(VRulesError::RufsauIsTrumpf(card_rufsau));
        }
        let epi_coplayer = match ahand.iter().position(|hand| hand.contains(card_rufsau)) {
            Some(epi_coplayer) => epi_coplayer,
            None => {
                warn!("Rufspiel rejected: {} not dealt", card_rufsau);
                return Err(VRulesError::RufsauNotDealt(card_rufsau));
            },
        };
        debug_assert!(ahand.iter().filter(|hand| hand.contains(card_rufsau)).count()==1);
        Ok(SRulesRufspiel {
            rulestrumpf,
            card_rufsau,
            b_davonlaufen,
            playerparties: SPlayerParties::new([epi, epi_coplayer], n_players),
        })
    }

    pub fn rufsau(&self) -> ECard {
        self.card_rufsau
    }

    /// Whether the playmaker may call the ace with `hand`: it must hold some card of the ruffarbe, but not the ace itself.
    pub fn can_be_played(&self, hand: &SHand) -> bool {
        let it = || hand.cards().iter().filter(|&&card| self.is_ruffarbe(card));
        it().all(|&card| card!=self.rufsau())
            && 0<it().count()
    }

    fn is_ruffarbe(&self, card: ECard) -> bool {
        VTrumpfOrFarbe::Farbe(self.card_rufsau.farbe())==self.trumpforfarbe(card)
    }
}

impl fmt::Display for SRulesRufspiel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rufspiel mit der {}-Sau", self.card_rufsau.farbe())
    }
}

impl TRules for SRulesRufspiel {
    fn trumpfdecider(&self) -> &STrumpfDecider {
        self.rulestrumpf.trumpfdecider()
    }

    fn playerparties(&self) -> &SPlayerParties {
        &self.playerparties
    }

    fn all_allowed_cards(&self, stich: &SStich, hand: &SHand) -> SHandVector {
        let veccard_allowed = self.rulestrumpf.all_allowed_cards(stich, hand);
        if hand.cards().len()<=1 || !veccard_allowed.contains(&self.rufsau()) {
            veccard_allowed
        } else if let Some(card_first) = stich.first() {
            // led Ober/Unter of the ruffarbe count here as well
            if card_first.farbe()==self.card_rufsau.farbe() {
                std::iter::once(self.rufsau()).collect()
            } else {
                veccard_allowed.into_iter()
                    .filter(|&card| card!=self.rufsau())
                    .collect()
            }
        } else {
            let is_companion = |card: ECard| card!=self.rufsau() && self.is_ruffarbe(card);
            if self.b_davonlaufen && 3<=veccard_allowed.iter().filter(|&&card| is_companion(card)).count() {
                veccard_allowed
            } else {
                veccard_allowed.into_iter()
                    .filter(|&card| !is_companion(card))
                    .collect()
            }
        }
    }

    fn winner_position(&self, stich: &SStich) -> usize {
        self.rulestrumpf.winner_position(stich)
    }
}

#[test]
fn test_rufspiel_new() {
    use crate::primitives::ECard::*;
    let ahand = [
        SHand::new_from_iter([EO, GA, E7]),
        SHand::new_from_iter([HO, EA, G7]),
        SHand::new_from_iter([SO, SA, H7]),
        SHand::new_from_iter([GO, HA, S7]),
    ];
    let rules = verify!(SRulesRufspiel::new(&ahand, 0, EA, false)).unwrap();
    assert_eq!(rules.rufsau(), EA);
    assert_eq!(rules.playerparties().to_string(), "0+1 vs. 2+3");
    assert_eq!(rules.to_string(), "Rufspiel mit der Eichel-Sau");
    assert_eq!(SRulesRufspiel::new(&ahand, 0, HA, false).err(), Some(VRulesError::RufsauIsTrumpf(HA)));
    assert_eq!(SRulesRufspiel::new(&ahand[0..3], 0, GA, false).ok().map(|rules| rules.playerparties().to_string()), Some("0 vs. 1+2".to_string()));
    assert_eq!(
        SRulesRufspiel::new(&ahand[1..4], 0, GA, false).err(),
        Some(VRulesError::RufsauNotDealt(GA)),
    );
    assert!(rules.can_be_played(&SHand::new_from_iter([E7, GO])));
    assert!(!rules.can_be_played(&SHand::new_from_iter([EA, E7])));
    assert!(!rules.can_be_played(&SHand::new_from_iter([EO, GA])));
}
