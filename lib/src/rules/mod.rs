pub mod card_points;
pub mod payoutdecider;
pub mod rulesrufspiel;
pub mod ruleset;
pub mod rulestrumpf;
pub mod trumpfdecider;

#[cfg(test)]
mod tests;

use crate::primitives::*;
use crate::rules::{rulesrufspiel::SRulesRufspiel, rulestrumpf::SRulesTrumpfGame, trumpfdecider::STrumpfDecider};
use arrayvec::ArrayVec;
use enum_dispatch::enum_dispatch;
use itertools::Itertools;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VTrumpfOrFarbe {
    Trumpf,
    Farbe (EFarbe),
}

impl VTrumpfOrFarbe {
    pub fn is_trumpf(&self) -> bool {
        match *self {
            VTrumpfOrFarbe::Trumpf => true,
            VTrumpfOrFarbe::Farbe(_efarbe) => false,
        }
    }
}

/// The playing party (playmaker and partner, if any); everybody else forms the opposing party.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SPlayerParties {
    vecepi_primary: ArrayVec<EPlayerIndex, MAX_PLAYERS>,
    n_players: usize,
}

impl SPlayerParties {
    pub fn new(itepi_primary: impl IntoIterator<Item=EPlayerIndex>, n_players: usize) -> Self {
        let vecepi_primary : ArrayVec<_, MAX_PLAYERS> = itepi_primary.into_iter()
            .unique()
            .collect();
        assert!(!vecepi_primary.is_empty());
        assert!(vecepi_primary.len()<n_players);
        assert!(vecepi_primary.iter().all(|&epi| epi<n_players));
        let playerparties = SPlayerParties {
            vecepi_primary,
            n_players,
        };
        debug_assert_eq!(
            playerparties.primary_players().map(|epi| playerparties.multiplier(epi)).sum::<isize>(),
            playerparties.secondary_players().map(|epi| playerparties.multiplier(epi)).sum::<isize>(),
        );
        playerparties
    }
    pub fn is_primary_party(&self, epi: EPlayerIndex) -> bool {
        self.vecepi_primary.contains(&epi)
    }
    pub fn primary_players(&self) -> impl Iterator<Item=EPlayerIndex> + '_ {
        self.vecepi_primary.iter().copied()
    }
    pub fn secondary_players(&self) -> impl Iterator<Item=EPlayerIndex> + '_ {
        (0..self.n_players).filter(|&epi| !self.is_primary_party(epi))
    }
    pub fn num_players(&self) -> usize {
        self.n_players
    }
    /// Members of the smaller party win or lose for every member of the larger party, so that payouts sum to zero.
    pub fn multiplier(&self, epi: EPlayerIndex) -> isize {
        let n_primary = self.vecepi_primary.len();
        let n_secondary = self.n_players - n_primary;
        let b_primary = self.is_primary_party(epi);
        if n_primary==n_secondary {
            1
        } else if b_primary && n_primary<n_secondary {
            (n_secondary / n_primary) as isize
        } else if !b_primary && n_secondary<n_primary {
            (n_primary / n_secondary) as isize
        } else {
            1
        }
    }
}

impl fmt::Display for SPlayerParties {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} vs. {}",
            self.primary_players().join("+"),
            self.secondary_players().join("+"),
        )
    }
}

/// Cards that follow the first card of the stich; if there are none, the whole hand is allowed.
fn all_allowed_cards_within_stich_distinguish_farbe_frei(
    rules: &impl TRules,
    card_first_in_stich: ECard,
    hand: &SHand,
    fn_farbe_not_frei: impl Fn(SHandVector)->SHandVector,
) -> SHandVector {
    let trumpforfarbe_first = rules.trumpforfarbe(card_first_in_stich);
    let veccard_same_farbe : SHandVector = hand.cards().iter().copied()
        .filter(|&card| rules.trumpforfarbe(card)==trumpforfarbe_first)
        .collect();
    if veccard_same_farbe.is_empty() {
        hand.cards().clone()
    } else {
        fn_farbe_not_frei(veccard_same_farbe)
    }
}

#[enum_dispatch]
pub trait TRules {
    fn trumpfdecider(&self) -> &STrumpfDecider;

    fn playerparties(&self) -> &SPlayerParties;

    /// Cards of `hand` that may be put onto `stich`. Never empty for a non-empty hand.
    fn all_allowed_cards(&self, stich: &SStich, hand: &SHand) -> SHandVector;

    fn trumpforfarbe(&self, card: ECard) -> VTrumpfOrFarbe {
        self.trumpfdecider().trumpforfarbe(card)
    }

    fn card_is_allowed(&self, stich: &SStich, hand: &SHand, card: ECard) -> bool {
        self.all_allowed_cards(stich, hand).contains(&card)
    }

    /// Position (0 = first card played) of the card taking the full `stich`.
    fn winner_position(&self, stich: &SStich) -> usize {
        assert!(stich.is_full());
        self.trumpfdecider().winner_position(stich.cards())
    }

    fn winner_index(&self, stich: &SStich) -> EPlayerIndex {
        stich.playerindex_at(self.winner_position(stich))
    }
}

#[enum_dispatch(TRules)]
#[derive(Clone, Debug)]
pub enum VRules {
    TrumpfGame(SRulesTrumpfGame),
    Rufspiel(SRulesRufspiel),
}

impl fmt::Display for VRules {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VRules::TrumpfGame(rules) => fmt::Display::fmt(rules, f),
            VRules::Rufspiel(rules) => fmt::Display::fmt(rules, f),
        }
    }
}

/// Reasons why rules cannot be set up for a given deal. Callers should re-deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VRulesError {
    RufsauIsTrumpf(ECard),
    RufsauNotDealt(ECard),
}

impl fmt::Display for VRulesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::RufsauIsTrumpf(card) => write!(f, "called card {} is trumpf", card),
            Self::RufsauNotDealt(card) => write!(f, "called card {} is not in any hand", card),
        }
    }
}
impl std::error::Error for VRulesError {}

#[test]
fn test_playerparties() {
    let playerparties22 = SPlayerParties::new([2, 0], 4);
    assert!(playerparties22.is_primary_party(0));
    assert!(!playerparties22.is_primary_party(1));
    assert_eq!(playerparties22.secondary_players().collect::<Vec<_>>(), vec![1, 3]);
    assert!((0..4).all(|epi| playerparties22.multiplier(epi)==1));
    assert_eq!(playerparties22.to_string(), "2+0 vs. 1+3");

    let playerparties13 = SPlayerParties::new([1, 1], 4);
    assert_eq!(playerparties13.primary_players().collect::<Vec<_>>(), vec![1]);
    assert_eq!(playerparties13.multiplier(1), 3);
    assert_eq!(playerparties13.multiplier(0), 1);

    let playerparties21 = SPlayerParties::new([0, 2], 3);
    assert_eq!(playerparties21.multiplier(0), 1);
    assert_eq!(playerparties21.multiplier(1), 2);
}
