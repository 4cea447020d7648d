use crate::primitives::card::*;
use arrayvec::ArrayVec;
use itertools::Itertools;
use std::fmt;

pub type SHandVector = ArrayVec<ECard, {EKurzLang::max_cards_per_player()}>;

/// Set of cards held by one player. Order of `cards()` carries no meaning.
#[derive(Clone, Debug)]
pub struct SHand {
    veccard: SHandVector,
}

impl PartialEq for SHand {
    fn eq(&self, other: &SHand) -> bool {
        self.veccard.len()==other.veccard.len()
            && self.veccard.iter().all(|card| other.contains(*card))
    }
}
impl Eq for SHand {}

impl SHand {
    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        assert!(self.veccard.iter().all_unique(), "duplicate card in hand {}", self);
    }

    pub fn new_from_vec(veccard: SHandVector) -> SHand {
        let hand = SHand {veccard};
        #[cfg(debug_assertions)]hand.assert_invariant();
        hand
    }
    pub fn new_from_iter(itcard: impl IntoIterator<Item=ECard>) -> SHand {
        Self::new_from_vec(itcard.into_iter().collect())
    }
    pub fn contains(&self, card_check: ECard) -> bool {
        self.contains_pred(|&card| card==card_check)
    }
    pub fn contains_pred(&self, pred: impl Fn(&ECard)->bool) -> bool {
        self.veccard
            .iter()
            .any(pred)
    }
    /// Removes `card`; callers must ensure that the hand holds it.
    pub fn play_card(&mut self, card: ECard) {
        match self.veccard.iter().position(|&card_hand| card_hand==card) {
            Some(i_card) => {
                self.veccard.swap_remove(i_card);
            },
            None => panic!("{} not contained in hand {}", card, self),
        }
        #[cfg(debug_assertions)]self.assert_invariant();
    }

    pub fn cards(&self) -> &SHandVector {
        &self.veccard
    }
    pub fn is_empty(&self) -> bool {
        self.veccard.is_empty()
    }
}

impl fmt::Display for SHand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.veccard.iter().join(" "))
    }
}

#[test]
fn test_hand() {
    use super::card::ECard::*;
    let hand = SHand::new_from_iter([EU, HK, S7]);
    let hand2 = {
        let mut hand2 = hand.clone();
        hand2.play_card(ECard::new(EFarbe::Herz, ESchlag::Koenig));
        hand2
    };
    assert_eq!(hand.cards().len()-1, hand2.cards().len());
    assert!(hand2.contains(EU));
    assert!(hand2.contains(S7));
    assert!(!hand2.contains(HK));
    assert_eq!(hand2, SHand::new_from_iter([S7, EU]));
    assert_ne!(hand2, hand);
}

#[test]
#[should_panic]
fn test_hand_play_foreign_card() {
    let mut hand = SHand::new_from_iter([ECard::EU, ECard::HK]);
    hand.play_card(ECard::SA);
}
