use crate::primitives::card::*;
use crate::util::*;
use crate::rules::card_points::points_stich;
use arrayvec::ArrayVec;
use std::fmt;

/// Seat at the table, counted from 0 in playing order.
pub type EPlayerIndex = usize;

pub const MAX_PLAYERS : usize = 4;

pub fn wrapping_add_playerindex(epi: EPlayerIndex, n_offset: usize, n_players: usize) -> EPlayerIndex {
    debug_assert!(epi<n_players);
    (epi + n_offset) % n_players
}

/// The trick currently being played: up to `n_players` cards, starting with the player at `epi_first`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SStich {
    epi_first: EPlayerIndex,
    n_players: usize,
    veccard: ArrayVec<ECard, MAX_PLAYERS>,
}

impl SStich {
    pub fn new(epi_first: EPlayerIndex, n_players: usize) -> Self {
        assert!(EKurzLang::from_num_players(n_players).is_some());
        assert!(epi_first<n_players);
        SStich {
            epi_first,
            n_players,
            veccard: ArrayVec::new(),
        }
    }
    pub fn first_playerindex(&self) -> EPlayerIndex {
        self.epi_first
    }
    pub fn current_playerindex(&self) -> Option<EPlayerIndex> {
        if_then_some!(
            !self.is_full(),
            self.playerindex_at(self.size())
        )
    }
    /// Seat of the player who contributed (or will contribute) the card at `i_position` in playing order.
    pub fn playerindex_at(&self, i_position: usize) -> EPlayerIndex {
        debug_assert!(i_position<self.n_players);
        wrapping_add_playerindex(self.epi_first, i_position, self.n_players)
    }
    pub fn num_players(&self) -> usize {
        self.n_players
    }
    pub fn size(&self) -> usize {
        self.veccard.len()
    }
    pub fn is_full(&self) -> bool {
        self.size()==self.n_players
    }
    pub fn is_empty(&self) -> bool {
        self.veccard.is_empty()
    }
    pub fn push(&mut self, card: ECard) {
        assert!(!self.is_full());
        self.veccard.push(card);
    }
    pub fn first(&self) -> Option<ECard> {
        self.veccard.first().copied()
    }
    /// Cards in playing order.
    pub fn cards(&self) -> &[ECard] {
        &self.veccard
    }
    pub fn iter(&self) -> impl Iterator<Item=(EPlayerIndex, ECard)> + '_ {
        self.veccard.iter()
            .enumerate()
            .map(move |(i_position, card)| (self.playerindex_at(i_position), *card))
    }
    pub fn get(&self, epi: EPlayerIndex) -> Option<ECard> {
        self.iter()
            .find(|&(epi_card, _card)| epi_card==epi)
            .map(|(_epi, card)| card)
    }
}

impl fmt::Display for SStich {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for epi in 0..self.n_players {
            if epi==self.epi_first {
                write!(f, ">")?;
            } else {
                write!(f, " ")?;
            }
            match self.get(epi) {
                None => {write!(f, "__")?;}
                Some(card) => {write!(f, "{}", card)?;}
            }
        }
        Ok(())
    }
}

/// A full trick together with the player who took it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SCompletedStich {
    stich: SStich,
    epi_winner: EPlayerIndex,
}

impl SCompletedStich {
    pub fn new(stich: SStich, epi_winner: EPlayerIndex) -> Self {
        assert!(stich.is_full());
        assert!(epi_winner<stich.num_players());
        SCompletedStich {
            stich,
            epi_winner,
        }
    }
    pub fn stich(&self) -> &SStich {
        &self.stich
    }
    pub fn cards(&self) -> &[ECard] {
        self.stich.cards()
    }
    pub fn winner_index(&self) -> EPlayerIndex {
        self.epi_winner
    }
    pub fn points(&self) -> isize {
        points_stich(self.cards().iter().copied())
    }
}

impl fmt::Display for SCompletedStich {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.stich, self.epi_winner)
    }
}

#[test]
fn test_stich() {
    {
        use crate::primitives::card::ECard::*;
        let acard = [E7, E8, E9, EK];
        for n_players in [3, 4] {
            for epi_first in 0..n_players {
                for n_size in 0..=n_players {
                    let mut stich = SStich::new(epi_first, n_players);
                    for &card in acard.iter().take(n_size) {
                        stich.push(card);
                    }
                    assert_eq!(stich.size(), n_size);
                    assert_eq!(stich.first_playerindex(), epi_first);
                    assert_eq!(stich.size(), stich.iter().count());
                    assert_eq!(stich.is_full(), n_size==n_players);
                    for (epi, card) in stich.iter() {
                        assert_eq!(stich.get(epi), Some(card));
                    }
                }
            }
        }
    }
    {
        let mut stich = SStich::new(2, 4);
        stich.push(ECard::new(EFarbe::Eichel, ESchlag::Unter));
        stich.push(ECard::new(EFarbe::Gras, ESchlag::S7));
        assert_eq!(stich.get(2), Some(ECard::EU));
        assert_eq!(stich.get(3), Some(ECard::G7));
        assert_eq!(stich.get(0), None);
        assert_eq!(stich.current_playerindex(), Some(0));
        assert_eq!(stich.to_string(), " __ __>EU G7");
        stich.push(ECard::HA);
        stich.push(ECard::S9);
        assert_eq!(stich.current_playerindex(), None);
        assert_eq!(stich.get(1), Some(ECard::S9));
        let stich_completed = SCompletedStich::new(stich, 0);
        assert_eq!(stich_completed.points(), 2+11);
    }
}
