pub mod deal;

use crate::primitives::*;
use crate::rules::{card_points::points_total, payoutdecider::*, *};
use crate::util::*;
use std::fmt;

/// Errors reported by `SGame`. A failed `play` leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VGameError {
    NotInHand(ECard),
    IllegalMove(ECard),
    GameNotFinished,
    InvariantViolation {
        n_points_total: isize,
        n_points_expected: isize,
    },
}

impl fmt::Display for VGameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotInHand(card) => write!(f, "{} is not in the current player's hand", card),
            Self::IllegalMove(card) => write!(f, "{} must not be played now", card),
            Self::GameNotFinished => write!(f, "game is not finished yet"),
            Self::InvariantViolation{n_points_total, n_points_expected} => write!(f, "players scored {} points in total instead of {}", n_points_total, n_points_expected),
        }
    }
}
impl std::error::Error for VGameError {}

/// What the player to move sees.
#[derive(Clone, Debug)]
pub struct STurn {
    pub i_stich: usize,
    pub epi: EPlayerIndex,
    pub hand: SHand,
    pub veccard_allowed: SHandVector,
}

impl fmt::Display for STurn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Stich {}: player {} with {} may play {}",
            self.i_stich,
            self.epi,
            self.hand,
            SHand::new_from_vec(self.veccard_allowed.clone()),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SGameResult {
    pub n_points_primary: isize,
    pub gameoutcome: SGameOutcome,
    pub an_payout: Vec<isize>,
}

#[derive(Clone, Debug)]
pub struct SGame {
    rules: VRules,
    ahand: Vec<SHand>,
    stich_current: SStich,
    vecstich_completed: Vec<SCompletedStich>,
    epi_current: EPlayerIndex,
    ekurzlang: EKurzLang,
}

impl SGame {
    /// `vechand` must partition the deck belonging to its number of players.
    pub fn new(rules: VRules, vechand: Vec<SHand>, epi_first: EPlayerIndex) -> SGame {
        let n_players = vechand.len();
        let ekurzlang = EKurzLang::from_num_players(n_players)
            .unwrap_or_else(|| panic!("no deck for {} players", n_players));
        assert!(vechand.iter().all(|hand| hand.cards().len()==ekurzlang.cards_per_player()));
        assert_eq!(rules.playerparties().num_players(), n_players);
        SGame {
            rules,
            ahand: vechand,
            stich_current: SStich::new(epi_first, n_players),
            vecstich_completed: Vec::new(),
            epi_current: epi_first,
            ekurzlang,
        }
    }

    pub fn rules(&self) -> &VRules {
        &self.rules
    }

    pub fn kurzlang(&self) -> EKurzLang {
        self.ekurzlang
    }

    pub fn num_players(&self) -> usize {
        self.ahand.len()
    }

    pub fn hand(&self, epi: EPlayerIndex) -> &SHand {
        &self.ahand[epi]
    }

    pub fn current_stich(&self) -> &SStich {
        &self.stich_current
    }

    pub fn completed_stichs(&self) -> &[SCompletedStich] {
        &self.vecstich_completed
    }

    pub fn is_finished(&self) -> bool {
        self.ahand.iter().all(SHand::is_empty)
    }

    pub fn which_player_can_do_something(&self) -> Option<EPlayerIndex> {
        if_then_some!(!self.is_finished(), self.epi_current)
    }

    pub fn current_turn(&self) -> Option<STurn> {
        self.which_player_can_do_something().map(|epi| {
            let hand = &self.ahand[epi];
            STurn {
                i_stich: self.vecstich_completed.len(),
                epi,
                hand: hand.clone(),
                veccard_allowed: self.rules.all_allowed_cards(&self.stich_current, hand),
            }
        })
    }

    pub fn play(&mut self, card: ECard) -> Result<(), VGameError> {
        let epi = self.epi_current;
        debug_assert_eq!(self.stich_current.current_playerindex(), Some(epi));
        let hand = &self.ahand[epi];
        if !hand.contains(card) {
            return Err(VGameError::NotInHand(card));
        }
        if !self.rules.card_is_allowed(&self.stich_current, hand, card) {
            return Err(VGameError::IllegalMove(card));
        }
        trace!("player {} plays {}", epi, card);
        self.ahand[epi].play_card(card);
        self.stich_current.push(card);
        if self.stich_current.is_full() {
            let n_players = self.num_players();
            let i_winner = self.rules.winner_position(&self.stich_current);
            // epi played last, so the winner sits i_winner-(n_players-1) seats away from epi
            let epi_winner = verify_eq!(
                (epi + i_winner + 1) % n_players,
                self.rules.winner_index(&self.stich_current)
            );
            let stich = std::mem::replace(&mut self.stich_current, SStich::new(epi_winner, n_players));
            let stich_completed = SCompletedStich::new(stich, epi_winner);
            debug!("{} ({} points)", stich_completed, stich_completed.points());
            self.vecstich_completed.push(stich_completed);
            self.epi_current = epi_winner;
        } else {
            self.epi_current = wrapping_add_playerindex(epi, 1, self.num_players());
        }
        Ok(())
    }

    pub fn scores_per_player(&self) -> Vec<isize> {
        let mut vecn_points = vec![0; self.num_players()];
        for stich in self.vecstich_completed.iter() {
            vecn_points[stich.winner_index()] += stich.points();
        }
        vecn_points
    }

    /// Points of the primary party and of the secondary party, in this order.
    pub fn scores_per_team(&self) -> [isize; 2] {
        let playerparties = self.rules.playerparties();
        self.scores_per_player().into_iter()
            .enumerate()
            .fold([0, 0], |mut an_points, (epi, n_points)| {
                an_points[if playerparties.is_primary_party(epi) {0} else {1}] += n_points;
                an_points
            })
    }

    pub fn game_result(&self) -> Result<SGameResult, VGameError> {
        if !self.is_finished() {
            return Err(VGameError::GameNotFinished);
        }
        let [n_points_primary, n_points_secondary] = self.scores_per_team();
        let n_points_expected = points_total(self.ekurzlang);
        if n_points_primary + n_points_secondary != n_points_expected {
            return Err(VGameError::InvariantViolation {
                n_points_total: n_points_primary + n_points_secondary,
                n_points_expected,
            });
        }
        let gameoutcome = SGameOutcome::categorize(n_points_primary);
        let an_payout = internal_payout(gameoutcome.magnitude(), self.rules.playerparties());
        info!("{}: {} with {} points, payout {:?}", self.rules, gameoutcome, n_points_primary, an_payout);
        Ok(SGameResult {
            n_points_primary,
            gameoutcome,
            an_payout,
        })
    }
}

#[cfg(test)]
mod tests;
