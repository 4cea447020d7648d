use crate::rules::*;
use crate::util::*;
use std::fmt;

pub const N_PAYOUT_SPIEL : isize = 10;
pub const N_PAYOUT_SCHNEIDER : isize = 20;
pub const N_PAYOUT_SCHNEIDER_SCHWARZ : isize = 30;

pub const N_POINTS_TO_WIN : isize = 61;

plain_enum_mod!(modeschneiderschwarz, ESchneiderSchwarz {
    Nothing,
    Schneider,
    Schwarz,
});

/// Result of a finished game from the perspective of the primary party.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SGameOutcome {
    pub b_primary_wins: bool,
    pub eschneiderschwarz: ESchneiderSchwarz,
}

impl SGameOutcome {
    /// Maps the points of the primary party (out of 120) to win/loss and schneider/schwarz.
    pub fn categorize(n_points_primary: isize) -> Self {
        assert!((0..=120).contains(&n_points_primary));
        let b_primary_wins = N_POINTS_TO_WIN<=n_points_primary;
        // points of the losing party
        let n_points_loser = if b_primary_wins {120-n_points_primary} else {n_points_primary};
        SGameOutcome {
            b_primary_wins,
            eschneiderschwarz: if 0==n_points_loser {
                ESchneiderSchwarz::Schwarz
            } else if n_points_loser<=30 {
                ESchneiderSchwarz::Schneider
            } else {
                ESchneiderSchwarz::Nothing
            },
        }
    }

    /// Signed payout of each primary player before applying the party multiplier.
    pub fn magnitude(&self) -> isize {
        let n_payout = match self.eschneiderschwarz {
            ESchneiderSchwarz::Nothing => N_PAYOUT_SPIEL,
            ESchneiderSchwarz::Schneider => N_PAYOUT_SCHNEIDER,
            ESchneiderSchwarz::Schwarz => N_PAYOUT_SCHNEIDER_SCHWARZ,
        };
        n_payout.neg_if(!self.b_primary_wins)
    }
}

impl fmt::Display for SGameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", if self.b_primary_wins {"gewonnen"} else {"verloren"})?;
        match self.eschneiderschwarz {
            ESchneiderSchwarz::Nothing => Ok(()),
            ESchneiderSchwarz::Schneider => write!(f, ", Schneider"),
            ESchneiderSchwarz::Schwarz => write!(f, ", Schneider schwarz"),
        }
    }
}

/// Broadcasts the primary party's payout to all players; the result sums to zero.
pub fn internal_payout(n_payout_primary_unmultiplied: isize, playerparties: &SPlayerParties) -> Vec<isize> {
    let vecn_payout : Vec<isize> = (0..playerparties.num_players())
        .map(|epi| {
            n_payout_primary_unmultiplied.neg_if(!playerparties.is_primary_party(epi))
            * playerparties.multiplier(epi)
        })
        .collect();
    debug_assert_eq!(vecn_payout.iter().sum::<isize>(), 0);
    vecn_payout
}

#[test]
fn test_categorize() {
    for (n_points_primary, n_magnitude) in [
        (0, -30),
        (1, -20),
        (30, -20),
        (31, -10),
        (60, -10),
        (61, 10),
        (89, 10),
        (90, 20),
        (119, 20),
        (120, 30),
    ] {
        assert_eq!(SGameOutcome::categorize(n_points_primary).magnitude(), n_magnitude, "{}", n_points_primary);
    }
    assert_eq!(SGameOutcome::categorize(60).to_string(), "verloren");
    assert_eq!(SGameOutcome::categorize(95).to_string(), "gewonnen, Schneider");
    assert_eq!(SGameOutcome::categorize(0).to_string(), "verloren, Schneider schwarz");
}

#[test]
fn test_internal_payout() {
    assert_eq!(internal_payout(20, &SPlayerParties::new([0, 3], 4)), vec![20, -20, -20, 20]);
    assert_eq!(internal_payout(-10, &SPlayerParties::new([1], 4)), vec![10, -30, 10, 10]);
    assert_eq!(internal_payout(30, &SPlayerParties::new([2], 3)), vec![-30, -30, 60]);
}
