pub mod playerrandom;

use sheepshead_lib::{game::STurn, primitives::ECard};

pub trait TPlayer {
    /// Chooses one of `turn.veccard_allowed`.
    fn ask_for_card(&mut self, turn: &STurn) -> ECard;
}
