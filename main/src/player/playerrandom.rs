use crate::player::*;
use crate::util::*;
use rand::prelude::*;

#[derive(new)]
pub struct SPlayerRandom<R: Rng> {
    rng: R,
}

impl<R: Rng> TPlayer for SPlayerRandom<R> {
    fn ask_for_card(&mut self, turn: &STurn) -> ECard {
        *turn.veccard_allowed.choose(&mut self.rng)
            .unwrap_or_else(|| panic!("no card allowed in {}", turn))
    }
}

#[test]
fn test_playerrandom_plays_allowed_cards() {
    use sheepshead_lib::primitives::*;
    let mut playerrandom = SPlayerRandom::new(StdRng::seed_from_u64(0));
    let turn = STurn {
        i_stich: 0,
        epi: 2,
        hand: SHand::new_from_iter([ECard::EO, ECard::GA, ECard::S7]),
        veccard_allowed: [ECard::GA, ECard::S7].into_iter().collect(),
    };
    for _i in 0..20 {
        let card = playerrandom.ask_for_card(&turn);
        assert!(card==ECard::GA || card==ECard::S7);
    }
}
