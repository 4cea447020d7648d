use crate::primitives::*;
use crate::rules::{rulesrufspiel::SRulesRufspiel, VRulesError};
use crate::util::*;
use rand::prelude::*;

/// Shuffles the deck of `ekurzlang` and cuts it into one hand per player.
pub fn deal_cards(ekurzlang: EKurzLang, rng: &mut impl Rng) -> Vec<SHand> {
    let mut veccard = ECard::values(ekurzlang).collect::<Vec<_>>();
    veccard.shuffle(rng);
    veccard.chunks(ekurzlang.cards_per_player())
        .map(|slccard| SHand::new_from_iter(slccard.iter().copied()))
        .collect()
}

/// Deals until `epi` can call the ace of `efarbe_rufsau`.
pub fn deal_until_rufspiel(
    ekurzlang: EKurzLang,
    epi: EPlayerIndex,
    efarbe_rufsau: EFarbe,
    b_davonlaufen: bool,
    rng: &mut impl Rng,
) -> Result<(Vec<SHand>, SRulesRufspiel), VRulesError> {
    let card_rufsau = ECard::new(efarbe_rufsau, ESchlag::Ass);
    let mut n_deal = 0;
    loop {
        n_deal += 1;
        let vechand = deal_cards(ekurzlang, rng);
        match SRulesRufspiel::new(&vechand, epi, card_rufsau, b_davonlaufen) {
            Ok(rules) => {
                if rules.can_be_played(&vechand[epi]) {
                    debug!("{} after {} deal(s)", rules, n_deal);
                    return Ok((vechand, rules));
                }
            },
            // re-dealing does not turn trumpf into farbe
            Err(err@VRulesError::RufsauIsTrumpf(_)) => return Err(err),
            Err(VRulesError::RufsauNotDealt(_)) => {},
        }
    }
}

#[test]
fn test_deal_cards() {
    let mut rng = StdRng::seed_from_u64(0);
    for ekurzlang in EKurzLang::values() {
        let vechand = deal_cards(ekurzlang, &mut rng);
        assert_eq!(vechand.len(), ekurzlang.num_players());
        assert!(vechand.iter().all(|hand| hand.cards().len()==8));
        let mut veccard_dealt = vechand.iter()
            .flat_map(|hand| hand.cards().iter().copied())
            .collect::<Vec<_>>();
        veccard_dealt.sort();
        assert_eq!(veccard_dealt, ECard::values(ekurzlang).collect::<Vec<_>>());
    }
    // same seed, same deal
    assert_eq!(
        deal_cards(EKurzLang::Lang, &mut StdRng::seed_from_u64(3)),
        deal_cards(EKurzLang::Lang, &mut StdRng::seed_from_u64(3)),
    );
}

#[test]
fn test_deal_until_rufspiel() {
    let mut rng = StdRng::seed_from_u64(1);
    for ekurzlang in EKurzLang::values() {
        for efarbe in [EFarbe::Eichel, EFarbe::Gras, EFarbe::Schelln] {
            let (vechand, rules) = verify!(deal_until_rufspiel(ekurzlang, 1, efarbe, false, &mut rng)).unwrap();
            assert_eq!(vechand.len(), ekurzlang.num_players());
            assert!(!vechand[1].contains(rules.rufsau()));
            assert!(vechand[1].cards().iter().any(|card| card.farbe()==efarbe && card.schlag()!=ESchlag::Ober && card.schlag()!=ESchlag::Unter));
        }
    }
    assert_eq!(
        deal_until_rufspiel(EKurzLang::Lang, 0, EFarbe::Herz, false, &mut rng).err(),
        Some(VRulesError::RufsauIsTrumpf(ECard::HA)),
    );
}
