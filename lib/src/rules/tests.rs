use crate::primitives::*;
use crate::rules::{rulesrufspiel::SRulesRufspiel, *};
use crate::util::*;

fn make_stich(epi_first: EPlayerIndex, slccard: &[ECard]) -> SStich {
    let mut stich = SStich::new(epi_first, 4);
    for &card in slccard {
        stich.push(card);
    }
    stich
}

fn sorted_allowed_cards(rules: &impl TRules, stich: &SStich, hand: &SHand) -> Vec<ECard> {
    let mut veccard = rules.all_allowed_cards(stich, hand).into_iter().collect::<Vec<_>>();
    veccard.sort();
    veccard
}

fn rufspiel_with_hand(str_hand_coplayer: &str, b_davonlaufen: bool) -> (SRulesRufspiel, SHand) {
    let hand_coplayer = SHand::new_from_vec(verify!(parse_cards(str_hand_coplayer)).unwrap());
    let veccard_rest = ECard::values(EKurzLang::Lang)
        .filter(|&card| !hand_coplayer.contains(card))
        .collect::<Vec<_>>();
    let ahand = [
        SHand::new_from_iter(veccard_rest[0..8].iter().copied()),
        hand_coplayer.clone(),
        SHand::new_from_iter(veccard_rest[8..16].iter().copied()),
        SHand::new_from_iter(veccard_rest[16..24].iter().copied()),
    ];
    (
        verify!(SRulesRufspiel::new(&ahand, 0, ECard::GA, b_davonlaufen)).unwrap(),
        hand_coplayer,
    )
}

#[test]
fn test_rufspiel_lead_without_davonlaufen() {
    use crate::primitives::ECard::*;
    let (rules, hand) = rufspiel_with_hand("GA GZ G9 EO HU EA S7 SK", /*b_davonlaufen*/false);
    assert_eq!(rules.playerparties().to_string(), "0+1 vs. 2+3");
    // gras companions must not be led, rufsau itself may
    assert_eq!(
        sorted_allowed_cards(&rules, &make_stich(1, &[]), &hand),
        vec![EA, EO, GA, HU, SK, S7],
    );
}

#[test]
fn test_rufspiel_lead_davonlaufen() {
    use crate::primitives::ECard::*;
    // three companions: with davonlaufen everything may be led
    let (rules, hand) = rufspiel_with_hand("GA GZ G9 G7 HU EA S7 SK", /*b_davonlaufen*/true);
    assert_eq!(sorted_allowed_cards(&rules, &make_stich(1, &[]), &hand).len(), 8);
    // same hand without davonlaufen
    let (rules, hand) = rufspiel_with_hand("GA GZ G9 G7 HU EA S7 SK", /*b_davonlaufen*/false);
    assert_eq!(
        sorted_allowed_cards(&rules, &make_stich(1, &[]), &hand),
        vec![EA, GA, HU, SK, S7],
    );
    // davonlaufen needs at least three companions
    let (rules, hand) = rufspiel_with_hand("GA GZ G9 EO HU EA S7 SK", /*b_davonlaufen*/true);
    assert!(!sorted_allowed_cards(&rules, &make_stich(1, &[]), &hand).contains(&GZ));
}

#[test]
fn test_rufspiel_follow() {
    use crate::primitives::ECard::*;
    let (rules, hand) = rufspiel_with_hand("GA GZ G9 EO HU EA S7 SK", /*b_davonlaufen*/false);
    // ruffarbe led: rufsau is forced
    assert_eq!(sorted_allowed_cards(&rules, &make_stich(0, &[G7]), &hand), vec![GA]);
    assert_eq!(sorted_allowed_cards(&rules, &make_stich(2, &[GK, G8, GU]), &hand), vec![GA]);
    // other farbe led: follow, rufsau untouched anyway
    assert_eq!(sorted_allowed_cards(&rules, &make_stich(0, &[SA]), &hand), vec![SK, S7]);
    // trumpf led
    assert_eq!(sorted_allowed_cards(&rules, &make_stich(0, &[HO]), &hand), vec![EO, HU]);
    // cannot follow: anything but the rufsau
    let (rules, hand) = rufspiel_with_hand("GA GZ G9 G7 EA EZ EK E9", /*b_davonlaufen*/false);
    assert_eq!(
        sorted_allowed_cards(&rules, &make_stich(0, &[SA]), &hand),
        vec![EA, EK, EZ, E9, GZ, G9, G7],
    );
}

#[test]
fn test_rufspiel_ober_unter_of_ruffarbe_led() {
    use crate::primitives::ECard::*;
    // no trumpf to follow with: the rufsau is forced as for a plain gras card
    let (rules, hand) = rufspiel_with_hand("GA GZ G9 G7 EA EZ EK E9", /*b_davonlaufen*/false);
    assert_eq!(sorted_allowed_cards(&rules, &make_stich(0, &[GO]), &hand), vec![GA]);
    assert_eq!(sorted_allowed_cards(&rules, &make_stich(3, &[GU, HK]), &hand), vec![GA]);
    // no trumpf, other farbe: anything but the rufsau
    assert_eq!(
        sorted_allowed_cards(&rules, &make_stich(0, &[EO]), &hand),
        vec![EA, EK, EZ, E9, GZ, G9, G7],
    );
    // holding trumpf, the holder follows with trumpf
    let (rules, hand) = rufspiel_with_hand("GA GZ G9 EO HU EA S7 SK", /*b_davonlaufen*/false);
    assert_eq!(sorted_allowed_cards(&rules, &make_stich(0, &[GO]), &hand), vec![EO, HU]);
}

#[test]
fn test_rufspiel_last_card() {
    use crate::primitives::ECard::*;
    let (rules, _hand) = rufspiel_with_hand("GA GZ G9 EO HU EA S7 SK", /*b_davonlaufen*/false);
    let hand = SHand::new_from_iter([GA]);
    assert_eq!(sorted_allowed_cards(&rules, &make_stich(0, &[SA]), &hand), vec![GA]);
    assert_eq!(sorted_allowed_cards(&rules, &make_stich(1, &[]), &hand), vec![GA]);
}

#[test]
fn test_rufspiel_other_players_unaffected() {
    use crate::primitives::ECard::*;
    let (rules, _hand) = rufspiel_with_hand("GA GZ G9 EO HU EA S7 SK", /*b_davonlaufen*/false);
    let hand = SHand::new_from_iter([GK, G8, SO, E7]);
    assert_eq!(sorted_allowed_cards(&rules, &make_stich(0, &[]), &hand).len(), 4);
    assert_eq!(sorted_allowed_cards(&rules, &make_stich(0, &[G7]), &hand), vec![GK, G8]);
}

#[test]
fn test_rufspiel_winner() {
    use crate::primitives::ECard::*;
    let (rules, _hand) = rufspiel_with_hand("GA GZ G9 EO HU EA S7 SK", /*b_davonlaufen*/false);
    let stich = make_stich(3, &[G7, GA, GK, SU]);
    assert_eq!(rules.winner_position(&stich), 3);
    assert_eq!(rules.winner_index(&stich), 2);
    let stich = make_stich(3, &[G7, GA, GK, S8]);
    assert_eq!(rules.winner_index(&stich), 0);
}

#[test]
fn test_allowed_cards_never_empty() {
    use rand::prelude::*;
    let mut rng = StdRng::seed_from_u64(42);
    for _i_deal in 0..200 {
        let mut veccard = ECard::values(EKurzLang::Lang).collect::<Vec<_>>();
        veccard.shuffle(&mut rng);
        let ahand = veccard.chunks(8)
            .map(|slccard| SHand::new_from_iter(slccard.iter().copied()))
            .collect::<Vec<_>>();
        let card_rufsau = ECard::new(
            *verify!([EFarbe::Eichel, EFarbe::Gras, EFarbe::Schelln].choose(&mut rng)).unwrap(),
            ESchlag::Ass,
        );
        let rules = verify!(SRulesRufspiel::new(&ahand, 0, card_rufsau, rng.gen())).unwrap();
        for (epi, hand) in ahand.iter().enumerate() {
            // every subset of a hand occurs as the remaining cards at some point
            let mut veccard_hand = hand.cards().iter().copied().collect::<Vec<_>>();
            veccard_hand.shuffle(&mut rng);
            for n_cards in 1..=veccard_hand.len() {
                let hand_remaining = SHand::new_from_iter(veccard_hand[0..n_cards].iter().copied());
                let stich_empty = SStich::new(epi, 4);
                assert!(!rules.all_allowed_cards(&stich_empty, &hand_remaining).is_empty());
                for &card_first in veccard.iter().filter(|&&card| !hand.contains(card)).take(6) {
                    let stich = make_stich((epi + 3) % 4, &[card_first]);
                    let veccard_allowed = rules.all_allowed_cards(&stich, &hand_remaining);
                    assert!(!veccard_allowed.is_empty());
                    assert!(veccard_allowed.iter().all(|&card| hand_remaining.contains(card)));
                }
            }
        }
    }
}
