use crate::game::*;
use crate::rules::{rulesrufspiel::SRulesRufspiel, rulestrumpf::SRulesTrumpfGame, trumpfdecider::STrumpfDecider};

fn hands_from_str(slcstr_hand: &[&str]) -> Vec<SHand> {
    slcstr_hand.iter()
        .map(|str_hand| SHand::new_from_vec(verify!(parse_cards(str_hand)).unwrap()))
        .collect()
}

fn play_all(game: &mut SGame, str_cards: &str) {
    for card in verify!(parse_cards::<Vec<_>>(str_cards)).unwrap() {
        verify!(game.play(card)).unwrap();
    }
}

fn rufspiel_game() -> SGame {
    let vechand = hands_from_str(&[
        "EO GU HA HZ E7 GA SK S9",
        "GO HU H8 EA EK E9 SZ G7",
        "SO EU HK H9 EZ GZ G9 S7",
        "HO SU H7 E8 GK G8 SA S8",
    ]);
    let rules = verify!(SRulesRufspiel::new(&vechand, 0, ECard::EA, /*b_davonlaufen*/false)).unwrap();
    SGame::new(VRules::from(rules), vechand, /*epi_first*/0)
}

#[test]
fn test_scripted_rufspiel() {
    let mut game = rufspiel_game();
    assert_eq!(game.game_result(), Err(VGameError::GameNotFinished));
    play_all(&mut game, "HA GO HK HO");
    assert_eq!(game.completed_stichs().len(), 1);
    assert_eq!(game.completed_stichs()[0].winner_index(), 1);
    assert_eq!(game.which_player_can_do_something(), Some(1));
    play_all(&mut game, "EA EZ E8 E7  SZ S7 SA SK  GK GA G7 GZ");
    assert_eq!(game.which_player_can_do_something(), Some(0));
    assert_eq!(game.game_result(), Err(VGameError::GameNotFinished));
    play_all(&mut game, "HZ HU SO SU  EU H7 EO H8  GU EK H9 G8  S9 E9 G9 S8");
    assert!(game.is_finished());
    assert_eq!(game.which_player_can_do_something(), None);
    assert!(game.current_turn().is_none());
    assert_eq!(
        game.completed_stichs().iter().map(SCompletedStich::winner_index).collect::<Vec<_>>(),
        vec![1, 1, 3, 0, 2, 0, 0, 0],
    );
    assert_eq!(game.scores_per_player(), vec![36, 42, 17, 25]);
    assert_eq!(game.scores_per_player().iter().sum::<isize>(), 120);
    assert_eq!(game.scores_per_team(), [78, 42]);
    let gameresult = verify!(game.game_result()).unwrap();
    assert_eq!(gameresult.n_points_primary, 78);
    assert_eq!(gameresult.gameoutcome, SGameOutcome{b_primary_wins: true, eschneiderschwarz: ESchneiderSchwarz::Nothing});
    assert_eq!(gameresult.an_payout, vec![10, 10, -10, -10]);
}

#[test]
fn test_play_errors_leave_game_untouched() {
    let mut game = rufspiel_game();
    play_all(&mut game, "HA GO HK HO  EA EZ");
    assert_eq!(game.rules().to_string(), "Rufspiel mit der Eichel-Sau");
    let vechand_before = (0..game.num_players()).map(|epi| game.hand(epi).clone()).collect::<Vec<_>>();
    let stich_before = game.current_stich().clone();
    let vecstich_before = game.completed_stichs().to_vec();
    let assert_untouched = |game: &SGame| {
        assert_eq!(game.which_player_can_do_something(), Some(3));
        for (epi, hand) in vechand_before.iter().enumerate() {
            assert_eq!(game.hand(epi), hand);
        }
        assert_eq!(game.current_stich(), &stich_before);
        assert_eq!(game.completed_stichs(), vecstich_before.as_slice());
    };
    // EO is held by player 0, not by the player in turn
    assert_eq!(game.play(ECard::EO), Err(VGameError::NotInHand(ECard::EO)));
    assert_untouched(&game);
    // eichel led, GK does not follow
    assert_eq!(game.play(ECard::GK), Err(VGameError::IllegalMove(ECard::GK)));
    assert_untouched(&game);
    verify!(game.play(ECard::E8)).unwrap();
    assert_eq!(game.which_player_can_do_something(), Some(0));
}

#[test]
fn test_current_turn() {
    use crate::primitives::ECard::*;
    let mut game = rufspiel_game();
    play_all(&mut game, "HA GO HK HO");
    let turn = verify!(game.current_turn()).unwrap();
    assert_eq!(turn.i_stich, 1);
    assert_eq!(turn.epi, 1);
    assert_eq!(turn.hand, *game.hand(1));
    // holder of the rufsau leads: no eichel except the ace
    let mut veccard_allowed = turn.veccard_allowed.iter().copied().collect::<Vec<_>>();
    veccard_allowed.sort();
    assert_eq!(veccard_allowed, vec![EA, G7, HU, H8, SZ]);
    play_all(&mut game, "EA");
    let turn = verify!(game.current_turn()).unwrap();
    assert_eq!(turn.epi, 2);
    assert_eq!(turn.veccard_allowed.as_slice(), &[EZ]);
}

#[test]
fn test_scripted_kurz_trumpfgame() {
    let vechand = hands_from_str(&[
        "EO GO HO SO EU GU HA HZ",
        "HU SU HK H9 EA EZ GA GZ",
        "EK E9 GK G9 SA SZ SK S9",
    ]);
    let rules = SRulesTrumpfGame::new(0, 3, STrumpfDecider::new_ober_unter_herz());
    let mut game = SGame::new(VRules::from(rules), vechand, /*epi_first*/2);
    assert_eq!(game.kurzlang(), EKurzLang::Kurz);
    play_all(&mut game, "SA HA EA  HZ HK SZ");
    // koenig beats zehn in the herz trumpf tail
    assert_eq!(game.completed_stichs()[1].winner_index(), 1);
    play_all(&mut game, "GA GK EO  GO HU EK  HO SU SK  SO H9 E9  EU EZ G9  GU GZ S9");
    assert!(game.is_finished());
    assert_eq!(game.scores_per_player(), vec![96, 24, 0]);
    let gameresult = verify!(game.game_result()).unwrap();
    assert_eq!(gameresult.gameoutcome, SGameOutcome{b_primary_wins: true, eschneiderschwarz: ESchneiderSchwarz::Schneider});
    assert_eq!(gameresult.gameoutcome.magnitude(), 20);
    assert_eq!(gameresult.an_payout, vec![40, -20, -20]);
}

#[test]
fn test_random_games() {
    use rand::prelude::*;
    let mut rng = StdRng::seed_from_u64(7);
    for _i_game in 0..100 {
        let (vechand, rules) = verify!(deal::deal_until_rufspiel(
            EKurzLang::Lang,
            /*epi*/rng.gen_range(0..4),
            EFarbe::Schelln,
            /*b_davonlaufen*/rng.gen(),
            &mut rng,
        )).unwrap();
        let mut game = SGame::new(VRules::from(rules), vechand, /*epi_first*/rng.gen_range(0..4));
        while let Some(turn) = game.current_turn() {
            assert!(!turn.veccard_allowed.is_empty());
            let card = *verify!(turn.veccard_allowed.choose(&mut rng)).unwrap();
            verify!(game.play(card)).unwrap();
        }
        assert_eq!(game.completed_stichs().len(), 8);
        assert_eq!(game.scores_per_player().iter().sum::<isize>(), 120);
        assert_eq!(game.scores_per_team().iter().sum::<isize>(), 120);
        let gameresult = verify!(game.game_result()).unwrap();
        assert_eq!(gameresult.an_payout.iter().sum::<isize>(), 0);
        assert_eq!(game.play(ECard::SA), Err(VGameError::NotInHand(ECard::SA)));
    }
}
