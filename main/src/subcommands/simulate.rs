use crate::player::{playerrandom::SPlayerRandom, TPlayer};
use crate::util::*;
use itertools::Itertools;
use rand::prelude::*;
use rayon::prelude::*;
use sheepshead_lib::{
    game::{deal::deal_until_rufspiel, SGame, SGameResult},
    primitives::*,
    rules::{payoutdecider::SGameOutcome, ruleset::SRuleSet, VRules},
};
use std::collections::BTreeMap;

pub fn subcommand(str_subcommand: &'static str) -> clap::Command<'static> {
    use super::clap_arg;
    clap::Command::new(str_subcommand)
        .about("Play random games and sum up the payouts")
        .arg(clap_arg("games", "1000")
            .help("Number of games to simulate")
        )
        .arg(clap_arg("seed", "0")
            .help("Seed for dealing and playing; game i uses seed+i")
        )
        .arg(clap::Arg::new("ruleset")
            .long("ruleset")
            .takes_value(true)
            .help("TOML file describing the rule set")
        )
        .arg(clap_arg("playmaker", "0")
            .help("Player calling the ace")
        )
        .arg(clap_arg("rufsau", "Eichel")
            .help("Farbe of the called ace (Eichel, Gras or Schelln)")
        )
}

/// Accumulated results of many games.
#[derive(Debug, Default)]
pub struct SSimulation {
    pub n_games: usize,
    pub an_payout: Vec<isize>,
    pub mapgameoutcomen_count: BTreeMap<SGameOutcome, usize>,
}

impl SSimulation {
    fn accumulate(mut self, gameresult: SGameResult) -> Self {
        if self.an_payout.is_empty() {
            self.an_payout = vec![0; gameresult.an_payout.len()];
        }
        assert_eq!(self.an_payout.len(), gameresult.an_payout.len());
        for (n_payout_total, n_payout) in self.an_payout.iter_mut().zip_eq(gameresult.an_payout.iter()) {
            *n_payout_total += n_payout;
        }
        *self.mapgameoutcomen_count.entry(gameresult.gameoutcome).or_insert(0) += 1;
        self.n_games += 1;
        self
    }
}

pub fn play_random_game(ruleset: &SRuleSet, epi_playmaker: EPlayerIndex, efarbe_rufsau: EFarbe, n_seed: u64) -> Result<SGameResult, Error> {
    let mut rng = StdRng::seed_from_u64(n_seed);
    let (vechand, rules) = deal_until_rufspiel(
        ruleset.ekurzlang,
        epi_playmaker,
        efarbe_rufsau,
        ruleset.b_davonlaufen,
        &mut rng,
    )?;
    let mut game = SGame::new(VRules::from(rules), vechand, /*epi_first*/0);
    let mut playerrandom = SPlayerRandom::new(rng);
    while let Some(turn) = game.current_turn() {
        game.play(playerrandom.ask_for_card(&turn))?;
    }
    Ok(game.game_result()?)
}

pub fn simulate(ruleset: &SRuleSet, epi_playmaker: EPlayerIndex, efarbe_rufsau: EFarbe, n_games: usize, n_seed: u64) -> Result<SSimulation, Error> {
    if ruleset.ekurzlang.num_players()<=epi_playmaker {
        bail!("Playmaker {} does not exist in a game with {} players.", epi_playmaker, ruleset.ekurzlang.num_players());
    }
    let vecgameresult = (0..n_games).into_par_iter()
        .map(|i_game| play_random_game(ruleset, epi_playmaker, efarbe_rufsau, n_seed.wrapping_add(i_game as u64)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(vecgameresult.into_iter().fold(SSimulation::default(), SSimulation::accumulate))
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let ruleset = super::get_ruleset(clapmatches)?;
    let n_games = clapmatches.value_of_t::<usize>("games")?;
    let n_seed = clapmatches.value_of_t::<u64>("seed")?;
    let epi_playmaker = clapmatches.value_of_t::<EPlayerIndex>("playmaker")?;
    let efarbe_rufsau = clapmatches.value_of("rufsau")
        .ok_or_else(|| format_err!("No farbe given for the called ace."))?
        .parse::<EFarbe>()?;
    info!("Simulating {} games ({}, davonlaufen: {}) with seed {}", n_games, ruleset.ekurzlang, ruleset.b_davonlaufen, n_seed);
    let simulation = simulate(&ruleset, epi_playmaker, efarbe_rufsau, n_games, n_seed)?;
    println!("{} games, {}-Sau called by player {}", simulation.n_games, efarbe_rufsau, epi_playmaker);
    for (epi, n_payout) in simulation.an_payout.iter().enumerate() {
        println!("Player {}: {:>8}", epi, n_payout);
    }
    println!("{}", simulation.mapgameoutcomen_count.iter()
        .map(|(gameoutcome, n_count)| format!("{:>8} {}", n_count, gameoutcome))
        .join("\n")
    );
    Ok(())
}

#[test]
fn test_simulate() {
    let simulation = verify!(simulate(&SRuleSet::default(), 1, EFarbe::Gras, 50, 17)).unwrap();
    assert_eq!(simulation.n_games, 50);
    assert_eq!(simulation.an_payout.len(), 4);
    assert_eq!(simulation.an_payout.iter().sum::<isize>(), 0);
    assert_eq!(simulation.mapgameoutcomen_count.values().sum::<usize>(), 50);
    // parallel execution does not change the outcome
    let simulation_again = verify!(simulate(&SRuleSet::default(), 1, EFarbe::Gras, 50, 17)).unwrap();
    assert_eq!(simulation.an_payout, simulation_again.an_payout);

    let simulation_kurz = verify!(simulate(&SRuleSet::new(EKurzLang::Kurz, true), 2, EFarbe::Schelln, 20, 0)).unwrap();
    assert_eq!(simulation_kurz.an_payout.len(), 3);
    assert_eq!(simulation_kurz.an_payout.iter().sum::<isize>(), 0);

    assert!(simulate(&SRuleSet::new(EKurzLang::Kurz, false), 3, EFarbe::Eichel, 1, 0).is_err());
    assert!(simulate(&SRuleSet::default(), 0, EFarbe::Herz, 1, 0).is_err());
}
