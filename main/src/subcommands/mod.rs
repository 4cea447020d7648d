pub mod simulate;

use crate::util::*;
use sheepshead_lib::rules::ruleset::SRuleSet;

pub fn clap_arg(str_long: &'static str, str_default: &'static str) -> clap::Arg<'static> {
    clap::Arg::new(str_long)
        .long(str_long)
        .default_value(str_default)
}

pub fn get_ruleset(clapmatches: &clap::ArgMatches) -> Result<SRuleSet, Error> {
    match clapmatches.value_of("ruleset") {
        Some(str_path) => Ok(SRuleSet::from_file(std::path::Path::new(str_path))?),
        None => {
            info!("No ruleset given. Using default ruleset.");
            Ok(SRuleSet::default())
        },
    }
}
