#![deny(bare_trait_objects)]

mod util;
mod player;
mod subcommands;

use crate::util::*;

fn main() -> Result<(), Error> {
    init_logging("sheepshead", /*olevelfilter*/None)?;
    macro_rules! subcommands{($(($mod:ident, $str_cmd:expr))*) => {
        let clapmatches = clap::Command::new("sheepshead")
            .about("Rule engine for Sheepshead/Schafkopf")
            .subcommand_required(true)
            $(.subcommand(subcommands::$mod::subcommand($str_cmd)))*
            .get_matches();
        $(
            if let Some(clapmatches_subcommand)=clapmatches.subcommand_matches($str_cmd) {
                return subcommands::$mod::run(clapmatches_subcommand);
            }
        )*
    }}
    subcommands!(
        (simulate, "simulate")
    );
    Ok(())
}
