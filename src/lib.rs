#[macro_use]
extern crate clap;
extern crate glob;
#[macro_use]
extern crate log;
extern crate thiserror;

pub mod coins;
pub mod config;
pub mod error;
pub mod input;
pub mod judge;

pub use crate::coins::calculate_coins;
pub use crate::error::{Error, Result};

/// Builds CLI app metadata, especially command line arguments format.
pub fn app<'a, 'b>() -> clap::App<'a, 'b> {
    let settings = {
        use clap::AppSettings::*;
        [GlobalVersion, VersionlessSubcommands]
    };
    clap::App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .settings(&settings)
        .after_help("Without a subcommand, reads a day count from stdin and prints the coins earned.")
        .subcommand(
            clap::SubCommand::with_name("judge")
                .about("Checks the solver against stored cases")
                .arg(
                    clap::Arg::with_name("cases")
                        .long("cases")
                        .takes_value(true)
                        .number_of_values(1)
                        .help("Directory searched for `Problem <id>` cases (defaults to ./cases)"),
                )
                .arg(
                    clap::Arg::with_name("limits")
                        .long("limits")
                        .takes_value(true)
                        .number_of_values(1)
                        .help("Time and memory limit file (defaults to <cases>/time_memory_limit.txt)"),
                )
                .arg(
                    clap::Arg::with_name("problem")
                        .long("problem")
                        .takes_value(true)
                        .multiple(true)
                        .number_of_values(1)
                        .help("Problem id to judge (defaults to A)"),
                ),
        )
}
