//! Defines data structures of command line arguments.

use std::path::PathBuf;

pub const DEFAULT_CASES_DIR: &str = "cases";
pub const LIMITS_FILE_NAME: &str = "time_memory_limit.txt";
pub const DEFAULT_PROBLEM: &str = "A";

#[derive(Clone, Debug, PartialEq)]
pub struct JudgeConfig {
    pub cases_path: PathBuf,
    pub limits_path: PathBuf,
    pub problems: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Read the day count from stdin and print the coins.
    Solve,
    Judge(JudgeConfig),
}

#[derive(Debug)]
pub struct Config {
    pub command: Command,
}

impl Config {
    pub fn from_matches(gm: &clap::ArgMatches) -> Self {
        let command = match gm.subcommand() {
            ("judge", Some(sm)) => Command::Judge(JudgeConfig::from_matches(sm)),
            ("", None) => Command::Solve,
            (name, _) => {
                error!("unknown subcommand {}", name);
                Command::Solve
            }
        };
        trace!("{:?}", command);

        Config { command }
    }
}

impl JudgeConfig {
    pub fn from_matches(sm: &clap::ArgMatches) -> Self {
        let cases_path = PathBuf::from(sm.value_of("cases").unwrap_or(DEFAULT_CASES_DIR));

        let limits_path = sm
            .value_of("limits")
            .map(PathBuf::from)
            .unwrap_or_else(|| cases_path.join(LIMITS_FILE_NAME));

        let mut problems = sm
            .values_of("problem")
            .into_iter()
            .flat_map(|names| names)
            .map(|name| name.to_owned())
            .collect::<Vec<_>>();
        if problems.is_empty() {
            problems.push(DEFAULT_PROBLEM.to_owned());
        }

        JudgeConfig {
            cases_path,
            limits_path,
            problems,
        }
    }
}
