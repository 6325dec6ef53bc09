extern crate coin_rounds;
extern crate env_logger;
#[macro_use]
extern crate log;

use coin_rounds::config::{Command, Config, JudgeConfig};
use coin_rounds::{input, judge};
use std::io;
use std::process;

fn solve() -> coin_rounds::Result<()> {
    let text = input::read_line(io::stdin())?;
    let output = input::solve(&text)?;
    debug!("input={:?} output={:?}", text, output);

    print!("{}", output);
    Ok(())
}

/// Prints one line per case and tells whether everything was accepted.
fn run_judge(config: &JudgeConfig) -> coin_rounds::Result<bool> {
    let reports = judge::judge(config)?;

    println!("Judging results for {}:", config.cases_path.display());
    for report in reports.iter() {
        println!("Problem {}: \t{}", report.problem, report.limits);
        for (case, result) in report.cases.iter() {
            println!(
                "Problem {}: \t{} \tTime: {:.3}s \tMessage: {}",
                report.problem,
                judge::colored(result.verdict),
                judge::secs(result.elapsed),
                result.message
            );
            trace!("{:?}", case);
        }
    }

    Ok(reports.iter().all(|report| report.all_accepted()))
}

fn main() {
    env_logger::init();

    let matches = coin_rounds::app().get_matches();
    let config = Config::from_matches(&matches);

    let result = match config.command {
        Command::Solve => solve().map(|()| true),
        Command::Judge(ref judge_config) => run_judge(judge_config),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}
