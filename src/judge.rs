//! Local judge: runs the solver over stored cases and checks the answers.
//!
//! Cases live in `Problem <id>` directories as `input.txt` / `answer.txt`
//! pairs. Time and memory limits per problem come from a limits file with
//! lines of the form `<id> <seconds> <megabytes>`.

use crate::config::JudgeConfig;
use crate::error::{Error, Result};
use crate::input::solve;
use glob::{glob, Pattern};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    RuntimeError,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Accepted => "Accepted",
            Verdict::WrongAnswer => "Wrong Answer",
            Verdict::TimeLimitExceeded => "Time Lim Exc",
            Verdict::RuntimeError => "Runtime Error",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wraps the verdict label in ANSI colors for terminal output.
pub fn colored(verdict: Verdict) -> String {
    match verdict {
        Verdict::Accepted => format!("\x1b[94m{}\x1b[0m", verdict),
        _ => format!("\x1b[91m{}\x1b[0m", verdict),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub time_limit: Duration,
    /// Printed with the results; not enforced.
    pub memory_limit_mb: u64,
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Time Limit: {}s \tMemory Limit: {}MB",
            self.time_limit.as_secs(),
            self.memory_limit_mb
        )
    }
}

pub fn parse_limits(text: &str) -> Result<BTreeMap<String, Limits>> {
    let mut limits = BTreeMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let invalid = || Error::InvalidLimitLine {
            line: line.to_owned(),
        };

        let parts = line.split_whitespace().collect::<Vec<_>>();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let seconds = parts[1].parse::<u64>().map_err(|_| invalid())?;
        let memory_limit_mb = parts[2].parse::<u64>().map_err(|_| invalid())?;

        limits.insert(
            parts[0].to_owned(),
            Limits {
                time_limit: Duration::from_secs(seconds),
                memory_limit_mb,
            },
        );
    }

    Ok(limits)
}

/// Compares outputs line by line, ignoring surrounding whitespace on each line.
pub fn compare_outputs(actual: &str, expected: &str) -> bool {
    let actual = actual.lines().map(str::trim).collect::<Vec<_>>();
    let expected = expected.lines().map(str::trim).collect::<Vec<_>>();
    actual == expected
}

#[derive(Clone, Debug)]
pub struct CaseResult {
    pub verdict: Verdict,
    pub message: String,
    pub elapsed: Duration,
}

pub fn judge_case(input: &str, expected: &str, limits: &Limits) -> CaseResult {
    let start = Instant::now();
    let result = solve(input);
    let elapsed = start.elapsed();

    let (verdict, message) = match result {
        Err(err) => (Verdict::RuntimeError, format!("RE: {}", err)),
        Ok(_) if elapsed > limits.time_limit => (
            Verdict::TimeLimitExceeded,
            format!(
                "TLE ({:.3}s > {}s)",
                secs(elapsed),
                limits.time_limit.as_secs()
            ),
        ),
        Ok(ref output) if !compare_outputs(output, expected) => {
            debug!("expected {:?}, got {:?}", expected, output);
            (Verdict::WrongAnswer, "WA".to_owned())
        }
        Ok(_) => (Verdict::Accepted, "Correct!".to_owned()),
    };

    CaseResult {
        verdict,
        message,
        elapsed,
    }
}

pub fn secs(duration: Duration) -> f64 {
    duration.as_secs() as f64 + f64::from(duration.subsec_nanos()) * 1e-9
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Case {
    pub input_path: PathBuf,
    pub answer_path: PathBuf,
}

/// Finds `input.txt` files under any `Problem <id>` directory below `dir`.
pub fn find_cases(dir: &Path, problem: &str) -> Result<Vec<Case>> {
    let pat = format!(
        "{}/**/Problem {}/**/input.txt",
        Pattern::escape(&dir.display().to_string()),
        Pattern::escape(problem)
    );
    trace!("collecting {}", pat);

    let mut cases = Vec::new();
    for path in glob(&pat)? {
        let input_path = path?;
        let answer_path = input_path.with_file_name("answer.txt");
        cases.push(Case {
            input_path,
            answer_path,
        });
    }

    cases.sort();
    cases.dedup();
    Ok(cases)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

#[derive(Clone, Debug)]
pub struct ProblemReport {
    pub problem: String,
    pub limits: Limits,
    pub cases: Vec<(Case, CaseResult)>,
}

impl ProblemReport {
    pub fn all_accepted(&self) -> bool {
        self.cases
            .iter()
            .all(|(_, result)| result.verdict == Verdict::Accepted)
    }
}

pub fn judge(config: &JudgeConfig) -> Result<Vec<ProblemReport>> {
    let limits = parse_limits(&read_file(&config.limits_path)?)?;

    let mut reports = Vec::new();
    for problem in config.problems.iter() {
        let problem_limits = match limits.get(problem) {
            Some(limits) => *limits,
            None => {
                return Err(Error::UnknownProblem {
                    problem: problem.to_owned(),
                })
            }
        };

        let cases = find_cases(&config.cases_path, problem)?;
        if cases.is_empty() {
            warn!("no cases for problem {}", problem);
        }

        let mut results = Vec::new();
        for case in cases {
            let input = read_file(&case.input_path)?;
            let answer = read_file(&case.answer_path)?;
            let result = judge_case(&input, &answer, &problem_limits);
            info!(
                "{} {:?} {}",
                problem,
                case.input_path,
                result.verdict.label()
            );
            results.push((case, result));
        }

        reports.push(ProblemReport {
            problem: problem.to_owned(),
            limits: problem_limits,
            cases: results,
        });
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::process;

    fn limits() -> Limits {
        Limits {
            time_limit: Duration::from_secs(1),
            memory_limit_mb: 256,
        }
    }

    #[test]
    fn test_parse_limits() {
        let limits = parse_limits("A 1 256\n\nB 2 512\n").unwrap();
        assert_eq!(2, limits.len());
        assert_eq!(Duration::from_secs(2), limits["B"].time_limit);
        assert_eq!(256, limits["A"].memory_limit_mb);
    }

    #[test]
    fn test_parse_limits_rejects_bad_lines() {
        match parse_limits("A 1\n") {
            Err(Error::InvalidLimitLine { line }) => assert_eq!("A 1", line),
            other => panic!("{:?}", other),
        }
        assert!(parse_limits("A one 256").is_err());
    }

    #[test]
    fn test_limits_display() {
        let limits = parse_limits("A 2 512\n").unwrap();
        assert_eq!(
            "Time Limit: 2s \tMemory Limit: 512MB",
            limits["A"].to_string()
        );
    }

    #[test]
    fn test_compare_outputs() {
        assert!(compare_outputs("3\n", "3"));
        assert!(compare_outputs("  3 \r\n", "3\n"));
        assert!(!compare_outputs("3\n", "4\n"));
        assert!(!compare_outputs("3\n", "3\n\n"));
    }

    #[test]
    fn test_judge_case() {
        assert_eq!(Verdict::Accepted, judge_case("2\n", "3\n", &limits()).verdict);
        assert_eq!(Verdict::WrongAnswer, judge_case("2\n", "4\n", &limits()).verdict);
        assert_eq!(Verdict::RuntimeError, judge_case("two\n", "3\n", &limits()).verdict);
    }

    #[test]
    fn test_judge_case_time_limit() {
        let limits = Limits {
            time_limit: Duration::from_secs(0),
            ..limits()
        };
        let result = judge_case("4294967295\n", "265377152944209\n", &limits);
        assert_eq!(Verdict::TimeLimitExceeded, result.verdict);
    }

    #[test]
    fn test_colored() {
        assert_eq!("\x1b[94mAccepted\x1b[0m", colored(Verdict::Accepted));
        assert_eq!("\x1b[91mWrong Answer\x1b[0m", colored(Verdict::WrongAnswer));
    }

    #[test]
    fn test_judge_directory() {
        let root = env::temp_dir().join(format!("coin-rounds-judge-{}", process::id()));
        let problem_dir = root.join("Summer Camp 2024").join("Problem A");
        fs::create_dir_all(problem_dir.join("large")).unwrap();
        fs::write(problem_dir.join("input.txt"), "2\n").unwrap();
        fs::write(problem_dir.join("answer.txt"), "3\n").unwrap();
        fs::write(problem_dir.join("large").join("input.txt"), "1000\n").unwrap();
        fs::write(problem_dir.join("large").join("answer.txt"), "1\n").unwrap();
        fs::write(root.join("time_memory_limit.txt"), "A 1 256\n").unwrap();

        let mut config = JudgeConfig {
            cases_path: root.clone(),
            limits_path: root.join("time_memory_limit.txt"),
            problems: vec!["A".to_owned()],
        };
        let reports = judge(&config).unwrap();

        assert_eq!(1, reports.len());
        let verdicts = reports[0]
            .cases
            .iter()
            .map(|(_, result)| result.verdict)
            .collect::<Vec<_>>();
        assert_eq!(vec![Verdict::Accepted, Verdict::WrongAnswer], verdicts);
        assert!(!reports[0].all_accepted());
        assert_eq!(256, reports[0].limits.memory_limit_mb);

        config.problems = vec!["B".to_owned()];
        match judge(&config) {
            Err(Error::UnknownProblem { problem }) => assert_eq!("B", problem),
            other => panic!("{:?}", other),
        }

        fs::remove_dir_all(&root).unwrap();
    }
}
