//! Errors surfaced by the solver front end and the judge.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no input given")]
    MissingInput,

    #[error("not an integer: {word:?}")]
    InvalidNumber { word: String },

    #[error("day count out of range: {word}")]
    OutOfRange { word: String },

    #[error("couldn't read {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("couldn't enumerate cases: {0}")]
    Glob(String),

    #[error("invalid format in limits file: {line:?}")]
    InvalidLimitLine { line: String },

    #[error("problem {problem} not found in limits file")]
    UnknownProblem { problem: String },
}

impl From<glob::PatternError> for Error {
    fn from(err: glob::PatternError) -> Self {
        Error::Glob(err.to_string())
    }
}

impl From<glob::GlobError> for Error {
    fn from(err: glob::GlobError) -> Self {
        Error::Glob(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
