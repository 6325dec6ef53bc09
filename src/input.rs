use crate::coins::calculate_coins;
use crate::error::{Error, Result};
use std::io::Read;
use std::num::IntErrorKind;

pub fn read_line<R: Read>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader
        .read_to_string(&mut line)
        .map_err(|source| Error::Io {
            path: "<stdin>".into(),
            source,
        })?;
    Ok(line.trim_end().to_owned())
}

pub fn read_words<R: Read>(reader: R) -> Result<Vec<String>> {
    let line = read_line(reader)?;
    Ok(line.split_whitespace().map(|s| s.to_owned()).collect())
}

/// Reads the day count from the first word.
/// Negative counts mean no days at all.
pub fn parse_target(words: &[String]) -> Result<u32> {
    let word = words.first().ok_or(Error::MissingInput)?;
    if words.len() > 1 {
        warn!("ignoring {} trailing word(s)", words.len() - 1);
    }

    let value = match word.parse::<i64>() {
        Ok(value) => value,
        Err(ref err) if *err.kind() == IntErrorKind::NegOverflow => i64::MIN,
        Err(ref err) if *err.kind() == IntErrorKind::PosOverflow => {
            return Err(Error::OutOfRange {
                word: word.to_owned(),
            })
        }
        Err(_) => {
            return Err(Error::InvalidNumber {
                word: word.to_owned(),
            })
        }
    };

    if value < 0 {
        debug!("negative day count {} treated as 0", word);
        return Ok(0);
    }
    if value > i64::from(u32::MAX) {
        return Err(Error::OutOfRange {
            word: word.to_owned(),
        });
    }
    Ok(value as u32)
}

/// Whole program from stdin text to stdout text.
pub fn solve(input: &str) -> Result<String> {
    let words = read_words(input.as_bytes())?;
    let k = parse_target(&words)?;
    Ok(format!("{}\n", calculate_coins(k)))
}
