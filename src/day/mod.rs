use std::{
    fmt::{self, Display},
    fs::File,
    io::Read,
    num::ParseIntError,
    path::{Path, PathBuf},
    result,
    str::FromStr,
};

use anyhow::Context;

pub mod one;
pub mod two;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("failed to parse '{token}' on line {line}")]
    Parse {
        line: usize,
        token: String,
        source: ParseIntError,
    },
    #[error("unknown command '{token}' on line {line}")]
    UnknownCommand { line: usize, token: String },
}

pub type Result<T> = result::Result<T, Error>;

pub type Solver = fn(&str) -> Result<String>;

#[derive(Debug, thiserror::Error)]
#[error("Failed to parse part from '{0}', expected 1 or 2")]
pub struct ParsePartError(String);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl FromStr for Part {
    type Err = ParsePartError;

    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Part::One),
            "2" => Ok(Part::Two),
            _ => Err(ParsePartError(s.to_owned())),
        }
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => write!(f, "1"),
            Part::Two => write!(f, "2"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to parse day from '{0}', expected 1 through 31")]
pub struct ParseDayError(String);

pub fn parse_day(s: &str) -> result::Result<u8, ParseDayError> {
    match s.trim().parse::<u8>() {
        Ok(day) if (1..=31).contains(&day) => Ok(day),
        _ => Err(ParseDayError(s.to_owned())),
    }
}

pub fn solver(day: u8, part: Part) -> Option<Solver> {
    let solver: Solver = match (day, part) {
        (1, Part::One) => one::solve_part_one,
        (1, Part::Two) => one::solve_part_two,
        (2, Part::One) => two::solve_part_one,
        (2, Part::Two) => two::solve_part_two,
        _ => return None,
    };
    Some(solver)
}

pub fn default_input_path(day: u8) -> PathBuf {
    PathBuf::from(format!("input/day{}.txt", day))
}

/// Yields the trimmed, non-blank lines of `input` with their 1-based line
/// numbers. Blank lines still count towards the numbering.
fn numbered_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .split('\n')
        .map(str::trim)
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_integer(line: usize, token: &str) -> Result<i64> {
    token.parse().map_err(|source| Error::Parse {
        line,
        token: token.to_owned(),
        source,
    })
}

pub fn read_all_text(file_path: &Path) -> anyhow::Result<String> {
    let mut file = File::open(file_path).with_context(|| {
        format!("failed to open file '{}'", file_path.display())
    })?;
    let mut buffer = String::new();
    file.read_to_string(&mut buffer).with_context(|| {
        format!("failed to read text from '{}'", file_path.display())
    })?;
    Ok(buffer)
}
