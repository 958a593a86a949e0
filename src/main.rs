use std::{path::PathBuf, process, time::Instant};

use anyhow::{anyhow, Context, Result};
use colored::*;
use log::{debug, info};
use structopt::{self, StructOpt};

mod day;

use day::Part;

/// Solves an Advent of Code 2021 puzzle from an input file
#[derive(Debug, StructOpt)]
struct AdventOfCode {
    /// Which day to run, 1 through 31
    #[structopt(parse(try_from_str = day::parse_day))]
    day: u8,

    /// Which part to run, 1 or 2
    part: Part,

    /// Which input file to use, defaults to input/day<DAY>.txt
    #[structopt(short = "f", long, parse(from_os_str))]
    input_file: Option<PathBuf>,
}

impl AdventOfCode {
    fn input_file(&self) -> PathBuf {
        self.input_file
            .clone()
            .unwrap_or_else(|| day::default_input_path(self.day))
    }

    fn run(&self) -> Result<String> {
        info!("Solving day {} part {}", self.day, self.part);
        let solve = day::solver(self.day, self.part).ok_or_else(|| {
            anyhow!("Day {} part {} is not implemented, yet.", self.day, self.part)
        })?;

        let input_file = self.input_file();
        info!("Using file '{}'", input_file.display());
        let input = day::read_all_text(&input_file)?;
        debug!("Read {} bytes of input", input.len());

        let start = Instant::now();
        let solution = solve(&input).with_context(|| {
            format!("failed to solve day {} part {}", self.day, self.part)
        })?;
        info!("Solved in {:?}", start.elapsed());
        Ok(solution)
    }
}

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();
}

fn main() {
    let opt = AdventOfCode::from_args();
    init_logging();
    match opt.run() {
        Ok(solution) => println!("{} {}", "Solved:".bold(), solution),
        Err(err) => {
            eprintln!("{} {:#}", "Failed to solve!".red(), err);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, path::PathBuf, process};

    use structopt::StructOpt;

    use super::AdventOfCode;
    use crate::day::{Error, Part};

    fn parse(args: &[&str]) -> Result<AdventOfCode, structopt::clap::Error> {
        AdventOfCode::from_iter_safe(
            std::iter::once("aoc").chain(args.iter().copied()),
        )
    }

    fn write_input(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir()
            .join(format!("aoc-{}-{}.txt", process::id(), name));
        fs::write(&path, contents).expect("writable temp dir");
        path
    }

    #[test]
    fn parse_day_and_part() {
        let opt = parse(&["2", "1"]).expect("valid arguments");

        assert_eq!(opt.day, 2);
        assert_eq!(opt.part, Part::One);
        assert_eq!(opt.input_file, None);
        assert_eq!(opt.input_file(), PathBuf::from("input/day2.txt"));
    }

    #[test]
    fn parse_input_file_override() {
        let short = parse(&["1", "2", "-f", "sample.txt"]).expect("valid");
        let long =
            parse(&["1", "2", "--input-file", "sample.txt"]).expect("valid");

        assert_eq!(short.input_file(), PathBuf::from("sample.txt"));
        assert_eq!(long.input_file(), PathBuf::from("sample.txt"));
    }

    #[test]
    fn parse_rejects_out_of_range_arguments() {
        assert!(parse(&["0", "1"]).is_err());
        assert!(parse(&["32", "1"]).is_err());
        assert!(parse(&["1", "3"]).is_err());
        assert!(parse(&["one", "1"]).is_err());
        assert!(parse(&["1"]).is_err());
    }

    #[test]
    fn run_not_implemented_day() {
        let opt = parse(&["25", "1"]).expect("valid arguments");

        let err = opt.run().expect_err("day 25 is not solved");
        assert_eq!(err.to_string(), "Day 25 part 1 is not implemented, yet.");
    }

    #[test]
    fn run_missing_input_file() {
        let opt = parse(&["1", "1", "-f", "does/not/exist.txt"])
            .expect("valid arguments");

        let err = opt.run().expect_err("file does not exist");
        assert!(err.to_string().contains("does/not/exist.txt"));
    }

    #[test]
    fn run_solves_input_file() {
        let path = write_input("day1", "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n");
        let opt = parse(&["1", "2", "-f", path.to_str().expect("utf-8 path")])
            .expect("valid arguments");

        let solution = opt.run().expect("valid input");
        fs::remove_file(&path).ok();
        assert_eq!(solution, "5");
    }

    #[test]
    fn run_reports_solver_error() {
        let path = write_input("day2", "forward 5\nsideways 2\n");
        let opt = parse(&["2", "1", "-f", path.to_str().expect("utf-8 path")])
            .expect("valid arguments");

        let err = opt.run().expect_err("unknown command");
        fs::remove_file(&path).ok();
        assert_eq!(err.to_string(), "failed to solve day 2 part 1");
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnknownCommand { line: 2, .. })
        ));
    }
}
