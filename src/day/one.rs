use std::collections::VecDeque;

use super::{numbered_lines, parse_integer, Result};

const WINDOW_SIZE: usize = 3;

fn measurements(input: &str) -> impl Iterator<Item = Result<i64>> + '_ {
    numbered_lines(input).map(|(line, text)| parse_integer(line, text))
}

/// Counts the measurements that are larger than the one before them.
pub fn solve_part_one(input: &str) -> Result<String> {
    let mut increases: usize = 0;
    let mut prior = None;
    for measurement in measurements(input) {
        let measurement = measurement?;
        match prior {
            Some(prior) if measurement > prior => increases += 1,
            _ => {}
        }
        prior = Some(measurement);
    }
    Ok(increases.to_string())
}

/// Counts the three-measurement window sums that are larger than the sum of
/// the window before them. Only full windows are compared.
pub fn solve_part_two(input: &str) -> Result<String> {
    let mut increases: usize = 0;
    let mut prior_sum = None;
    let mut window = VecDeque::with_capacity(WINDOW_SIZE);
    for measurement in measurements(input) {
        if window.len() == WINDOW_SIZE {
            window.pop_front();
        }
        window.push_back(measurement?);
        if window.len() < WINDOW_SIZE {
            continue;
        }

        let sum = window
            .iter()
            .fold(0i64, |sum, value| sum.wrapping_add(*value));
        match prior_sum {
            Some(prior_sum) if sum > prior_sum => increases += 1,
            _ => {}
        }
        prior_sum = Some(sum);
    }
    Ok(increases.to_string())
}
