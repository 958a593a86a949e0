use super::{numbered_lines, parse_integer, Error, Result};

const FORWARD: &str = "forward";
const UP: &str = "up";
const DOWN: &str = "down";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Up,
    Down,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Movement {
    direction: Direction,
    amount: i64,
}

impl Movement {
    /// Parses `<direction> <amount>`. A missing amount is an empty token.
    fn parse(line: usize, text: &str) -> Result<Movement> {
        let (direction, amount) = match text.split_once(char::is_whitespace) {
            Some((direction, amount)) => (direction, amount.trim()),
            None => (text, ""),
        };
        let amount = parse_integer(line, amount)?;
        let direction = match direction {
            FORWARD => Direction::Forward,
            UP => Direction::Up,
            DOWN => Direction::Down,
            unknown => {
                return Err(Error::UnknownCommand {
                    line,
                    token: unknown.to_owned(),
                })
            }
        };
        Ok(Movement { direction, amount })
    }
}

fn movements(input: &str) -> impl Iterator<Item = Result<Movement>> + '_ {
    numbered_lines(input).map(|(line, text)| Movement::parse(line, text))
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Position {
    horizontal: i64,
    depth: i64,
    aim: i64,
}

impl Position {
    fn apply_movement(&mut self, movement: Movement) {
        let amount = movement.amount;
        match movement.direction {
            Direction::Forward => {
                self.horizontal = self.horizontal.wrapping_add(amount)
            }
            Direction::Up => self.depth = self.depth.wrapping_sub(amount),
            Direction::Down => self.depth = self.depth.wrapping_add(amount),
        }
    }

    fn apply_aimed(&mut self, movement: Movement) {
        let amount = movement.amount;
        match movement.direction {
            Direction::Forward => {
                self.horizontal = self.horizontal.wrapping_add(amount);
                self.depth =
                    self.depth.wrapping_add(self.aim.wrapping_mul(amount));
            }
            Direction::Up => self.aim = self.aim.wrapping_sub(amount),
            Direction::Down => self.aim = self.aim.wrapping_add(amount),
        }
    }

    fn product(&self) -> i64 {
        self.horizontal.wrapping_mul(self.depth)
    }
}

fn plot_course(
    input: &str,
    apply: fn(&mut Position, Movement),
) -> Result<Position> {
    let mut position = Position::default();
    for movement in movements(input) {
        apply(&mut position, movement?);
    }
    Ok(position)
}

/// `forward` moves horizontally, `up` and `down` change the depth directly.
pub fn solve_part_one(input: &str) -> Result<String> {
    Ok(plot_course(input, Position::apply_movement)?
        .product()
        .to_string())
}

/// `up` and `down` change the aim, and `forward` dives by aim times amount.
pub fn solve_part_two(input: &str) -> Result<String> {
    Ok(plot_course(input, Position::apply_aimed)?
        .product()
        .to_string())
}
