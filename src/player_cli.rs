#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use crate::{
    board::BattleField,
    common::{Coordinate, ShotResult},
    config::GRID_SIZE,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Why a line of input was not accepted as a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Not two whole numbers.
    Malformed,
    /// Two numbers, but not both in `0..GRID_SIZE`.
    OutOfRange { x: i64, y: i64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Malformed => write!(f, "Please enter two numbers, e.g. \"3 4\"."),
            InputError::OutOfRange { x, y } => write!(
                f,
                "({}, {}) is off the grid; both values must be between 0 and {}.",
                x,
                y,
                GRID_SIZE - 1
            ),
        }
    }
}

/// Parse `"x y"` (whitespace or comma separated) into an on-grid coordinate.
pub fn parse_target(input: &str) -> Result<Coordinate, InputError> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    let (Some(xs), Some(ys), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Malformed);
    };
    let x: i64 = xs.parse().map_err(|_| InputError::Malformed)?;
    let y: i64 = ys.parse().map_err(|_| InputError::Malformed)?;
    let on_grid = |v: i64| usize::try_from(v).ok().filter(|v| *v < GRID_SIZE);
    match (on_grid(x), on_grid(y)) {
        (Some(cx), Some(cy)) => Ok(Coordinate::new(cx, cy)),
        _ => Err(InputError::OutOfRange { x, y }),
    }
}

/// Interactive player reading targets from `input` and reporting to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// A player on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, mostly for inspecting what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.output.write_fmt(args).and_then(|()| self.output.flush()) {
            log::warn!("failed to write to console: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng, _opponent: &BattleField) -> Option<Coordinate> {
        loop {
            self.say(format_args!("\nYour turn! Enter target coordinates (x y): "));
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    self.say(format_args!("\n"));
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("failed to read input: {}", e);
                    return None;
                }
            }
            match parse_target(line.trim()) {
                Ok(target) => return Some(target),
                Err(e) => {
                    log::warn!("rejected input {:?}: {:?}", line.trim(), e);
                    self.say(format_args!("{}\n", e));
                }
            }
        }
    }

    fn handle_shot_result(&mut self, _target: Coordinate, result: ShotResult, sunk: bool) {
        match result {
            ShotResult::Hit => self.say(format_args!("Hit!\n")),
            ShotResult::Miss => self.say(format_args!("Miss!\n")),
        }
        if sunk {
            self.say(format_args!("You sank a ship!\n"));
        }
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, result: ShotResult, sunk: bool) {
        self.say(format_args!("\nComputer's turn: {}\n", target));
        match result {
            ShotResult::Hit => self.say(format_args!("The computer hit your ship!\n")),
            ShotResult::Miss => self.say(format_args!("The computer missed!\n")),
        }
        if sunk {
            self.say(format_args!("The computer sank one of your ships!\n"));
        }
    }
}
