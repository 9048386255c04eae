#![cfg(feature = "std")]

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, Coord, ShotOutcome};
use crate::player::Player;

/// Human player reading targets from stdin.
///
/// Prompts for a 1-based row digit and a column letter, re-prompting until
/// both are in range, and converts them to a zero-based coordinate. This is
/// the only place the simulation blocks.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable cell label, e.g. `C3` for `(2, 2)`.
pub fn coord_label(c: Coord) -> String {
    let col = (b'A' + c.y as u8) as char;
    format!("{}{}", col, c.x + 1)
}

fn parse_row(input: &str, size: u32) -> Option<i32> {
    let row: u32 = input.trim().parse().ok()?;
    if row >= 1 && row <= size {
        Some(row as i32 - 1)
    } else {
        None
    }
}

fn parse_column(input: &str, size: u32) -> Option<i32> {
    let mut chars = input.trim().chars();
    let ch = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    let col = (ch as u8).wrapping_sub(b'A') as u32;
    if ch.is_ascii_alphabetic() && col < size {
        Some(col as i32)
    } else {
        None
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(_) => line,
        Err(_) => String::new(),
    }
}

impl Player for CliPlayer {
    fn choose_target(&mut self, _rng: &mut SmallRng, _own: &Board, enemy: &Board) -> Coord {
        let size = enemy.size();
        let x = loop {
            let line = prompt_line(&format!("Row (1-{}): ", size));
            match parse_row(&line, size) {
                Some(x) => break x,
                None => println!("Not a valid row, try again."),
            }
        };
        let last = (b'A' + size as u8 - 1) as char;
        let y = loop {
            let line = prompt_line(&format!("Column (A-{}): ", last));
            match parse_column(&line, size) {
                Some(y) => break y,
                None => println!("Not a valid column, try again."),
            }
        };
        Coord::new(x, y)
    }

    fn handle_shot_result(&mut self, target: Coord, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Miss => println!("{}: miss.", coord_label(target)),
            ShotOutcome::Hit => println!("{}: hit!", coord_label(target)),
            ShotOutcome::Sunk => println!("{}: vessel destroyed!", coord_label(target)),
        }
    }

    fn handle_shot_error(&mut self, _target: Coord, err: &BoardError) {
        println!("{}", err);
    }

    fn handle_opponent_shot(&mut self, target: Coord, outcome: ShotOutcome) {
        let what = match outcome {
            ShotOutcome::Miss => "misses",
            ShotOutcome::Hit => "hits",
            ShotOutcome::Sunk => "sinks a vessel",
        };
        println!("Opponent fires at {} and {}.", coord_label(target), what);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_one_based_and_range_checked() {
        assert_eq!(parse_row("1", 6), Some(0));
        assert_eq!(parse_row(" 6 \n", 6), Some(5));
        assert_eq!(parse_row("0", 6), None);
        assert_eq!(parse_row("7", 6), None);
        assert_eq!(parse_row("x", 6), None);
    }

    #[test]
    fn columns_are_letters_and_range_checked() {
        assert_eq!(parse_column("A", 6), Some(0));
        assert_eq!(parse_column("f\n", 6), Some(5));
        assert_eq!(parse_column("G", 6), None);
        assert_eq!(parse_column("AB", 6), None);
        assert_eq!(parse_column("3", 6), None);
        assert_eq!(parse_column("", 6), None);
    }

    #[test]
    fn labels_read_column_first() {
        assert_eq!(coord_label(Coord::new(2, 2)), "C3");
        assert_eq!(coord_label(Coord::new(0, 0)), "A1");
    }
}
