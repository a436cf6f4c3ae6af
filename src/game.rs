use std::fmt;

use thiserror::Error;

use crate::grid::{Digit, Grid, Pos};
use crate::rules;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player { One, Two }

impl Player {
    pub fn other(self) -> Self {
        match self { Player::One => Player::Two, Player::Two => Player::One }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// A validated, 0-based placement. Lives for one loop iteration only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub digit: Digit,
}

/// Everything that can go wrong with one submitted line, all of it
/// recoverable: the same player just tries again.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Invalid input. Please enter 3 numbers separated by spaces.")]
    Malformed,
    #[error("All numbers must be between 1 and 9.")]
    OutOfRange,
    #[error("Cell ({row}, {col}) is already filled. Choose another.")]
    Occupied { row: usize, col: usize }, // 1-based, as the player typed them
    #[error("Invalid move! {digit} cannot be placed there.")]
    Conflict { digit: Digit },
}

/// Outcome of feeding one input line to [`Game::submit_line`].
///
/// `Quit` and `Completed` are terminal signals; the game never exits the
/// process itself, the harness decides how to shut down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Placement accepted; `player` placed `mov` and the turn passed on.
    Placed { player: Player, mov: Move },
    /// Input rejected; grid and player indicator untouched.
    Rejected(MoveError),
    /// Final cell filled; `winner` placed the last digit.
    Completed { winner: Player },
    /// Quit sentinel received.
    Quit,
}

/// The turn controller: owns the grid and the player indicator, drives
/// one read-validate-apply-switch step per submitted line. All legality
/// decisions are delegated to [`rules`]; all I/O stays with the caller.
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    current: Player,
}

impl Default for Game {
    fn default() -> Self { Self::new() }
}

impl Game {
    pub fn new() -> Self {
        Self { grid: Grid::empty(), current: Player::One }
    }

    /// Start from a prefilled grid, Player 1 to move. Seam for tests and
    /// for embedding the engine outside a fresh interactive session.
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid, current: Player::One }
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn current_player(&self) -> Player { self.current }

    /// Run one full turn iteration on an already-acquired input line.
    ///
    /// Rejections mutate nothing, so resubmitting the same bad line
    /// yields the same rejection against an identical grid.
    pub fn submit_line(&mut self, line: &str) -> Turn {
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Turn::Quit;
        }

        let mov = match parse_move(line) {
            Ok(m) => m,
            Err(e) => return Turn::Rejected(e),
        };

        if self.grid.get(mov.pos) != 0 {
            return Turn::Rejected(MoveError::Occupied {
                row: mov.pos.r + 1,
                col: mov.pos.c + 1,
            });
        }
        if !rules::is_valid_placement(&self.grid, mov.pos, mov.digit) {
            return Turn::Rejected(MoveError::Conflict { digit: mov.digit });
        }

        self.grid.set(mov.pos, mov.digit);
        let player = self.current;
        log::debug!(
            "{player} placed {} at r{},c{}",
            mov.digit,
            mov.pos.r + 1,
            mov.pos.c + 1
        );

        if rules::is_full(&self.grid) {
            return Turn::Completed { winner: player };
        }

        self.current = player.other();
        Turn::Placed { player, mov }
    }
}

/// Tokenize a line into a 0-based [`Move`]. Expects exactly three
/// integers, each in 1..=9: row, column, digit.
fn parse_move(line: &str) -> Result<Move, MoveError> {
    let mut values = [0u8; 3];
    let mut count = 0;
    for tok in line.split_whitespace() {
        if count == 3 {
            return Err(MoveError::Malformed);
        }
        values[count] = tok.parse().map_err(|_| MoveError::Malformed)?;
        count += 1;
    }
    if count != 3 {
        return Err(MoveError::Malformed);
    }
    if values.iter().any(|&v| !(1..=9).contains(&v)) {
        return Err(MoveError::OutOfRange);
    }
    let [row, col, digit] = values;
    Ok(Move {
        pos: Pos { r: row as usize - 1, c: col as usize - 1 },
        digit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_happy_path() {
        let m = parse_move("3 5 7").unwrap();
        assert_eq!(m, Move { pos: Pos { r: 2, c: 4 }, digit: 7 });
    }

    #[test]
    fn parse_rejects_wrong_arity_and_junk() {
        assert_eq!(parse_move("1 2").unwrap_err(), MoveError::Malformed);
        assert_eq!(parse_move("1 2 3 4").unwrap_err(), MoveError::Malformed);
        assert_eq!(parse_move("a b c").unwrap_err(), MoveError::Malformed);
        assert_eq!(parse_move("").unwrap_err(), MoveError::Malformed);
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(parse_move("0 5 5").unwrap_err(), MoveError::OutOfRange);
        assert_eq!(parse_move("5 10 5").unwrap_err(), MoveError::OutOfRange);
        // negative numbers fail u8 parsing before the range check
        assert_eq!(parse_move("5 -1 5").unwrap_err(), MoveError::Malformed);
    }

    #[test]
    fn first_placement_passes_turn() {
        let mut game = Game::new();
        assert_eq!(game.current_player(), Player::One);

        let turn = game.submit_line("1 1 5");
        assert_eq!(
            turn,
            Turn::Placed {
                player: Player::One,
                mov: Move { pos: Pos { r: 0, c: 0 }, digit: 5 },
            }
        );
        assert_eq!(game.grid().get(Pos { r: 0, c: 0 }), 5);
        assert_eq!(game.current_player(), Player::Two);
    }

    #[test]
    fn rejection_leaves_everything_alone() {
        let mut game = Game::new();
        game.submit_line("1 1 5");
        let snapshot = game.grid().to_compact();

        // row conflict: 5 already in row 1
        let first = game.submit_line("1 4 5");
        assert_eq!(first, Turn::Rejected(MoveError::Conflict { digit: 5 }));
        assert_eq!(game.current_player(), Player::Two);
        assert_eq!(game.grid().to_compact(), snapshot);

        // same bad line again: same answer, same grid bytes
        let second = game.submit_line("1 4 5");
        assert_eq!(second, first);
        assert_eq!(game.grid().to_compact(), snapshot);
    }

    #[test]
    fn occupied_cell_rejected_with_coordinates() {
        let mut game = Game::new();
        game.submit_line("2 3 4");
        let turn = game.submit_line("2 3 9");
        assert_eq!(turn, Turn::Rejected(MoveError::Occupied { row: 2, col: 3 }));
        assert_eq!(game.current_player(), Player::Two);
    }

    #[test]
    fn no_shared_unit_means_no_conflict() {
        let mut game = Game::new();
        game.submit_line("1 1 5");
        // (4,4) shares no row, column, or box with (0,0)
        let turn = game.submit_line("5 5 5");
        assert!(matches!(turn, Turn::Placed { player: Player::Two, .. }));
    }

    #[test]
    fn malformed_input_keeps_player() {
        let mut game = Game::new();
        for line in ["", "1 2", "x y z", "1 2 3 4", "0 0 0"] {
            assert!(matches!(game.submit_line(line), Turn::Rejected(_)));
            assert_eq!(game.current_player(), Player::One);
        }
    }

    #[test]
    fn quit_sentinel_any_case() {
        let mut game = Game::new();
        assert_eq!(game.submit_line("q"), Turn::Quit);
        assert_eq!(game.submit_line("Q"), Turn::Quit);
        assert_eq!(game.submit_line("  q  "), Turn::Quit);
    }

    #[test]
    fn final_placement_completes_without_switching() {
        let solved =
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
        let mut nearly = String::from(solved);
        nearly.replace_range(0..1, "."); // open up (1,1), which held 5
        let mut game = Game::from_grid(Grid::from_compact(&nearly).unwrap());

        let turn = game.submit_line("1 1 5");
        assert_eq!(turn, Turn::Completed { winner: Player::One });
        assert_eq!(game.grid().to_compact(), solved);
        // indicator stays with the completer
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn alternation_over_a_run_of_moves() {
        let mut game = Game::new();
        let lines = ["1 1 1", "1 2 2", "1 3 3", "2 1 4"];
        let expected = [Player::One, Player::Two, Player::One, Player::Two];
        for (line, who) in lines.iter().zip(expected) {
            match game.submit_line(line) {
                Turn::Placed { player, .. } => assert_eq!(player, who),
                other => panic!("expected placement, got {other:?}"),
            }
        }
        assert_eq!(game.current_player(), Player::One);
    }
}
