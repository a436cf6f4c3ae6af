pub mod game;
pub mod grid;
pub mod render;
pub mod rules;

pub use game::{Game, Move, MoveError, Player, Turn};
pub use grid::{Grid, Pos};
