//! A Connect 4 engine with a depth-limited minimax opponent
//!
//! The opponent (always player 2) looks a fixed number of moves ahead using
//! minimax with alpha-beta pruning, scoring the positions it reaches with a
//! pattern count over every line of four cells.
//!
//! # Basic Usage
//!
//! ```
//! use connect_four::{board::{Board, Player}, search::Engine, COLS};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::from_moves("4")?;
//! let mut engine = Engine::new();
//! let column = engine.choose_move(&mut board).unwrap();
//!
//! assert!(column < COLS);
//! assert!(board.turn() == Player::Player1);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod eval;

pub mod search;


use board::Board;

/// The number of rows on the game board
pub const ROWS: usize = 6;

/// The number of columns on the game board
pub const COLS: usize = 7;

/// The number of aligned tiles needed to win
pub const WIN_LENGTH: usize = 4;

/// The default number of plies searched below each candidate move
pub const MAX_DEPTH: usize = 6;

// every direction must fit at least one winning line
const_assert!(ROWS >= WIN_LENGTH);
const_assert!(COLS >= WIN_LENGTH);

/// Starts a new game: an empty board with player 1 to move
pub fn new_game() -> Board {
    Board::new()
}

/// Picks and plays the opponent's move with a default [`search::Engine`]
///
/// Returns `None` without touching the board if no column has room left.
pub fn choose_move(board: &mut Board) -> Option<usize> {
    search::Engine::new().choose_move(board)
}
