//! Static evaluation of positions the search does not look beyond
//!
//! Every window of four tiles is scored for both sides by how close it is to
//! becoming a line. Positive scores favour player 2 (the AI), negative scores
//! favour player 1.

use crate::board::{Board, Cell, Player};
use crate::WIN_LENGTH;

/// Score of a window filled by a single player
pub const FOUR_SCORE: i32 = 100;
/// Score of a window with three own tiles and one empty tile
pub const THREE_SCORE: i32 = 5;
/// Score of a window with two own tiles and two empty tiles
pub const TWO_SCORE: i32 = 2;

/// Scores one window for `player`
///
/// Any tile of the other player in the window makes it worthless.
pub fn window_score(window: &[Cell; WIN_LENGTH], player: Player) -> i32 {
    let own = Cell::from(player);
    let count = window.iter().filter(|&&c| c == own).count();
    let empty = window.iter().filter(|c| c.is_empty()).count();

    match (count, empty) {
        (4, 0) => FOUR_SCORE,
        (3, 1) => THREE_SCORE,
        (2, 2) => TWO_SCORE,
        _ => 0,
    }
}

/// Scores a position as player 2's pattern total minus player 1's
pub fn evaluate(board: &Board) -> i32 {
    board
        .windows()
        .map(|window| {
            window_score(&window, Player::Player2) - window_score(&window, Player::Player1)
        })
        .sum()
}
