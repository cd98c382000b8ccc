//! An opponent that picks its moves by game tree search

use crate::{board::*, eval::evaluate, COLS, MAX_DEPTH};

/// Returns the column with the highest score
///
/// Columns without a score are skipped. On ties the leftmost column wins,
/// since only a strictly greater score replaces the current best.
pub fn best_column(scores: &[Option<i32>; COLS]) -> Option<usize> {
    let mut best_score = i32::MIN;
    let mut best_move = None;
    for (column, score) in scores.iter().enumerate() {
        if let Some(score) = *score {
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(column);
            }
        }
    }
    best_move
}

/// A minimax agent playing the side of player 2
///
/// # Notes
/// Every candidate move is searched a fixed number of plies deep with
/// alternating maximizing (player 2) and minimizing (player 1) nodes. A node
/// stops expanding once the depth runs out, a line of four exists or the board
/// is full, and is then scored by [`evaluate`].
///
/// The search works on a private copy of the board, dropping and lifting tiles
/// in place, so the caller's board only ever sees the final chosen move.
#[derive(Clone, Debug)]
pub struct Engine {
    depth: usize,
    pruning: bool,
    scores: [Option<i32>; COLS],

    /// The number of nodes searched by this `Engine` so far (for diagnostics only)
    pub node_count: usize,
}

impl Engine {
    /// Creates an `Engine` searching [`MAX_DEPTH`] plies below each candidate move
    pub fn new() -> Self {
        Self::with_depth(MAX_DEPTH)
    }

    /// Creates an `Engine` searching `depth` plies below each candidate move
    pub fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            pruning: true,
            scores: [None; COLS],
            node_count: 0,
        }
    }

    /// Turns off alpha-beta pruning, leaving a plain minimax search
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Root scores of the last search, `None` for full columns
    pub fn scores(&self) -> &[Option<i32>; COLS] {
        &self.scores
    }

    /// Performs game tree search
    ///
    /// Returns the score of the position, positive values favouring player 2
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.node_count += 1;

        if depth == 0 || board.has_win() || board.is_full() {
            return evaluate(board);
        }

        let player = if maximizing {
            Player::Player2
        } else {
            Player::Player1
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for column in 0..COLS {
            let row = match board.drop_piece(column, player) {
                Some(row) => row,
                None => continue,
            };
            let score = self.minimax(board, depth - 1, alpha, beta, !maximizing);
            board.lift_piece(row, column);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            // the other side already has a better option elsewhere
            if self.pruning && beta <= alpha {
                break;
            }
        }

        best
    }

    /// Scores every playable column as a move for player 2
    ///
    /// Each candidate is searched with its own full window, so the scores are
    /// exact minimax values whether or not pruning is enabled.
    pub fn column_scores(&mut self, board: &Board) -> [Option<i32>; COLS] {
        self.node_count += 1;

        let mut working = *board;
        let mut scores = [None; COLS];
        for (column, score) in scores.iter_mut().enumerate() {
            if let Some(row) = working.drop_piece(column, Player::Player2) {
                *score = Some(self.minimax(&mut working, self.depth, i32::MIN, i32::MAX, false));
                working.lift_piece(row, column);
            }
        }

        self.scores = scores;
        scores
    }

    /// Searches for the best column and plays it on `board`
    ///
    /// Returns the chosen column, or `None` if no column has room left,
    /// in which case the board is not modified.
    pub fn choose_move(&mut self, board: &mut Board) -> Option<usize> {
        let scores = self.column_scores(board);
        let column = best_column(&scores)?;
        board.place(column);
        Some(column)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
