use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect_four::{
    board::{Board, Cell, Player},
    search::Engine,
    COLS, ROWS,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// A single game between the human (player 1) and the AI (player 2)
#[derive(Clone)]
pub struct Game {
    board: Board,
    pub state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: connect_four::new_game(),
            state: GameState::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays a human move given as a 1-indexed column
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        if column_one_indexed < 1 || column_one_indexed > COLS {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                COLS
            ));
        }
        if !self.board.place(column_one_indexed - 1) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        self.update_state();
        Ok(self.state)
    }

    /// Lets `engine` pick and play a move, returning the 0-indexed column
    pub fn play_ai(&mut self, engine: &mut Engine) -> Result<usize> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        let column = engine
            .choose_move(&mut self.board)
            .ok_or_else(|| anyhow!("No column has room left"))?;

        self.update_state();
        Ok(column)
    }

    fn update_state(&mut self) {
        self.state = match self.board.winner() {
            Some(Player::Player1) => GameState::PlayerOneWin,
            Some(Player::Player2) => GameState::PlayerTwoWin,
            None if self.board.is_full() => GameState::Draw,
            None => GameState::Playing,
        };
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=COLS).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..ROWS {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        // the cursor sits just below the rows reserved for the board
        let (origin_x, bottom_y) = crossterm::cursor::position()?;
        let top_y = bottom_y.saturating_sub(ROWS as u16);

        for row in 0..ROWS {
            for column in 0..COLS {
                stdout
                    .queue(MoveTo(origin_x + column as u16, top_y + row as u16))?
                    .queue(PrintStyledContent(
                        style("O")
                            .attribute(Attribute::Bold)
                            .on(Color::DarkBlue)
                            .with(match self.board.cell(row, column) {
                                Cell::Player1 => Color::Red,
                                Cell::Player2 => Color::Yellow,
                                Cell::Empty => Color::DarkBlue,
                            }),
                    ))?;
            }
        }
        stdout
            .queue(MoveTo(origin_x, bottom_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}
