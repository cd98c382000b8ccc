//! The game board: tiles, turn order and win detection

use anyhow::{anyhow, Result};

use std::fmt;

use crate::{COLS, ROWS, WIN_LENGTH};

/// One of the two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// The opposing player
    pub fn other(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }
}

/// The content of a single tile
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player owning this tile, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Player1 => 'X',
            Cell::Player2 => 'O',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::Player1),
            'O' => Some(Cell::Player2),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Player1 => Cell::Player1,
            Player::Player2 => Cell::Player2,
        }
    }
}

/// The four orientations a line of tiles can take
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// top-left to bottom-right
    DiagonalDown,
    /// top-right to bottom-left
    DiagonalUp,
}

static DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::DiagonalDown,
    Direction::DiagonalUp,
];

impl Direction {
    /// (row, column) offset between neighbouring tiles of a line, rows grow downwards
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }

    /// All tiles a full window in this direction can start from
    pub fn origins(self) -> impl Iterator<Item = (usize, usize)> {
        let reach = WIN_LENGTH - 1;
        let (rows, columns) = match self {
            Direction::Horizontal => (0..ROWS, 0..COLS - reach),
            Direction::Vertical => (0..ROWS - reach, 0..COLS),
            Direction::DiagonalDown => (0..ROWS - reach, 0..COLS - reach),
            Direction::DiagonalUp => (0..ROWS - reach, reach..COLS),
        };
        rows.flat_map(move |row| columns.clone().map(move |column| (row, column)))
    }
}

/// A Connect 4 board
///
/// Row 0 is the top of the board, so tiles fall towards row `ROWS - 1`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    turn: Player,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
            turn: Player::Player1,
        }
    }

    /// Replays a game given as a string of 1-indexed column digits
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=COLS) => {
                    // abort if the position is already won
                    if board.has_win() {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    if !board.place(column - 1) {
                        return Err(anyhow!("Invalid move, column {} full", column));
                    }
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Parses a board drawn as `ROWS` lines of `COLS` tiles, top row first
    ///
    /// `.` is an empty tile, `X` belongs to player 1 and `O` to player 2.
    /// The player to move is derived from the number of tiles each side has.
    pub fn from_grid(grid: &str) -> Result<Self> {
        let lines: Vec<&str> = grid
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != ROWS {
            return Err(anyhow!("expected {} rows, found {}", ROWS, lines.len()));
        }

        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != COLS {
                return Err(anyhow!("row {} must have {} tiles: '{}'", row + 1, COLS, line));
            }
            for (column, symbol) in line.chars().enumerate() {
                cells[row][column] = Cell::from_symbol(symbol)
                    .ok_or_else(|| anyhow!("could not parse '{}' as a tile", symbol))?;
            }
        }

        // tiles must rest on the bottom or on another tile
        for column in 0..COLS {
            let mut settled = false;
            for row in 0..ROWS {
                if !cells[row][column].is_empty() {
                    settled = true;
                } else if settled {
                    return Err(anyhow!("floating tile in column {}", column + 1));
                }
            }
        }

        let count = |cell: Cell| cells.iter().flatten().filter(|&&c| c == cell).count();
        let (player_one, player_two) = (count(Cell::Player1), count(Cell::Player2));
        let turn = if player_one == player_two {
            Player::Player1
        } else if player_one == player_two + 1 {
            Player::Player2
        } else {
            return Err(anyhow!(
                "unreachable position: {} tiles for player 1, {} for player 2",
                player_one,
                player_two
            ));
        };

        Ok(Self { cells, turn })
    }

    /// The player whose move is next
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    pub fn num_moves(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// Whether a tile can still be dropped into `column`
    pub fn playable(&self, column: usize) -> bool {
        column < COLS && self.cells[0][column].is_empty()
    }

    /// Returns the row a tile dropped into `column` would land on,
    /// or `None` if the column is full or out of range
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        if column >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][column].is_empty())
    }

    /// Drops a tile for the player to move into `column` and passes the turn
    ///
    /// Returns `false` and leaves the board untouched if the move is illegal.
    pub fn place(&mut self, column: usize) -> bool {
        match self.drop_piece(column, self.turn) {
            Some(_) => {
                self.turn = self.turn.other();
                true
            }
            None => false,
        }
    }

    /// Drops a tile without passing the turn, returning the row it landed on
    pub(crate) fn drop_piece(&mut self, column: usize, player: Player) -> Option<usize> {
        let row = self.lowest_empty_row(column)?;
        self.cells[row][column] = player.into();
        Some(row)
    }

    /// Reverts a [`Board::drop_piece`]
    pub(crate) fn lift_piece(&mut self, row: usize, column: usize) {
        self.cells[row][column] = Cell::Empty;
    }

    /// Whether every column is full
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|c| !c.is_empty())
    }

    /// Whether any player has four tiles in a line
    pub fn has_win(&self) -> bool {
        self.winner().is_some()
    }

    /// The owner of the first complete line found, if any
    pub fn winner(&self) -> Option<Player> {
        self.windows()
            .find(|window| !window[0].is_empty() && window.iter().all(|&c| c == window[0]))
            .and_then(|window| window[0].player())
    }

    /// The tiles of the window starting at (`row`, `column`)
    pub fn window(&self, row: usize, column: usize, direction: Direction) -> [Cell; WIN_LENGTH] {
        let (row_step, column_step) = direction.step();
        let mut window = [Cell::Empty; WIN_LENGTH];
        for (i, cell) in window.iter_mut().enumerate() {
            let r = row as isize + row_step * i as isize;
            let c = column as isize + column_step * i as isize;
            *cell = self.cells[r as usize][c as usize];
        }
        window
    }

    /// Every window of `WIN_LENGTH` tiles on the board, in all four directions
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WIN_LENGTH]> + '_ {
        DIRECTIONS.iter().flat_map(move |&direction| {
            direction
                .origins()
                .map(move |(row, column)| self.window(row, column, direction))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
