//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::error::InvalidMoveReason;

/// Side length of the board
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A `(row, col)` coordinate identifying the cell to fill.
///
/// Ordering is row-major, which is also the order legal moves are generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Build a move from a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Move::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// Row-major cell index, or `None` when the coordinate is off the board
    pub fn index(self) -> Option<usize> {
        self.in_bounds().then(|| self.row * BOARD_SIZE + self.col)
    }

    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a game as seen from a single board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    XWins,
    OWins,
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::Ongoing => "in progress",
            Outcome::XWins => "X wins",
            Outcome::OWins => "O wins",
            Outcome::Draw => "draw",
        };
        f.write_str(text)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// A 3x3 grid stored row-major.
///
/// `Board` is `Copy` and every move produces a fresh value, so a board handed
/// to a search is never changed behind the caller's back. The player to move
/// is not stored; it is derived from the piece counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create the empty starting board (X to move)
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from explicit rows without validating it.
    ///
    /// Queries on a board that could not arise from play (for example O ahead
    /// of X) still return an answer, but it is not meaningful.
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            cells[r * BOARD_SIZE..(r + 1) * BOARD_SIZE].copy_from_slice(row);
        }
        Board { cells }
    }

    /// Parse a board from its text form.
    ///
    /// The string holds 9 cells in row-major order using `.`, `X` and `O`;
    /// whitespace and `/` row separators are ignored, so `"XO./.X./..O"` and
    /// `"XO. .X. ..O"` are both accepted.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board does not have exactly 9 cells
    /// - Any character is not a valid cell representation
    /// - The piece counts could not arise from legal play
    /// - The winning lines could not arise from legal play (a win followed by
    ///   another move, or two separate completed lines)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        if !board.has_valid_piece_counts() {
            let count = board.count_pieces();
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }
        if !board.is_valid() {
            return Err(crate::Error::UnreachableBoard {
                context: s.to_string(),
            });
        }
        Ok(board)
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get the cell at a coordinate, or `None` when it is off the board
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.index().map(|i| self.cells[i])
    }

    pub fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Player whose turn it is: X when the counts are equal, otherwise O
    pub fn current_player(&self) -> Player {
        let count = self.count_pieces();
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// All empty cells in row-major order, regardless of whether the game is over
    pub fn empty_positions(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .filter_map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    fn check_move(&self, mv: Move) -> Result<usize, InvalidMoveReason> {
        let index = mv.index().ok_or(InvalidMoveReason::OutOfBounds)?;
        if self.is_terminal() {
            return Err(InvalidMoveReason::GameOver);
        }
        if self.cells[index] != Cell::Empty {
            return Err(InvalidMoveReason::Occupied);
        }
        Ok(index)
    }

    /// Place the current player's piece and return the resulting board
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`](crate::Error::InvalidMove) when the
    /// coordinate is off the board, the cell is taken, or the game is over.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, mv: Move) -> Result<Board, crate::Error> {
        let index = self
            .check_move(mv)
            .map_err(|reason| crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
                reason,
            })?;

        let mut next = *self;
        next.cells[index] = self.current_player().to_cell();
        Ok(next)
    }

    /// Check if a player has completed a line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Owner of the first complete line, scanning rows, columns, then diagonals
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::first_complete_line(&self.cells).and_then(|(_, cell)| cell.to_player())
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Score from X's perspective: +1 X won, -1 O won, 0 otherwise
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(Player::X) => Outcome::XWins,
            Some(Player::O) => Outcome::OWins,
            None if self.is_full() => Outcome::Draw,
            None => Outcome::Ongoing,
        }
    }

    /// Compact single-line form, e.g. `XO.......`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % BOARD_SIZE == 0 && i + 1 < CELL_COUNT {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
