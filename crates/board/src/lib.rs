//! Board module - reference collision predicate
//!
//! The rotation core never stores a playfield; it asks a [`CollisionPredicate`].
//! This crate supplies the board side of that contract for hosts and tests:
//! a 10x20 grid where a placement is legal when every cell is in bounds and
//! empty.
//!
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! # Fixtures
//!
//! [`Board::from_ascii`] reads rows top to bottom; `.` is empty, any piece
//! letter (`I O T S Z J L`) or `#` is filled. Missing rows below the last one
//! given are empty.
//!
//! ```
//! use tetro_kick_board::Board;
//!
//! let board = Board::from_ascii("
//!     #.........
//!     #.........
//! ").unwrap();
//! assert!(board.is_occupied(0, 1));
//! assert!(board.is_valid(1, 1));
//! ```

use derive_more::{Display, Error};

use tetro_kick_core::{CollisionPredicate, Piece};
use tetro_kick_types::{Cell, PieceCells, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display("fixture has {rows} rows, board holds {BOARD_HEIGHT}")]
    TooManyRows { rows: usize },

    #[display("fixture row {row} has {len} cells, expected {BOARD_WIDTH}")]
    RowWidth { row: usize, len: usize },

    #[display("fixture row {row} has unknown cell {cell:?}")]
    UnknownCell { row: usize, cell: char },

    #[display("cannot lock {} piece: cell ({}, {}) is blocked", kind.as_str(), at.0, at.1)]
    LockBlocked { kind: PieceKind, at: (i8, i8) },
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Parse a fixture (see the module docs)
    pub fn from_ascii(text: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() > BOARD_HEIGHT as usize {
            return Err(BoardError::TooManyRows { rows: rows.len() });
        }

        let mut board = Self::new();
        for (y, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != BOARD_WIDTH as usize {
                return Err(BoardError::RowWidth { row: y, len });
            }
            for (x, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    '#' => Some(PieceKind::I),
                    other => match PieceKind::from_str(&other.to_string()) {
                        Some(kind) => Some(kind),
                        None => return Err(BoardError::UnknownCell { row: y, cell: other }),
                    },
                };
                board.cells[y * BOARD_WIDTH as usize + x] = cell;
            }
        }
        Ok(board)
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Write a piece's current cells into the board
    ///
    /// Nothing is written unless every cell is free. The piece is consumed:
    /// once locked it has left play.
    pub fn lock_piece(&mut self, piece: Piece) -> Result<PieceCells, BoardError> {
        let cells = piece.cells();
        if let Some(&at) = cells.iter().find(|&&(x, y)| !self.is_valid(x, y)) {
            return Err(BoardError::LockBlocked {
                kind: piece.kind(),
                at,
            });
        }
        for &(x, y) in &cells {
            self.set(x, y, Some(piece.kind()));
        }
        Ok(cells)
    }

    /// Render back to the fixture format, one line per row
    pub fn to_ascii(&self) -> String {
        let width = BOARD_WIDTH as usize;
        let mut out = String::with_capacity(BOARD_SIZE + BOARD_HEIGHT as usize);
        for row in self.cells.chunks(width) {
            for cell in row {
                out.push(match cell {
                    None => '.',
                    Some(kind) => kind.as_str().to_ascii_uppercase().chars().next().unwrap_or('#'),
                });
            }
            out.push('\n');
        }
        out
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionPredicate for Board {
    fn is_legal_placement(&self, cells: &PieceCells) -> bool {
        cells.iter().all(|&(x, y)| self.is_valid(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_from_ascii_letters_and_walls() {
        let board = Board::from_ascii(
            "
            T........#
            ..........
            ",
        )
        .unwrap();
        assert_eq!(board.get(0, 0), Some(Some(PieceKind::T)));
        assert_eq!(board.get(9, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(0, 1), Some(None));
        assert_eq!(board.get(0, 19), Some(None));
    }

    #[test]
    fn test_from_ascii_rejects_bad_rows() {
        assert_eq!(
            Board::from_ascii("...."),
            Err(BoardError::RowWidth { row: 0, len: 4 })
        );
        assert_eq!(
            Board::from_ascii("....x....."),
            Err(BoardError::UnknownCell { row: 0, cell: 'x' })
        );
        let tall = "..........\n".repeat(21);
        assert_eq!(
            Board::from_ascii(&tall),
            Err(BoardError::TooManyRows { rows: 21 })
        );
    }

    #[test]
    fn test_ascii_roundtrip() {
        let text = "..........\n".repeat(19) + "IOTSZJL..#\n";
        let board = Board::from_ascii(&text).unwrap();
        assert_eq!(board.to_ascii(), text.replace('#', "I"));
    }

    #[test]
    fn test_predicate_requires_bounds_and_empty() {
        let mut board = Board::new();
        board.set(4, 4, Some(PieceKind::O));

        assert!(board.is_legal_placement(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
        assert!(!board.is_legal_placement(&[(3, 4), (4, 4), (5, 4), (6, 4)]));
        assert!(!board.is_legal_placement(&[(-1, 0), (0, 0), (1, 0), (2, 0)]));
        assert!(!board.is_legal_placement(&[(9, 19), (9, 20), (8, 19), (8, 18)]));
    }
}
