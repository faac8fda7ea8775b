//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary used by every other crate in the workspace:
//! piece kinds, the four orientations, rotation directions, and the eight
//! orientation transitions that key the wall-kick tables.
//!
//! # Coordinates
//!
//! Cell offsets and board positions are `(column, row)` pairs of `i8`.
//! Columns grow to the right and rows grow **downward**, matching the board.
//!
//! # Transitions
//!
//! | Index | Label | From | To | Direction |
//! |-------|-------|------|----|-----------|
//! | 0 | `0->1` | North | East | clockwise |
//! | 1 | `1->0` | East | North | counter-clockwise |
//! | 2 | `1->2` | East | South | clockwise |
//! | 3 | `2->1` | South | East | counter-clockwise |
//! | 4 | `2->3` | South | West | clockwise |
//! | 5 | `3->2` | West | South | counter-clockwise |
//! | 6 | `3->0` | West | North | clockwise |
//! | 7 | `0->3` | North | West | counter-clockwise |
//!
//! # Examples
//!
//! ```
//! use tetro_kick_types::{Direction, Orientation, PieceKind, Transition};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let next = Orientation::North.rotated(Direction::CounterClockwise);
//! assert_eq!(next, Orientation::West);
//!
//! let t = Transition::from_parts(Orientation::North, Direction::Clockwise);
//! assert_eq!(t.label(), "0->1");
//! assert_eq!(t.to_orientation(), Orientation::East);
//! ```

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default spawn anchor for new pieces (x, y)
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Offset of a single cell relative to the piece pivot
pub type CellOffset = (i8, i8);

/// Absolute board position of a single cell
pub type CellPos = (i8, i8);

/// Translation tried while resolving a rotation, in board cells
pub type KickOffset = (i8, i8);

/// The four cells of a piece in one orientation
pub type PieceCells = [CellPos; 4];

/// The seven tetromino piece kinds
///
/// - **I**: horizontal bar
/// - **O**: 2x2 square, the pivotless piece
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in guideline order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetro_kick_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// A raw orientation index outside `0..=3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("orientation index {index} is outside 0..=3")]
pub struct InvalidOrientationIndex {
    pub index: u8,
}

/// Rotation direction requested by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "cw")]
    Clockwise,
    #[serde(rename = "ccw")]
    CounterClockwise,
}

impl Direction {
    /// Parse from `cw` / `ccw` (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cw" | "clockwise" => Some(Direction::Clockwise),
            "ccw" | "counterclockwise" | "counter-clockwise" => Some(Direction::CounterClockwise),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Clockwise => "cw",
            Direction::CounterClockwise => "ccw",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Orientation states following the Super Rotation System (SRS)
///
/// - **North**: spawn orientation, index 0
/// - **East**: one clockwise turn, index 1
/// - **South**: two turns, index 2
/// - **West**: one counter-clockwise turn, index 3
///
/// There is no way to hold an index outside `0..=3`: raw integers only enter
/// through [`Orientation::from_index`], which rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Orientation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Index into a shape table (0..=3)
    pub fn index(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// Checked conversion from a raw index
    ///
    /// ```
    /// use tetro_kick_types::Orientation;
    ///
    /// assert_eq!(Orientation::from_index(2), Ok(Orientation::South));
    /// assert!(Orientation::from_index(4).is_err());
    /// ```
    pub fn from_index(index: u8) -> Result<Self, InvalidOrientationIndex> {
        match index {
            0 => Ok(Orientation::North),
            1 => Ok(Orientation::East),
            2 => Ok(Orientation::South),
            3 => Ok(Orientation::West),
            _ => Err(InvalidOrientationIndex { index }),
        }
    }

    /// Rotate clockwise (90°)
    pub fn rotate_cw(self) -> Self {
        self.stepped(1)
    }

    /// Rotate counter-clockwise (-90°), wrapping North to West
    pub fn rotate_ccw(self) -> Self {
        self.stepped(-1)
    }

    pub fn rotated(self, direction: Direction) -> Self {
        match direction {
            Direction::Clockwise => self.rotate_cw(),
            Direction::CounterClockwise => self.rotate_ccw(),
        }
    }

    /// Number of clockwise quarter turns from `self` to `target` (0..=3)
    pub fn cw_distance(self, target: Orientation) -> u8 {
        (target.index() as i8 - self.index() as i8).rem_euclid(4) as u8
    }

    fn stepped(self, step: i8) -> Self {
        match (self.index() as i8 + step).rem_euclid(4) {
            0 => Orientation::North,
            1 => Orientation::East,
            2 => Orientation::South,
            _ => Orientation::West,
        }
    }
}

impl From<Orientation> for u8 {
    fn from(o: Orientation) -> u8 {
        o.index() as u8
    }
}

impl TryFrom<u8> for Orientation {
    type Error = InvalidOrientationIndex;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Orientation::from_index(index)
    }
}

/// A transition label that names no orientation edge
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown transition label {label:?}")]
pub struct UnknownTransition {
    pub label: String,
}

/// One of the eight orientation edges a rotation can take
///
/// Declaration order is the table order used by wall-kick data, so
/// [`Transition::index`] can address an 8-slot array directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Transition {
    #[display("0->1")]
    NorthToEast,
    #[display("1->0")]
    EastToNorth,
    #[display("1->2")]
    EastToSouth,
    #[display("2->1")]
    SouthToEast,
    #[display("2->3")]
    SouthToWest,
    #[display("3->2")]
    WestToSouth,
    #[display("3->0")]
    WestToNorth,
    #[display("0->3")]
    NorthToWest,
}

/// Lookup keyed by `[from.index()][direction]` (0 = cw, 1 = ccw)
const TRANSITIONS: [[Transition; 2]; 4] = [
    [Transition::NorthToEast, Transition::NorthToWest],
    [Transition::EastToSouth, Transition::EastToNorth],
    [Transition::SouthToWest, Transition::SouthToEast],
    [Transition::WestToNorth, Transition::WestToSouth],
];

impl Transition {
    pub const ALL: [Transition; 8] = [
        Transition::NorthToEast,
        Transition::EastToNorth,
        Transition::EastToSouth,
        Transition::SouthToEast,
        Transition::SouthToWest,
        Transition::WestToSouth,
        Transition::WestToNorth,
        Transition::NorthToWest,
    ];

    /// The edge taken when rotating from `from` in `direction`
    ///
    /// This is a pure lookup; it never depends on rotation history.
    pub fn from_parts(from: Orientation, direction: Direction) -> Self {
        let column = match direction {
            Direction::Clockwise => 0,
            Direction::CounterClockwise => 1,
        };
        TRANSITIONS[from.index()][column]
    }

    /// Slot in an 8-entry kick table
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_orientation(self) -> Orientation {
        match self {
            Transition::NorthToEast | Transition::NorthToWest => Orientation::North,
            Transition::EastToNorth | Transition::EastToSouth => Orientation::East,
            Transition::SouthToEast | Transition::SouthToWest => Orientation::South,
            Transition::WestToSouth | Transition::WestToNorth => Orientation::West,
        }
    }

    pub fn to_orientation(self) -> Orientation {
        self.from_orientation().rotated(self.direction())
    }

    pub fn direction(self) -> Direction {
        match self {
            Transition::NorthToEast
            | Transition::EastToSouth
            | Transition::SouthToWest
            | Transition::WestToNorth => Direction::Clockwise,
            _ => Direction::CounterClockwise,
        }
    }

    /// The edge that undoes this one
    pub fn inverse(self) -> Self {
        Transition::from_parts(self.to_orientation(), self.direction().reversed())
    }

    /// `"from->to"` label used in table files and logs
    pub fn label(self) -> &'static str {
        match self {
            Transition::NorthToEast => "0->1",
            Transition::EastToNorth => "1->0",
            Transition::EastToSouth => "1->2",
            Transition::SouthToEast => "2->1",
            Transition::SouthToWest => "2->3",
            Transition::WestToSouth => "3->2",
            Transition::WestToNorth => "3->0",
            Transition::NorthToWest => "0->3",
        }
    }

    /// Parse a `"from->to"` label
    pub fn from_label(label: &str) -> Option<Self> {
        Transition::ALL.into_iter().find(|t| t.label() == label.trim())
    }
}

impl From<Transition> for &'static str {
    fn from(t: Transition) -> &'static str {
        t.label()
    }
}

impl TryFrom<String> for Transition {
    type Error = UnknownTransition;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Transition::from_label(&label).ok_or(UnknownTransition { label })
    }
}

/// A cell on the board
///
/// - `None`: empty cell
/// - `Some(PieceKind)`: cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
