//! Shapes module - per-orientation cell offsets
//!
//! A [`ShapeTable`] holds exactly four orientation entries of exactly four
//! cells each; the array types make any other arity unrepresentable.
//! Reference: https://tetris.wiki/SRS

use crate::error::TableError;
use crate::types::{CellOffset, Orientation, PieceKind};

/// Shape of a piece in one orientation - 4 cell offsets from the pivot
pub type PieceShape = [CellOffset; 4];

/// The four orientations of one piece type, indexed by [`Orientation::index`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeTable {
    orientations: [PieceShape; 4],
}

impl ShapeTable {
    pub fn new(orientations: [PieceShape; 4]) -> Self {
        Self { orientations }
    }

    /// Guideline shape table for a piece kind
    pub fn standard(kind: PieceKind) -> Self {
        Self::new(Orientation::ALL.map(|o| standard_shape(kind, o)))
    }

    /// Offsets for one orientation
    #[inline]
    pub fn offsets(&self, orientation: Orientation) -> &PieceShape {
        &self.orientations[orientation.index()]
    }

    pub fn orientations(&self) -> &[PieceShape; 4] {
        &self.orientations
    }

    /// Reject orientations that list the same cell twice
    pub fn validate(&self, kind: PieceKind) -> Result<(), TableError> {
        for orientation in Orientation::ALL {
            let shape = self.offsets(orientation);
            for i in 0..shape.len() {
                if shape[i + 1..].contains(&shape[i]) {
                    return Err(TableError::DuplicateCell { kind, orientation });
                }
            }
        }
        Ok(())
    }
}

/// Get the shape (cell offsets) for a piece kind and orientation
pub fn standard_shape(kind: PieceKind, orientation: Orientation) -> PieceShape {
    match kind {
        PieceKind::I => i_shape(orientation),
        PieceKind::O => o_shape(orientation),
        PieceKind::T => t_shape(orientation),
        PieceKind::S => s_shape(orientation),
        PieceKind::Z => z_shape(orientation),
        PieceKind::J => j_shape(orientation),
        PieceKind::L => l_shape(orientation),
    }
}

fn i_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        // N: horizontal, on row 1
        Orientation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        // E: vertical, column 2
        Orientation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        // S: horizontal, on row 2
        Orientation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        // W: vertical, column 1
        Orientation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

/// O has no pivot cell; every orientation is the same square
fn o_shape(_orientation: Orientation) -> PieceShape {
    [(1, 0), (2, 0), (1, 1), (2, 1)]
}

fn t_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Orientation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Orientation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Orientation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn s_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Orientation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Orientation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Orientation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn z_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Orientation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Orientation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Orientation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn j_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Orientation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Orientation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Orientation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn l_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Orientation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Orientation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Orientation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_are_valid() {
        for kind in PieceKind::ALL {
            assert!(ShapeTable::standard(kind).validate(kind).is_ok(), "{:?}", kind);
        }
    }

    #[test]
    fn duplicate_cell_is_rejected() {
        let mut rows = ShapeTable::standard(PieceKind::T).orientations;
        rows[2][3] = rows[2][0];
        let err = ShapeTable::new(rows).validate(PieceKind::T).unwrap_err();
        assert!(matches!(
            err,
            TableError::DuplicateCell {
                kind: PieceKind::T,
                orientation: Orientation::South
            }
        ));
    }

    #[test]
    fn offsets_follow_orientation_index() {
        let table = ShapeTable::standard(PieceKind::I);
        assert_eq!(table.offsets(Orientation::North), &[(0, 1), (1, 1), (2, 1), (3, 1)]);
        assert_eq!(table.offsets(Orientation::West), &table.orientations()[3]);
    }
}
