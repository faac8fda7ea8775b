//! Table construction errors
//!
//! Everything here is a data defect in the shape/kick tables handed to the
//! core. They are raised when a piece type is registered or a piece is built,
//! never in the middle of a rotation.

use derive_more::{Display, Error, From};

use crate::kicks::MAX_KICKS;
use crate::types::{CellPos, Orientation, PieceKind, Transition};

#[derive(Debug, Display, Error, From)]
pub enum TableError {
    #[display("family {family:?} has no kick data for transition {transition}")]
    MissingKickData {
        family: String,
        transition: Transition,
    },

    #[display("piece kind {} is not registered", kind.as_str())]
    MissingShape { kind: PieceKind },

    #[display(
        "family {family:?} lists {len} kick candidates for {transition} (max {MAX_KICKS})"
    )]
    KickListTooLong {
        family: String,
        transition: Transition,
        len: usize,
    },

    #[display("family {family:?}: kick list for {transition} must start with (0, 0)")]
    ZeroKickNotFirst {
        family: String,
        transition: Transition,
    },

    #[display("family {family:?}: kick list for {transition} repeats the implicit (0, 0)")]
    RedundantZeroKick {
        family: String,
        transition: Transition,
    },

    #[display("family {family:?}: unknown transition label {label:?}")]
    UnknownTransition { family: String, label: String },

    #[display("piece {} references unknown kick family {family:?}", kind.as_str())]
    UnknownFamily { kind: PieceKind, family: String },

    #[display("piece {} repeats a cell in orientation {}", kind.as_str(), orientation.index())]
    DuplicateCell {
        kind: PieceKind,
        orientation: Orientation,
    },

    #[display("two different kick tables are both named {family:?}")]
    ConflictingFamily { family: String },

    #[display("family {family:?} uses a different zero-offset convention than the rest of the set")]
    MixedConventions { family: String },

    #[display("anchor ({}, {}) puts cells outside the i8 coordinate range", anchor.0, anchor.1)]
    AnchorOutOfRange { anchor: CellPos },

    #[display("malformed table data: {_0}")]
    #[from]
    Json(serde_json::Error),

    #[display("cannot read table file: {_0}")]
    #[from]
    Io(std::io::Error),
}
