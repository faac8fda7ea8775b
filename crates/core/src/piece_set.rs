//! Piece set - registry of shape and kick tables per piece kind
//!
//! This is the factory side of the data contract: every kind maps to an
//! immutable [`ShapeTable`] and a shared [`WallKickTable`]. Tables are validated
//! when registered, so a set can only ever hand out pieces that can rotate.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::TableError;
use crate::kicks::WallKickTable;
use crate::piece::Piece;
use crate::shapes::ShapeTable;
use crate::table_file::TableFile;
use crate::types::{CellPos, PieceKind};

/// Tables for one piece kind
#[derive(Debug, Clone)]
pub struct PieceSpec {
    pub shapes: Arc<ShapeTable>,
    pub kicks: Arc<WallKickTable>,
}

#[derive(Debug, Clone, Default)]
pub struct PieceSet {
    specs: BTreeMap<PieceKind, PieceSpec>,
}

impl PieceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The seven guideline pieces with SRS shapes and kicks
    ///
    /// J, L, S, T and Z share one JLSTZ table; I and O have their own.
    pub fn standard() -> Self {
        let jlstz = Arc::new(WallKickTable::standard_jlstz());
        let i = Arc::new(WallKickTable::standard_i());
        let o = Arc::new(WallKickTable::standard_o());

        let specs = PieceKind::ALL
            .into_iter()
            .map(|kind| {
                let kicks = match kind {
                    PieceKind::I => Arc::clone(&i),
                    PieceKind::O => Arc::clone(&o),
                    _ => Arc::clone(&jlstz),
                };
                let shapes = Arc::new(ShapeTable::standard(kind));
                (kind, PieceSpec { shapes, kicks })
            })
            .collect();

        Self { specs }
    }

    /// Parse a JSON table file (see [`TableFile`])
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let file: TableFile = serde_json::from_str(json)?;
        file.into_piece_set()
    }

    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Register (or replace) the tables for a kind
    pub fn register(
        &mut self,
        kind: PieceKind,
        shapes: Arc<ShapeTable>,
        kicks: Arc<WallKickTable>,
    ) -> Result<(), TableError> {
        kicks.validate()?;
        shapes.validate(kind)?;
        debug!(kind = kind.as_str(), family = kicks.family(), "registered piece tables");
        self.specs.insert(kind, PieceSpec { shapes, kicks });
        Ok(())
    }

    pub fn get(&self, kind: PieceKind) -> Option<&PieceSpec> {
        self.specs.get(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.specs.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// New piece of `kind` at `anchor`, orientation 0
    pub fn spawn(&self, kind: PieceKind, anchor: CellPos) -> Result<Piece, TableError> {
        let spec = self.get(kind).ok_or(TableError::MissingShape { kind })?;
        Piece::new(kind, Arc::clone(&spec.shapes), Arc::clone(&spec.kicks), anchor)
    }

    /// Export to the JSON file model
    pub fn to_table_file(&self) -> Result<TableFile, TableError> {
        TableFile::from_piece_set(self)
    }

    pub fn to_json(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(&self.to_table_file()?)?)
    }
}
