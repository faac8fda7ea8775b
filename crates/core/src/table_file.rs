//! JSON model for externally supplied tables
//!
//! ```json
//! {
//!   "convention": "explicit_zero",
//!   "families": {
//!     "jlstz": { "0->1": [[0, 0], [-1, 0], [-1, -1], [0, 2], [-1, 2]], ... }
//!   },
//!   "pieces": {
//!     "t": { "family": "jlstz", "shapes": [[[1, 0], [0, 1], [1, 1], [2, 1]], ...] }
//!   }
//! }
//! ```
//!
//! Shapes must have exactly four orientations of exactly four cells; serde
//! enforces the array lengths. Every family must list all eight transitions.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::TableError;
use crate::kicks::{KickConvention, WallKickTable};
use crate::piece_set::PieceSet;
use crate::shapes::ShapeTable;
use crate::types::{KickOffset, PieceKind, Transition};

/// `[x, y]` pair as written in the file
pub type RawPair = [i8; 2];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFile {
    /// Zero-offset convention shared by every family in the file
    #[serde(default)]
    pub convention: KickConvention,
    /// Family name -> transition label -> candidates
    pub families: BTreeMap<String, BTreeMap<String, Vec<RawPair>>>,
    pub pieces: BTreeMap<PieceKind, PieceEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceEntry {
    pub family: String,
    pub shapes: [[RawPair; 4]; 4],
}

impl TableFile {
    /// Build and validate a [`PieceSet`]
    ///
    /// Each family becomes one shared table, so pieces in the same family
    /// point at the same kick data.
    pub fn into_piece_set(self) -> Result<PieceSet, TableError> {
        let mut families = BTreeMap::new();
        for (name, entries) in &self.families {
            let mut table = WallKickTable::new(name.clone(), self.convention);
            for (label, pairs) in entries {
                let transition =
                    Transition::from_label(label).ok_or_else(|| TableError::UnknownTransition {
                        family: name.clone(),
                        label: label.clone(),
                    })?;
                let kicks: Vec<KickOffset> = pairs.iter().map(|&[x, y]| (x, y)).collect();
                table = table.with(transition, &kicks)?;
            }
            families.insert(name.clone(), Arc::new(table));
        }

        let mut set = PieceSet::new();
        for (kind, entry) in self.pieces {
            let kicks = families
                .get(&entry.family)
                .cloned()
                .ok_or_else(|| TableError::UnknownFamily {
                    kind,
                    family: entry.family.clone(),
                })?;
            let shapes = ShapeTable::new(entry.shapes.map(|o| o.map(|[x, y]| (x, y))));
            set.register(kind, Arc::new(shapes), kicks)?;
        }

        for name in families.keys() {
            let used = set
                .kinds()
                .filter_map(|kind| set.get(kind))
                .any(|spec| spec.kicks.family() == name);
            if !used {
                warn!(family = %name, "kick family is not used by any piece");
            }
        }

        Ok(set)
    }

    /// Snapshot a set back into the file model
    ///
    /// A file has one convention and one table per family name, so a set that
    /// mixes conventions, or registers two different tables under the same
    /// name, cannot be exported.
    pub fn from_piece_set(set: &PieceSet) -> Result<Self, TableError> {
        let mut tables: BTreeMap<&str, &WallKickTable> = BTreeMap::new();
        let mut pieces = BTreeMap::new();
        let mut convention = None;

        for kind in set.kinds() {
            let Some(spec) = set.get(kind) else { continue };
            let kicks: &WallKickTable = &spec.kicks;
            let family = kicks.family();

            if *convention.get_or_insert(kicks.convention()) != kicks.convention() {
                return Err(TableError::MixedConventions {
                    family: family.to_string(),
                });
            }
            match tables.get(family) {
                Some(&existing) if existing != kicks => {
                    return Err(TableError::ConflictingFamily {
                        family: family.to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    tables.insert(family, kicks);
                }
            }

            let shapes = spec.shapes.orientations().map(|o| o.map(|(x, y)| [x, y]));
            pieces.insert(
                kind,
                PieceEntry {
                    family: family.to_string(),
                    shapes,
                },
            );
        }

        let families = tables
            .into_iter()
            .map(|(name, kicks)| {
                let entries: BTreeMap<String, Vec<RawPair>> = Transition::ALL
                    .into_iter()
                    .filter(|&t| kicks.has_entry(t))
                    .map(|t| {
                        let pairs: Vec<RawPair> = kicks.kicks(t).iter().map(|&(x, y)| [x, y]).collect();
                        (t.label().to_string(), pairs)
                    })
                    .collect();
                (name.to_string(), entries)
            })
            .collect();

        Ok(Self {
            convention: convention.unwrap_or_default(),
            families,
            pieces,
        })
    }
}
