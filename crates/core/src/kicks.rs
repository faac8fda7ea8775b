//! Wall-kick tables
//!
//! A [`WallKickTable`] maps each of the eight [`Transition`]s to an ordered list
//! of `(dx, dy)` candidates. Order is significant: the resolver accepts the first
//! candidate that yields a legal placement and never reorders the list.
//!
//! # Zero offset convention
//!
//! Every table carries a [`KickConvention`]:
//!
//! - [`KickConvention::ExplicitZero`]: each list starts with `(0, 0)`. This is
//!   the convention of the standard SRS tables below.
//! - [`KickConvention::ImplicitZero`]: lists omit `(0, 0)` and candidate
//!   iteration yields it first.
//!
//! [`WallKickTable::validate`] enforces whichever convention the table declares,
//! so a list can never silently lose its in-place attempt.
//!
//! # Coordinates
//!
//! Rows grow downward. The guideline publishes kick data with `+y` pointing up,
//! so every `dy` below is the published value negated.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::TableError;
use crate::types::{KickOffset, Transition};

/// Upper bound on candidates per transition
pub const MAX_KICKS: usize = 8;

/// Ordered kick candidates for one transition
pub type KickList = ArrayVec<KickOffset, MAX_KICKS>;

/// Where the in-place `(0, 0)` attempt lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KickConvention {
    #[default]
    ExplicitZero,
    ImplicitZero,
}

/// Kick data for one piece-type family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallKickTable {
    family: String,
    convention: KickConvention,
    /// Indexed by [`Transition::index`]; `None` means no data
    lists: [Option<KickList>; 8],
}

impl WallKickTable {
    /// Empty table; fill it with [`WallKickTable::with`]
    pub fn new(family: impl Into<String>, convention: KickConvention) -> Self {
        Self {
            family: family.into(),
            convention,
            lists: Default::default(),
        }
    }

    /// Set the candidate list for one transition
    pub fn with(mut self, transition: Transition, kicks: &[KickOffset]) -> Result<Self, TableError> {
        let mut list = KickList::new();
        list.try_extend_from_slice(kicks)
            .map_err(|_| TableError::KickListTooLong {
                family: self.family.clone(),
                transition,
                len: kicks.len(),
            })?;
        self.lists[transition.index()] = Some(list);
        Ok(self)
    }

    fn from_rows<const N: usize>(family: &str, rows: &[[KickOffset; N]; 8]) -> Self {
        let mut table = Self::new(family, KickConvention::ExplicitZero);
        for (slot, row) in table.lists.iter_mut().zip(rows) {
            *slot = Some(row.iter().copied().take(MAX_KICKS).collect());
        }
        table
    }

    /// SRS table shared by J, L, S, T and Z
    pub fn standard_jlstz() -> Self {
        Self::from_rows(FAMILY_JLSTZ, &JLSTZ_KICKS)
    }

    /// SRS table for the I piece
    pub fn standard_i() -> Self {
        Self::from_rows(FAMILY_I, &I_KICKS)
    }

    /// The O piece has no pivot and never kicks
    pub fn standard_o() -> Self {
        Self::from_rows(FAMILY_O, &O_KICKS)
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn convention(&self) -> KickConvention {
        self.convention
    }

    /// Candidates exactly as listed in the table data
    pub fn kicks(&self, transition: Transition) -> &[KickOffset] {
        self.lists[transition.index()].as_deref().unwrap_or(&[])
    }

    /// Whether the table has an entry for `transition` at all
    pub fn has_entry(&self, transition: Transition) -> bool {
        self.lists[transition.index()].is_some()
    }

    /// Candidates in resolution order, with the convention applied
    pub fn candidates(&self, transition: Transition) -> impl Iterator<Item = KickOffset> + '_ {
        let implicit = self.convention == KickConvention::ImplicitZero;
        implicit
            .then_some((0, 0))
            .into_iter()
            .chain(self.kicks(transition).iter().copied())
    }

    /// Check that every transition has data and the zero convention holds
    pub fn validate(&self) -> Result<(), TableError> {
        for transition in Transition::ALL {
            let family = self.family.clone();
            let result = match (self.convention, self.lists[transition.index()].as_deref()) {
                (_, None) => Err(TableError::MissingKickData { family, transition }),
                (KickConvention::ExplicitZero, Some([])) => {
                    Err(TableError::ZeroKickNotFirst { family, transition })
                }
                (KickConvention::ExplicitZero, Some([first, ..])) if *first != (0, 0) => {
                    Err(TableError::ZeroKickNotFirst { family, transition })
                }
                (KickConvention::ImplicitZero, Some([(0, 0), ..])) => {
                    Err(TableError::RedundantZeroKick { family, transition })
                }
                _ => Ok(()),
            };
            if let Err(err) = result {
                warn!(%err, "rejecting wall-kick table");
                return Err(err);
            }
        }
        Ok(())
    }
}

/// Family name of the shared JLSTZ table
pub const FAMILY_JLSTZ: &str = "jlstz";
/// Family name of the I table
pub const FAMILY_I: &str = "i";
/// Family name of the O table
pub const FAMILY_O: &str = "o";

/// Rows in [`Transition::ALL`] order
const JLSTZ_KICKS: [[KickOffset; 5]; 8] = [
    // 0->1
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 1->0
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 1->2
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 2->1
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 2->3
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 3->2
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 3->0
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 0->3
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
];

const I_KICKS: [[KickOffset; 5]; 8] = [
    // 0->1
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // 1->0
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 1->2
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // 2->1
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // 2->3
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 3->2
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // 3->0
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // 0->3
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
];

const O_KICKS: [[KickOffset; 1]; 8] = [[(0, 0)]; 8];
