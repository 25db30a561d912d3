//! Selection scope over a table.
//!
//! A [`Selection`] describes which cells a bulk edit applies to: one cell, a
//! whole column across every section, or the table itself (which matches no
//! cell — the host uses it for "table focused, no cell being edited").

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::location::CellLocation;

/// The user's current focus scope over the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Selection {
    /// Exactly one cell.
    Cell(CellLocation),
    /// Every cell sharing a column index, across all sections.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Column {
        /// The selected column index.
        column_index: usize,
    },
    /// The table as a whole; matches no individual cell.
    Table,
}

impl Selection {
    /// Whether the cell at `location` falls inside this selection.
    pub fn contains(&self, location: CellLocation) -> bool {
        match *self {
            Selection::Cell(selected) => selected == location,
            Selection::Column { column_index } => location.column_index == column_index,
            Selection::Table => false,
        }
    }
}

/// Whether a cell location is covered by a selection.
///
/// `false` when either side is absent, and always `false` for
/// [`Selection::Table`].
pub fn is_cell_selected(location: Option<CellLocation>, selection: Option<&Selection>) -> bool {
    match (location, selection) {
        (Some(location), Some(selection)) => selection.contains(location),
        _ => false,
    }
}
