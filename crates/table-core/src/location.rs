//! Cell and row coordinates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::table::SectionName;

/// The coordinates of one cell: section, row, column. Zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CellLocation {
    /// The section the cell lives in.
    pub section_name: SectionName,
    /// Row index within the section.
    pub row_index: usize,
    /// Column index within the row.
    pub column_index: usize,
}

impl CellLocation {
    /// Create a cell location.
    pub fn new(section_name: SectionName, row_index: usize, column_index: usize) -> Self {
        CellLocation {
            section_name,
            row_index,
            column_index,
        }
    }

    /// The location one column to the left, or `None` at the start of the
    /// row. Purely positional; no table lookup is needed.
    pub fn to_left(self) -> Option<CellLocation> {
        if self.column_index == 0 {
            return None;
        }
        Some(CellLocation {
            column_index: self.column_index - 1,
            ..self
        })
    }

    /// The first cell of this location's row (column zero). Purely
    /// positional.
    pub fn start_of_row(self) -> CellLocation {
        CellLocation {
            column_index: 0,
            ..self
        }
    }
}

/// The coordinates of one row: section and row index. Zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RowLocation {
    /// The section the row lives in.
    pub section_name: SectionName,
    /// Row index within the section.
    pub row_index: usize,
}

impl RowLocation {
    /// Create a row location.
    pub fn new(section_name: SectionName, row_index: usize) -> Self {
        RowLocation {
            section_name,
            row_index,
        }
    }

    /// The location of this row's cell at `column_index`.
    pub fn with_column(self, column_index: usize) -> CellLocation {
        CellLocation {
            section_name: self.section_name,
            row_index: self.row_index,
            column_index,
        }
    }
}

impl From<CellLocation> for RowLocation {
    fn from(location: CellLocation) -> Self {
        RowLocation {
            section_name: location.section_name,
            row_index: location.row_index,
        }
    }
}
