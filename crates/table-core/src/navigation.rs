//! Location queries used for keyboard navigation.
//!
//! All queries are total: they return `None` instead of failing when the
//! requested neighbor or boundary does not exist. Vertical movement steps
//! exactly one section (head ↔ body ↔ foot) and never skips over an empty
//! neighboring section; the target row must actually have a cell at the
//! requested column, which matters for ragged tables.
//!
//! The purely positional moves that need no table at all — one column to the
//! left, the start of a row — live on [`CellLocation`] itself.

use crate::location::{CellLocation, RowLocation};
use crate::table::{SectionName, Table, is_empty_table_section};

impl Table {
    /// The location of the cell directly above, crossing into the previous
    /// section's last row at a section boundary.
    pub fn cell_above(&self, location: CellLocation) -> Option<CellLocation> {
        let CellLocation {
            section_name,
            row_index,
            column_index,
        } = location;

        if row_index == 0 {
            let previous_name = section_name.previous()?;
            let previous = self.section(previous_name)?;
            if is_empty_table_section(Some(previous)) {
                return None;
            }
            let last_index = previous.len() - 1;
            if column_index >= previous[last_index].cells.len() {
                return None;
            }
            return Some(CellLocation::new(previous_name, last_index, column_index));
        }

        let above = RowLocation::new(section_name, row_index - 1);
        if column_index >= self.row(above)?.cells.len() {
            return None;
        }
        Some(above.with_column(column_index))
    }

    /// The location of the cell directly below, crossing into the next
    /// section's first row at a section boundary.
    pub fn cell_below(&self, location: CellLocation) -> Option<CellLocation> {
        let CellLocation {
            section_name,
            row_index,
            column_index,
        } = location;

        let section = self.section(section_name)?;
        if row_index + 1 < section.len() {
            if column_index >= section[row_index + 1].cells.len() {
                return None;
            }
            return Some(CellLocation::new(section_name, row_index + 1, column_index));
        }

        let next_name = section_name.next()?;
        let next = self.section(next_name)?;
        if is_empty_table_section(Some(next)) {
            return None;
        }
        if column_index >= next.first()?.cells.len() {
            return None;
        }
        Some(CellLocation::new(next_name, 0, column_index))
    }

    /// The location of the cell to the right, if the row extends that far.
    pub fn cell_to_right(&self, location: CellLocation) -> Option<CellLocation> {
        let row = self.row(location)?;
        if location.column_index + 1 >= row.cells.len() {
            return None;
        }
        Some(CellLocation {
            column_index: location.column_index + 1,
            ..location
        })
    }

    /// The last cell of the row at `location`. Needs a table lookup to learn
    /// the row's length; `None` for missing or empty rows.
    pub fn last_cell_in_row(&self, location: impl Into<RowLocation>) -> Option<CellLocation> {
        let location = location.into();
        let last_column = self.row(location)?.cells.len().checked_sub(1)?;
        Some(location.with_column(last_column))
    }

    /// The first row, scanning sections in table order, that has a cell at
    /// `column_index`.
    pub fn first_cell_in_column(&self, column_index: usize) -> Option<CellLocation> {
        for (name, section) in self.sections() {
            for (row_index, row) in section.iter().enumerate() {
                if column_index < row.cells.len() {
                    return Some(CellLocation::new(name, row_index, column_index));
                }
            }
        }
        None
    }

    /// The last row, scanning sections in reverse table order, that has a
    /// cell at `column_index`.
    pub fn last_cell_in_column(&self, column_index: usize) -> Option<CellLocation> {
        for name in SectionName::ALL.iter().rev() {
            let Some(section) = self.section(*name) else {
                continue;
            };
            for (row_index, row) in section.iter().enumerate().rev() {
                if column_index < row.cells.len() {
                    return Some(CellLocation::new(*name, row_index, column_index));
                }
            }
        }
        None
    }

    /// The first row of the first section that has any rows.
    pub fn first_row_location(&self) -> Option<RowLocation> {
        self.sections()
            .find(|(_, section)| !section.is_empty())
            .map(|(name, _)| RowLocation::new(name, 0))
    }

    /// The last row of the last section that has any rows.
    pub fn last_row_location(&self) -> Option<RowLocation> {
        SectionName::ALL.iter().rev().find_map(|&name| {
            let section = self.section(name)?;
            let last_index = section.len().checked_sub(1)?;
            Some(RowLocation::new(name, last_index))
        })
    }

    /// The first cell of the table: the first row, column zero.
    pub fn first_cell_location(&self) -> Option<CellLocation> {
        Some(self.first_row_location()?.with_column(0))
    }

    /// The last cell of the table: the last cell of the last row.
    pub fn last_cell_location(&self) -> Option<CellLocation> {
        self.last_cell_in_row(self.last_row_location()?)
    }
}
