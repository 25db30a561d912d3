//! Structural edits on a table.
//!
//! All operations consume the table and return the transformed value. When an
//! operation decides it has nothing to do — an `insert_row` whose column count
//! cannot be determined, an update whose selection matches no cell — it
//! returns the input value untouched, without rebuilding any row or cell.
//! Hosts that diff by storage identity (to skip re-render or recompute work)
//! can rely on this: a no-op keeps the exact same allocations.
//!
//! # Example
//!
//! ```rust
//! use table_core::{InsertRowOptions, SectionName, Table};
//!
//! let table = Table::new(2, 2);
//! let table = table.insert_row(&InsertRowOptions {
//!     section_name: SectionName::Body,
//!     row_index: 1,
//!     column_count: None,
//! });
//! assert_eq!(table.section(SectionName::Body).unwrap().len(), 3);
//! ```

use crate::cell::{Cell, CellPatch, CellTag};
use crate::location::{CellLocation, RowLocation};
use crate::selection::Selection;
use crate::table::{SectionName, Table};

/// Cell attributes a new row inherits, per column, from the first row of its
/// section.
const INHERITED_COLUMN_ATTRIBUTES: [&str; 1] = ["align"];

/// Where and how to insert a row; see [`Table::insert_row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertRowOptions {
    /// The section to insert into.
    pub section_name: SectionName,
    /// Row index the new row will occupy; existing rows shift down.
    pub row_index: usize,
    /// Cell count for the new row. When `None`, the cell count of the
    /// section's existing first row is used.
    pub column_count: Option<usize>,
}

impl Table {
    /// Insert a row into a section.
    ///
    /// The new row's cells are empty; their tag is `th` in the head and `td`
    /// elsewhere. Attributes listed as column-inherited (currently `align`)
    /// are copied per column from the section's first row.
    ///
    /// No-op when the cell count comes out as zero — an explicit
    /// `column_count` of zero, or no `column_count` and no existing row to
    /// take the count from. The input table is returned untouched in that
    /// case.
    pub fn insert_row(mut self, options: &InsertRowOptions) -> Table {
        let first_row = self
            .section(options.section_name)
            .and_then(|rows| rows.first());
        let cell_count = match options.column_count {
            Some(count) => count,
            None => first_row.map(|row| row.cells.len()).unwrap_or(0),
        };
        if cell_count == 0 {
            return self;
        }

        let tag = CellTag::for_section(options.section_name);
        let cells: Vec<Cell> = (0..cell_count)
            .map(|column_index| {
                let mut cell = Cell::new(tag);
                if let Some(template) = first_row.and_then(|row| row.cells.get(column_index)) {
                    for name in INHERITED_COLUMN_ATTRIBUTES {
                        if let Some(value) = template.attrs.get(name) {
                            cell.attrs.insert(name.to_string(), value.clone());
                        }
                    }
                }
                cell
            })
            .collect();

        let section = self
            .section_slot(options.section_name)
            .get_or_insert_with(Vec::new);
        let row_index = options.row_index.min(section.len());
        section.insert(row_index, cells.into());
        self
    }

    /// Remove the row at a location.
    ///
    /// Removing the last row leaves the section present but empty. Locations
    /// that point at nothing leave the table untouched.
    pub fn delete_row(mut self, location: &RowLocation) -> Table {
        if let Some(section) = self.section_mut(location.section_name)
            && location.row_index < section.len()
        {
            section.remove(location.row_index);
        }
        self
    }

    /// Insert a column at `column_index` across every section.
    ///
    /// Within each non-empty section, a cell is added to each row that
    /// already has at least `column_index` cells; shorter rows and rows with
    /// no cells are left as they are. New cells take the section's tag
    /// (`th` in the head, `td` elsewhere).
    pub fn insert_column(mut self, column_index: usize) -> Table {
        for name in SectionName::ALL {
            if self.is_section_empty(name) {
                continue;
            }
            let tag = CellTag::for_section(name);
            let Some(section) = self.section_mut(name) else {
                continue;
            };
            for row in section.iter_mut() {
                if row.cells.is_empty() || row.cells.len() < column_index {
                    continue;
                }
                row.cells.insert(column_index, Cell::new(tag));
            }
        }
        self
    }

    /// Delete the column at `column_index` across every section.
    ///
    /// Each row that has a cell at that index loses it; rows left with no
    /// cells are removed from their section entirely, so deleting the only
    /// column of a section empties the section rather than keeping cell-less
    /// rows around.
    pub fn delete_column(mut self, column_index: usize) -> Table {
        for name in SectionName::ALL {
            if self.is_section_empty(name) {
                continue;
            }
            let Some(section) = self.section_mut(name) else {
                continue;
            };
            for row in section.iter_mut() {
                if column_index < row.cells.len() {
                    row.cells.remove(column_index);
                }
            }
            section.retain(|row| !row.cells.is_empty());
        }
        self
    }

    /// Toggle a section on or off.
    ///
    /// A section that holds any cell is cleared to an empty row list. A
    /// section that holds none (absent, no rows, or only empty rows) gets one
    /// row inserted at index zero, sized to the body's first row (one cell
    /// when there is no body row to measure).
    pub fn toggle_section(mut self, name: SectionName) -> Table {
        if !self.is_section_empty(name) {
            *self.section_slot(name) = Some(Vec::new());
            return self;
        }

        let column_count = self
            .body
            .as_ref()
            .and_then(|rows| rows.first())
            .map(|row| row.cells.len())
            .unwrap_or(1);
        self.insert_row(&InsertRowOptions {
            section_name: name,
            row_index: 0,
            column_count: Some(column_count),
        })
    }

    /// Apply a patch to every cell the selection covers.
    ///
    /// The callback sees each selected cell and returns a [`CellPatch`] that
    /// is shallow-merged onto it: attributes the patch does not name keep
    /// their current value. When the selection is absent, is
    /// [`Selection::Table`], or covers no existing cell, the input table is
    /// returned untouched.
    pub fn update_selected_cells<F>(mut self, selection: Option<&Selection>, mut update: F) -> Table
    where
        F: FnMut(&Cell) -> CellPatch,
    {
        let Some(selection) = selection else {
            return self;
        };

        for name in SectionName::ALL {
            let Some(section) = self.section_mut(name) else {
                continue;
            };
            for (row_index, row) in section.iter_mut().enumerate() {
                for (column_index, cell) in row.cells.iter_mut().enumerate() {
                    let location = CellLocation::new(name, row_index, column_index);
                    if selection.contains(location) {
                        let patch = update(cell);
                        cell.apply(&patch);
                    }
                }
            }
        }
        self
    }
}
