#![warn(missing_docs)]
//! Table Core - Headless Table State Engine
//!
//! # Overview
//!
//! `table-core` is the structural state model behind a block editor's table
//! block. It owns the table data (head/body/foot sections, rows, cells) and
//! exposes pure query and transformation operations; it does not involve
//! rendering, input handling, or history, assuming the host editor provides
//! those around it.
//!
//! # Core Features
//!
//! - **Structural Edits**: insert/delete rows and columns, toggle sections
//!   on and off
//! - **Selection-Aware Updates**: bulk attribute patches scoped to one cell
//!   or a whole column
//! - **Navigation Queries**: cell above/below/left/right and first/last
//!   boundaries, for keyboard movement
//! - **Ragged Tables**: rows within a section may have unequal cell counts;
//!   every operation tolerates this
//! - **No-op Identity**: operations with nothing to do hand the input back
//!   untouched, same allocations, so hosts can skip downstream work
//!
//! # Quick Start
//!
//! ```rust
//! use table_core::{CellLocation, InsertRowOptions, SectionName, Table};
//!
//! // A 2x2 body-only table.
//! let table = Table::new(2, 2);
//!
//! // Turn the header on; it is sized to the body's first row.
//! let table = table.toggle_section(SectionName::Head);
//! assert_eq!(table.section(SectionName::Head).unwrap().len(), 1);
//!
//! // Append a body row, inheriting the column count from the first row.
//! let table = table.insert_row(&InsertRowOptions {
//!     section_name: SectionName::Body,
//!     row_index: 2,
//!     column_count: None,
//! });
//! assert_eq!(table.section(SectionName::Body).unwrap().len(), 3);
//!
//! // Navigation starts at the head now.
//! assert_eq!(
//!     table.first_cell_location(),
//!     Some(CellLocation::new(SectionName::Head, 0, 0))
//! );
//! ```
//!
//! ## Selection-scoped updates
//!
//! ```rust
//! use table_core::{CellPatch, Selection, Table};
//!
//! let table = Table::new(2, 2);
//! let table = table.update_selected_cells(
//!     Some(&Selection::Column { column_index: 1 }),
//!     |_cell| CellPatch::new().with_attr("align", "right"),
//! );
//!
//! let body = table.section(table_core::SectionName::Body).unwrap();
//! assert_eq!(body[0].cells[1].attribute("align"), Some("right"));
//! assert_eq!(body[0].cells[0].attribute("align"), None);
//! ```
//!
//! # Module Description
//!
//! - [`cell`] - cells, tags, and shallow attribute patches
//! - [`table`] - sections, rows, construction, and lookup
//! - [`location`] - cell/row coordinates and positional moves
//! - [`selection`] - selection scopes and matching
//! - [`edits`] - structural transformations
//! - `navigation` - table-dependent location queries (methods on [`Table`])
//!
//! # Design Notes
//!
//! The table value flows through the engine by ownership: operations consume
//! a [`Table`] and return the next one. Sections iterate in a fixed order —
//! head, body, foot — which the navigation queries depend on. Queries return
//! `Option` rather than panicking; no operation in this crate fails for
//! well-typed input.

pub mod cell;
pub mod edits;
pub mod location;
mod navigation;
pub mod selection;
pub mod table;

pub use cell::{Cell, CellPatch, CellTag, ParseCellTagError};
pub use edits::InsertRowOptions;
pub use location::{CellLocation, RowLocation};
pub use selection::{Selection, is_cell_selected};
pub use table::{
    ParseSectionNameError, Row, Section, SectionName, Table, is_empty_row, is_empty_table_section,
};
