//! Table structure: sections, rows, and lookup.
//!
//! A [`Table`] holds up to three named sections — `head`, `body`, `foot` —
//! each an ordered list of [`Row`]s. A section can be *absent* (`None`) or
//! *present but empty* (`Some` of an empty list); both mean "no rows", but
//! only a present section is written back explicitly by
//! [`Table::toggle_section`](crate::Table::toggle_section).
//!
//! Rows within a section are not required to have equal cell counts. Every
//! operation in this crate tolerates ragged tables.
//!
//! Whenever sections are iterated to answer a "first/last in table" question,
//! the order is fixed: head, body, foot ([`SectionName::ALL`]).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::location::{CellLocation, RowLocation};

/// A named group of rows in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SectionName {
    /// The `head` section.
    Head,
    /// The `body` section.
    Body,
    /// The `foot` section.
    Foot,
}

impl SectionName {
    /// All section names in table order. This ordering is load-bearing for
    /// the first/last and above/below queries.
    pub const ALL: [SectionName; 3] = [SectionName::Head, SectionName::Body, SectionName::Foot];

    /// The section name as it appears in markup: `"head"`, `"body"`, `"foot"`.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionName::Head => "head",
            SectionName::Body => "body",
            SectionName::Foot => "foot",
        }
    }

    /// The section directly above this one, if any.
    pub fn previous(self) -> Option<SectionName> {
        match self {
            SectionName::Head => None,
            SectionName::Body => Some(SectionName::Head),
            SectionName::Foot => Some(SectionName::Body),
        }
    }

    /// The section directly below this one, if any.
    pub fn next(self) -> Option<SectionName> {
        match self {
            SectionName::Head => Some(SectionName::Body),
            SectionName::Body => Some(SectionName::Foot),
            SectionName::Foot => None,
        }
    }
}

impl std::fmt::Display for SectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionName {
    type Err = ParseSectionNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "head" => Ok(SectionName::Head),
            "body" => Ok(SectionName::Body),
            "foot" => Ok(SectionName::Foot),
            other => Err(ParseSectionNameError {
                name: other.to_string(),
            }),
        }
    }
}

/// Error returned when parsing a string that is not a table section name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSectionNameError {
    name: String,
}

impl std::fmt::Display for ParseSectionNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown table section {:?}, expected \"head\", \"body\" or \"foot\"",
            self.name
        )
    }
}

impl std::error::Error for ParseSectionNameError {}

/// An ordered list of rows forming one table section.
pub type Section = Vec<Row>;

/// A single table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    /// The row's cells, left to right.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a row from its cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Row { cells }
    }
}

/// Whether a row is empty (has no cells).
pub fn is_empty_row(row: &Row) -> bool {
    row.is_empty()
}

/// Whether a section holds no cell at all: absent, without rows, or with
/// every row empty.
pub fn is_empty_table_section(section: Option<&Section>) -> bool {
    section.is_none_or(|rows| rows.iter().all(Row::is_empty))
}

/// The structural state of one table.
///
/// The table value is owned by the host editor; the engine takes it in,
/// transforms it, and hands it back. Operations that would have no effect
/// return the input value untouched — same allocations, no rebuild — so the
/// host can cheaply detect "nothing changed".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    /// The `head` section, if present.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub head: Option<Section>,
    /// The `body` section, if present.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub body: Option<Section>,
    /// The `foot` section, if present.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub foot: Option<Section>,
}

impl Table {
    /// Create a table with a single body of `row_count` rows of
    /// `column_count` empty `td` cells each.
    pub fn new(row_count: usize, column_count: usize) -> Self {
        use crate::cell::CellTag;

        let body = (0..row_count)
            .map(|_| Row::new((0..column_count).map(|_| Cell::new(CellTag::Td)).collect()))
            .collect();

        Table {
            head: None,
            body: Some(body),
            foot: None,
        }
    }

    /// The rows of a section, or `None` if the section is absent.
    pub fn section(&self, name: SectionName) -> Option<&Section> {
        match name {
            SectionName::Head => self.head.as_ref(),
            SectionName::Body => self.body.as_ref(),
            SectionName::Foot => self.foot.as_ref(),
        }
    }

    pub(crate) fn section_mut(&mut self, name: SectionName) -> Option<&mut Section> {
        self.section_slot(name).as_mut()
    }

    pub(crate) fn section_slot(&mut self, name: SectionName) -> &mut Option<Section> {
        match name {
            SectionName::Head => &mut self.head,
            SectionName::Body => &mut self.body,
            SectionName::Foot => &mut self.foot,
        }
    }

    /// Iterate over the present sections in table order (head, body, foot).
    pub fn sections(&self) -> impl Iterator<Item = (SectionName, &Section)> {
        SectionName::ALL
            .iter()
            .filter_map(|&name| self.section(name).map(|section| (name, section)))
    }

    /// Whether a section holds no cell at all (see [`is_empty_table_section`]).
    pub fn is_section_empty(&self, name: SectionName) -> bool {
        is_empty_table_section(self.section(name))
    }

    /// The row at a location, or `None` if the section or row index is out of
    /// range. Accepts a [`RowLocation`] or a
    /// [`CellLocation`](crate::CellLocation) (the column is ignored).
    pub fn row(&self, location: impl Into<RowLocation>) -> Option<&Row> {
        let location = location.into();
        self.section(location.section_name)?.get(location.row_index)
    }

    /// The cell at a location, or `None` if no such cell exists.
    pub fn cell(&self, location: CellLocation) -> Option<&Cell> {
        self.row(location)?.cells.get(location.column_index)
    }

    /// The value of one attribute of the cell at a location.
    ///
    /// `None` when the cell does not exist or does not carry the attribute.
    pub fn cell_attribute(&self, location: CellLocation, name: &str) -> Option<&str> {
        self.cell(location)?.attribute(name)
    }
}
