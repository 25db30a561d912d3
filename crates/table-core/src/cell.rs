//! Cell data model.
//!
//! A [`Cell`] is the leaf of the table structure: its text content, its markup
//! tag (`th`/`td`), and an ordered map of arbitrary extra attributes (such as
//! `align`) that structural operations carry along untouched.
//!
//! Bulk updates are expressed as a [`CellPatch`], a shallow merge applied on
//! top of a cell: attributes absent from the patch keep their current value.

use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::table::SectionName;

/// The markup tag of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellTag {
    /// Header cell (`th`).
    Th,
    /// Data cell (`td`).
    Td,
}

impl CellTag {
    /// The tag as it appears in table markup: `"th"` or `"td"`.
    pub fn as_str(self) -> &'static str {
        match self {
            CellTag::Th => "th",
            CellTag::Td => "td",
        }
    }

    /// The tag used for cells created inside `section`: `th` in the head,
    /// `td` everywhere else.
    pub fn for_section(section: SectionName) -> Self {
        match section {
            SectionName::Head => CellTag::Th,
            SectionName::Body | SectionName::Foot => CellTag::Td,
        }
    }
}

impl std::fmt::Display for CellTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CellTag {
    type Err = ParseCellTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "th" => Ok(CellTag::Th),
            "td" => Ok(CellTag::Td),
            other => Err(ParseCellTagError {
                tag: other.to_string(),
            }),
        }
    }
}

/// Error returned when parsing a string that is neither `"th"` nor `"td"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCellTagError {
    tag: String,
}

impl std::fmt::Display for ParseCellTagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown cell tag {:?}, expected \"th\" or \"td\"", self.tag)
    }
}

impl std::error::Error for ParseCellTagError {}

/// A single table cell.
///
/// Besides the typed `content` and `tag` attributes, a cell carries an ordered
/// map of extra string attributes. Structural operations (row/column inserts
/// and deletes) never inspect these beyond the inherited ones; they are
/// preserved as-is for the host editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    /// Text content. Empty for newly created cells.
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: String,
    /// Markup tag (`th`/`td`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub tag: CellTag,
    /// Extra attributes (e.g. `align`), in insertion order.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub attrs: IndexMap<String, String>,
}

impl Default for CellTag {
    fn default() -> Self {
        CellTag::Td
    }
}

impl Cell {
    /// Create an empty cell with the given tag.
    pub fn new(tag: CellTag) -> Self {
        Cell {
            content: String::new(),
            tag,
            attrs: IndexMap::new(),
        }
    }

    /// Builder-style content setter.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builder-style extra-attribute setter.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Look up an attribute by name.
    ///
    /// `"content"` and `"tag"` resolve to the typed fields; any other name is
    /// looked up in the extra attributes. Returns `None` for attributes the
    /// cell does not carry.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "content" => Some(self.content.as_str()),
            "tag" => Some(self.tag.as_str()),
            _ => self.attrs.get(name).map(String::as_str),
        }
    }

    /// Merge a patch onto this cell.
    ///
    /// Shallow-merge semantics: only attributes the patch names are replaced,
    /// everything else keeps its current value.
    pub fn apply(&mut self, patch: &CellPatch) {
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        if let Some(tag) = patch.tag {
            self.tag = tag;
        }
        for (name, value) in &patch.attrs {
            self.attrs.insert(name.clone(), value.clone());
        }
    }
}

/// A shallow attribute patch for a cell.
///
/// Built by the update callback passed to
/// [`Table::update_selected_cells`](crate::Table::update_selected_cells).
/// Attributes left unset are not touched by the merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellPatch {
    /// Replacement content, if any.
    pub content: Option<String>,
    /// Replacement tag, if any.
    pub tag: Option<CellTag>,
    /// Extra attributes to set or overwrite.
    pub attrs: IndexMap<String, String>,
}

impl CellPatch {
    /// An empty patch (merging it is a no-op).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style content setter.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Builder-style tag setter.
    pub fn with_tag(mut self, tag: CellTag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Builder-style extra-attribute setter.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}
