use std::fmt;

use crate::token::TableToken;

/// Kinds of parsed segments fillers can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Table,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
        }
    }
}

/// A segment produced by the SQL parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlSegment {
    Table(TableSegment),
}

impl SqlSegment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Self::Table(_) => SegmentKind::Table,
        }
    }
}

impl From<TableSegment> for SqlSegment {
    fn from(segment: TableSegment) -> Self {
        SqlSegment::Table(segment)
    }
}

/// Segment types that can be extracted from a `SqlSegment`.
pub trait SegmentVariant: fmt::Debug + Sized {
    const KIND: SegmentKind;

    fn from_segment(segment: &SqlSegment) -> Option<&Self>;
}

/// Reference to a table in the SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSegment {
    pub name: String,
    pub alias: Option<String>,
    pub token: TableToken,
}

impl TableSegment {
    /// Create a segment for a table referenced at `start_index` in the SQL
    /// text.
    pub fn new(name: impl Into<String>, start_index: usize) -> Self {
        let name = name.into();
        TableSegment {
            token: TableToken::new(start_index, name.clone()),
            name,
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Create a segment for a `schema.table` reference starting at
    /// `start_index`.
    ///
    /// The `schema.` qualifier is skipped by the rewriter.
    pub fn qualified(schema: &str, name: impl Into<String>, start_index: usize) -> Self {
        let mut segment = Self::new(name, start_index);
        segment.token.skipped_schema_name_length = schema.len() + 1;
        segment
    }
}

impl SegmentVariant for TableSegment {
    const KIND: SegmentKind = SegmentKind::Table;

    fn from_segment(segment: &SqlSegment) -> Option<&Self> {
        match segment {
            SqlSegment::Table(table) => Some(table),
        }
    }
}
