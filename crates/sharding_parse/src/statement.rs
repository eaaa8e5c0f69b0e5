use crate::table::{Table, Tables};
use crate::token::SqlToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlStatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Ddl,
    Dcl,
    Dal,
    Tcl,
}

/// Logic statement model accumulated while filling parsed segments.
///
/// Owned by a single parse pass, then handed off read-only to routing and
/// rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    kind: SqlStatementKind,
    tables: Tables,
    tokens: Vec<SqlToken>,
}

impl SqlStatement {
    pub fn new(kind: SqlStatementKind) -> Self {
        SqlStatement {
            kind,
            tables: Tables::default(),
            tokens: Vec::new(),
        }
    }

    pub fn kind(&self) -> SqlStatementKind {
        self.kind
    }

    pub fn is_select(&self) -> bool {
        self.kind == SqlStatementKind::Select
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn tokens(&self) -> &[SqlToken] {
        &self.tokens
    }

    /// Register a table along with the token marking where it appears.
    pub fn add_table(&mut self, table: Table, token: impl Into<SqlToken>) {
        self.tables.add(table);
        self.tokens.push(token.into());
    }
}
