//! Tokens marking positions in the original SQL text that the rewriter
//! replaces.

/// Occurrence of a logic table name in the SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableToken {
    /// Byte offset of the table reference, including any schema qualifier.
    pub start_index: usize,
    pub table_name: String,
    /// Length of a leading `schema.` qualifier that the rewriter drops.
    pub skipped_schema_name_length: usize,
}

impl TableToken {
    pub fn new(start_index: usize, table_name: impl Into<String>) -> Self {
        TableToken {
            start_index,
            table_name: table_name.into(),
            skipped_schema_name_length: 0,
        }
    }

    /// Exclusive end offset of the table reference.
    pub fn stop_index(&self) -> usize {
        self.start_index + self.skipped_schema_name_length + self.table_name.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlToken {
    Table(TableToken),
}

impl SqlToken {
    pub fn start_index(&self) -> usize {
        match self {
            Self::Table(token) => token.start_index,
        }
    }
}

impl From<TableToken> for SqlToken {
    fn from(token: TableToken) -> Self {
        SqlToken::Table(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_index() {
        let mut token = TableToken::new(14, "t_order");
        assert_eq!(21, token.stop_index());

        // `FROM db.t_order`
        token.skipped_schema_name_length = 3;
        assert_eq!(24, token.stop_index());
    }
}
