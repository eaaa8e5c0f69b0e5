use std::fmt;

use crate::errors::{Result, RuleError};

const DELIMITER: char = '.';

/// A single physical table living in a single data source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataNode {
    pub data_source_name: String,
    pub table_name: String,
}

impl DataNode {
    pub fn new(data_source_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        DataNode {
            data_source_name: data_source_name.into(),
            table_name: table_name.into(),
        }
    }

    /// Parse a data node from `<data_source>.<table>`.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let mut parts = text.split(DELIMITER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(ds), Some(table), None) if !ds.is_empty() && !table.is_empty() => {
                Ok(DataNode::new(ds, table))
            }
            _ => Err(RuleError::InvalidDataNode(text.to_string())),
        }
    }
}

impl fmt::Display for DataNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DELIMITER}{}", self.data_source_name, self.table_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let node = DataNode::parse(" ds_0.t_order_1 ").unwrap();
        assert_eq!(DataNode::new("ds_0", "t_order_1"), node);
        assert_eq!("ds_0.t_order_1", node.to_string());
    }

    #[test]
    fn parse_invalid() {
        for text in ["t_order", "ds.", ".t_order", "a.b.c", ""] {
            let err = DataNode::parse(text).unwrap_err();
            assert!(matches!(err, RuleError::InvalidDataNode(_)), "{text}");
        }
    }
}
