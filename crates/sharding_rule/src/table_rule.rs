use crate::data_node::DataNode;
use crate::errors::Result;
use crate::inline;

/// Maps a logic table to the physical tables it's spread across.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRule {
    logic_table: String,
    actual_data_nodes: Vec<DataNode>,
}

impl TableRule {
    /// Create a table rule from an inline data node expression, e.g.
    /// `ds_${0..1}.t_order_${0..1}`.
    pub fn try_new(logic_table: impl Into<String>, actual_data_nodes: &str) -> Result<Self> {
        let actual_data_nodes = inline::expand(actual_data_nodes)?
            .iter()
            .map(|node| DataNode::parse(node))
            .collect::<Result<Vec<_>>>()?;

        Ok(TableRule {
            logic_table: logic_table.into(),
            actual_data_nodes,
        })
    }

    /// Create a table rule without explicit data nodes.
    ///
    /// The table is assumed to exist under its logic name in every data
    /// source.
    pub fn new_default<S>(logic_table: impl Into<String>, data_source_names: S) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let logic_table = logic_table.into();
        let actual_data_nodes = data_source_names
            .into_iter()
            .map(|ds| DataNode::new(ds.as_ref(), logic_table.clone()))
            .collect();

        TableRule {
            logic_table,
            actual_data_nodes,
        }
    }

    pub fn logic_table(&self) -> &str {
        &self.logic_table
    }

    pub fn actual_data_nodes(&self) -> &[DataNode] {
        &self.actual_data_nodes
    }

    /// Distinct actual table names, in data node order.
    pub fn actual_table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for node in &self.actual_data_nodes {
            if !names.contains(&node.table_name.as_str()) {
                names.push(&node.table_name);
            }
        }
        names
    }

    /// Check if the given physical table belongs to this rule.
    pub fn is_existed(&self, actual_table: &str) -> bool {
        let actual_table = actual_table.to_lowercase();
        self.actual_data_nodes
            .iter()
            .any(|node| node.table_name.to_lowercase() == actual_table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_expression() {
        let rule = TableRule::try_new("t_order", "ds_${0..1}.t_order_${0..1}").unwrap();
        assert_eq!("t_order", rule.logic_table());
        assert_eq!(4, rule.actual_data_nodes().len());
        assert_eq!(vec!["t_order_0", "t_order_1"], rule.actual_table_names());
        assert!(rule.is_existed("T_ORDER_1"));
        assert!(!rule.is_existed("t_order"));
    }

    #[test]
    fn default_nodes() {
        let rule = TableRule::new_default("t_config", ["ds_0", "ds_1"]);
        assert_eq!(
            &[
                DataNode::new("ds_0", "t_config"),
                DataNode::new("ds_1", "t_config")
            ],
            rule.actual_data_nodes()
        );
        assert!(rule.is_existed("t_config"));
    }

    #[test]
    fn invalid_node() {
        TableRule::try_new("t_order", "t_order_${0..1}").unwrap_err();
    }
}
