use std::sync::Arc;

use crate::table_rule::TableRule;

/// Group of tables that are sharded identically.
///
/// Joins between tables in the same group can be routed to a single shard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingTableRule {
    table_rules: Vec<Arc<TableRule>>,
}

impl BindingTableRule {
    pub fn new(table_rules: Vec<Arc<TableRule>>) -> Self {
        BindingTableRule { table_rules }
    }

    pub fn has_logic_table(&self, logic_table: &str) -> bool {
        let logic_table = logic_table.to_lowercase();
        self.table_rules
            .iter()
            .any(|rule| rule.logic_table().to_lowercase() == logic_table)
    }

    pub fn logic_tables(&self) -> impl Iterator<Item = &str> {
        self.table_rules.iter().map(|rule| rule.logic_table())
    }

    pub fn table_rules(&self) -> &[Arc<TableRule>] {
        &self.table_rules
    }
}
