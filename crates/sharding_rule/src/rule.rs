use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::binding::BindingTableRule;
use crate::config::ShardingRuleConfig;
use crate::data_source::ShardingDataSourceNames;
use crate::errors::{Result, RuleError};
use crate::oracle::ShardingRuleOracle;
use crate::table_rule::TableRule;

/// Sharding rule built from configuration.
///
/// Table names are matched case insensitively.
#[derive(Debug)]
pub struct ShardingRule {
    /// Table rules in configuration order.
    table_rules: Vec<Arc<TableRule>>,
    /// Lowercased logic table name -> position in `table_rules`.
    logic_tables: HashMap<String, usize>,
    binding_table_rules: Vec<BindingTableRule>,
    /// Lowercased broadcast table names.
    broadcast_tables: HashSet<String>,
    data_source_names: ShardingDataSourceNames,
}

impl ShardingRule {
    pub fn try_new<S>(config: &ShardingRuleConfig, data_source_names: S) -> Result<Self>
    where
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let data_source_names = ShardingDataSourceNames::new(
            data_source_names,
            config.default_data_source_name.clone(),
        );

        let mut table_rules = Vec::with_capacity(config.tables.len());
        let mut logic_tables = HashMap::with_capacity(config.tables.len());

        for table in &config.tables {
            let key = table.logic_table.to_lowercase();
            if logic_tables.contains_key(&key) {
                return Err(RuleError::DuplicateLogicTable(table.logic_table.clone()));
            }

            let rule = match &table.actual_data_nodes {
                Some(expr) => TableRule::try_new(&table.logic_table, expr)?,
                None => TableRule::new_default(
                    &table.logic_table,
                    data_source_names.data_source_names(),
                ),
            };

            logic_tables.insert(key, table_rules.len());
            table_rules.push(Arc::new(rule));
        }

        let binding_table_rules = config
            .binding_table_groups
            .iter()
            .map(|group| {
                let rules = group
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(|name| {
                        logic_tables
                            .get(&name.to_lowercase())
                            .map(|&idx| table_rules[idx].clone())
                            .ok_or_else(|| RuleError::MissingTableRule(name.to_string()))
                    })
                    .collect::<Result<Vec<_>>>()?;
                if rules.is_empty() {
                    return Err(RuleError::EmptyBindingGroup);
                }
                Ok(BindingTableRule::new(rules))
            })
            .collect::<Result<Vec<_>>>()?;

        let broadcast_tables = config
            .broadcast_tables
            .iter()
            .map(|t| t.to_lowercase())
            .collect();

        debug!(
            tables = table_rules.len(),
            binding_groups = binding_table_rules.len(),
            data_sources = data_source_names.data_source_names().len(),
            "built sharding rule"
        );

        Ok(ShardingRule {
            table_rules,
            logic_tables,
            binding_table_rules,
            broadcast_tables,
            data_source_names,
        })
    }

    /// Build a sharding rule from a JSON encoded `ShardingRuleConfig`.
    pub fn from_json<S>(json: &str, data_source_names: S) -> Result<Self>
    where
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let config: ShardingRuleConfig = serde_json::from_str(json)?;
        Self::try_new(&config, data_source_names)
    }

    pub fn table_rules(&self) -> &[Arc<TableRule>] {
        &self.table_rules
    }

    pub fn binding_table_rules(&self) -> &[BindingTableRule] {
        &self.binding_table_rules
    }

    pub fn find_table_rule(&self, logic_table: &str) -> Option<&TableRule> {
        self.logic_tables
            .get(&logic_table.to_lowercase())
            .map(|&idx| self.table_rules[idx].as_ref())
    }
}

impl ShardingRuleOracle for ShardingRule {
    fn contains(&self, logic_table: &str) -> bool {
        self.logic_tables.contains_key(&logic_table.to_lowercase())
    }

    fn is_broadcast_table(&self, logic_table: &str) -> bool {
        self.broadcast_tables
            .contains(&logic_table.to_lowercase())
    }

    fn find_binding_table_rule(&self, logic_table: &str) -> Option<&BindingTableRule> {
        self.binding_table_rules
            .iter()
            .find(|rule| rule.has_logic_table(logic_table))
    }

    fn sharding_data_source_names(&self) -> &ShardingDataSourceNames {
        &self.data_source_names
    }

    fn find_table_rule_by_actual_table(&self, actual_table: &str) -> Option<&TableRule> {
        self.table_rules
            .iter()
            .find(|rule| rule.is_existed(actual_table))
            .map(|rule| rule.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableRuleConfig;

    fn order_config() -> ShardingRuleConfig {
        ShardingRuleConfig {
            tables: vec![
                TableRuleConfig::new("t_order", Some("ds_${0..1}.t_order_${0..1}")),
                TableRuleConfig::new("t_order_item", Some("ds_${0..1}.t_order_item_${0..1}")),
                TableRuleConfig::new("t_user", None),
            ],
            binding_table_groups: vec!["t_order, t_order_item".to_string()],
            broadcast_tables: vec!["t_config".to_string()],
            default_data_source_name: None,
        }
    }

    #[test]
    fn oracle_queries() {
        logutil::init_test();

        let rule = ShardingRule::try_new(&order_config(), ["ds_0", "ds_1"]).unwrap();

        assert!(rule.contains("t_order"));
        assert!(rule.contains("T_ORDER"));
        assert!(!rule.contains("t_config"));

        assert!(rule.is_broadcast_table("t_config"));
        assert!(!rule.is_broadcast_table("t_order"));

        let binding = rule.find_binding_table_rule("t_order_item").unwrap();
        assert_eq!(
            vec!["t_order", "t_order_item"],
            binding.logic_tables().collect::<Vec<_>>()
        );
        assert!(rule.find_binding_table_rule("t_user").is_none());

        assert!(!rule.sharding_data_source_names().is_default_data_source_configured());
    }

    #[test]
    fn actual_table_lookup() {
        let rule = ShardingRule::try_new(&order_config(), ["ds_0", "ds_1"]).unwrap();

        let table_rule = rule.find_table_rule_by_actual_table("t_order_1").unwrap();
        assert_eq!("t_order", table_rule.logic_table());
        assert_eq!("t_order_item", rule.logic_table_name("t_order_item_0"));
        assert_eq!("t_user", rule.logic_table_name("t_user"));
        assert_eq!("t_unknown_0", rule.logic_table_name("t_unknown_0"));
    }

    #[test]
    fn default_table_rule_uses_all_data_sources() {
        let rule = ShardingRule::try_new(&order_config(), ["ds_0", "ds_1"]).unwrap();
        let table_rule = rule.find_table_rule("t_user").unwrap();
        assert_eq!(2, table_rule.actual_data_nodes().len());
    }

    #[test]
    fn duplicate_logic_table() {
        let mut config = order_config();
        config.tables.push(TableRuleConfig::new("T_Order", None));
        let err = ShardingRule::try_new(&config, ["ds_0"]).unwrap_err();
        assert!(matches!(err, RuleError::DuplicateLogicTable(_)));
    }

    #[test]
    fn binding_group_unknown_table() {
        let mut config = order_config();
        config.binding_table_groups = vec!["t_order, t_missing".to_string()];
        let err = ShardingRule::try_new(&config, ["ds_0"]).unwrap_err();
        assert!(matches!(err, RuleError::MissingTableRule(name) if name == "t_missing"));
    }

    #[test]
    fn binding_group_empty() {
        let mut config = order_config();
        config.binding_table_groups = vec![" , ".to_string()];
        let err = ShardingRule::try_new(&config, ["ds_0"]).unwrap_err();
        assert!(matches!(err, RuleError::EmptyBindingGroup));
    }

    #[test]
    fn non_ascii_table_names() {
        let config = ShardingRuleConfig {
            tables: vec![
                TableRuleConfig::new("T_ÉTAT", Some("ds_0.T_ÉTAT_0")),
                TableRuleConfig::new("T_ÉTAPE", Some("ds_0.T_ÉTAPE_0")),
            ],
            binding_table_groups: vec!["T_ÉTAT, T_ÉTAPE".to_string()],
            broadcast_tables: vec!["T_ÉVÉNEMENT".to_string()],
            default_data_source_name: None,
        };
        let rule = ShardingRule::try_new(&config, ["ds_0", "ds_1"]).unwrap();

        for name in ["T_ÉVÉNEMENT", "t_événement"] {
            assert!(rule.is_broadcast_table(name), "{name}");
        }
        for name in ["T_ÉTAT", "t_état"] {
            assert!(rule.contains(name), "{name}");
            assert!(rule.find_binding_table_rule(name).is_some(), "{name}");
        }
        assert_eq!("T_ÉTAPE", rule.logic_table_name("t_étape_0"));
    }

    #[test]
    fn from_json() {
        let json = r#"{
            "tables": [
                {"logic_table": "t_order", "actual_data_nodes": "ds.t_order_${0..3}"}
            ],
            "broadcast_tables": ["t_dict"],
            "default_data_source_name": "ds"
        }"#;

        let rule = ShardingRule::from_json(json, ["ds", "ds_archive"]).unwrap();
        assert!(rule.contains("t_order"));
        assert!(rule.is_broadcast_table("T_DICT"));
        assert!(rule.sharding_data_source_names().is_default_data_source_configured());
        assert_eq!("t_order", rule.logic_table_name("t_order_3"));
    }

    #[test]
    fn from_json_malformed() {
        let err = ShardingRule::from_json("{\"tables\": 4}", ["ds"]).unwrap_err();
        assert!(matches!(err, RuleError::Json(_)));
    }
}
