use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::config::EncryptRuleConfig;
use crate::encryptor::ShardingEncryptor;
use crate::errors::Result;
use crate::strategy::ShardingEncryptorStrategy;

/// Lookup from (logic table, column) to the encryptor for that column.
///
/// Immutable once built and safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct ShardingEncryptorEngine {
    /// Lowercased logic table -> (configured table name, strategy).
    strategies: BTreeMap<String, (String, ShardingEncryptorStrategy)>,
}

impl ShardingEncryptorEngine {
    /// An engine with no encrypted columns.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new<S>(strategies: S) -> Self
    where
        S: IntoIterator<Item = (String, ShardingEncryptorStrategy)>,
    {
        let strategies = strategies
            .into_iter()
            .map(|(table, strategy)| (table.to_lowercase(), (table, strategy)))
            .collect();
        ShardingEncryptorEngine { strategies }
    }

    pub fn try_from_config(config: &EncryptRuleConfig) -> Result<Self> {
        let strategies = config
            .tables
            .iter()
            .map(|(table, table_config)| {
                let strategy = ShardingEncryptorStrategy::try_from_config(table_config)?;
                Ok((table.clone(), strategy))
            })
            .collect::<Result<Vec<_>>>()?;

        let engine = Self::new(strategies);
        debug!(tables = engine.strategies.len(), "built sharding encryptor engine");

        Ok(engine)
    }

    /// Build an engine from a JSON encoded `EncryptRuleConfig`.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EncryptRuleConfig = serde_json::from_str(json)?;
        Self::try_from_config(&config)
    }

    /// Get the encryptor for a column in a logic table.
    ///
    /// Returns None if the column isn't encrypted.
    pub fn get_sharding_encryptor(
        &self,
        logic_table: &str,
        column: &str,
    ) -> Option<Arc<dyn ShardingEncryptor>> {
        let strategy = self.strategy(logic_table)?;
        if strategy.contains_column(column) {
            Some(strategy.encryptor().clone())
        } else {
            None
        }
    }

    pub fn get_assisted_query_column(&self, logic_table: &str, column: &str) -> Option<&str> {
        self.strategy(logic_table)?.assisted_query_column(column)
    }

    /// Returns true if the table has any assisted query columns configured.
    pub fn is_has_sharding_query_assisted_encryptor(&self, logic_table: &str) -> bool {
        self.strategy(logic_table)
            .is_some_and(|s| !s.assisted_query_columns().is_empty())
    }

    pub fn encrypt_table_names(&self) -> impl Iterator<Item = &str> {
        self.strategies.values().map(|(table, _)| table.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    fn strategy(&self, logic_table: &str) -> Option<&ShardingEncryptorStrategy> {
        self.strategies
            .get(&logic_table.to_lowercase())
            .map(|(_, strategy)| strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encryptor::Md5Encryptor;

    #[test]
    fn lookup_columns() {
        let engine = ShardingEncryptorEngine::new([(
            "t_order".to_string(),
            ShardingEncryptorStrategy::new(["status"], Arc::new(Md5Encryptor)),
        )]);

        let encryptor = engine.get_sharding_encryptor("t_order", "status").unwrap();
        assert_eq!("MD5", encryptor.encryptor_type());
        assert!(engine.get_sharding_encryptor("T_ORDER", "STATUS").is_some());
        assert!(engine.get_sharding_encryptor("t_order", "amount").is_none());
        assert!(engine.get_sharding_encryptor("t_order_1", "status").is_none());
    }

    #[test]
    fn empty_engine() {
        let engine = ShardingEncryptorEngine::empty();
        assert!(engine.is_empty());
        assert!(engine.get_sharding_encryptor("t_order", "status").is_none());
    }

    #[test]
    fn assisted_query_columns() {
        let engine = ShardingEncryptorEngine::new([
            (
                "t_user".to_string(),
                ShardingEncryptorStrategy::new(["pwd", "phone"], Arc::new(Md5Encryptor))
                    .with_assisted_query_columns(["pwd_assisted", "phone_assisted"]),
            ),
            (
                "t_order".to_string(),
                ShardingEncryptorStrategy::new(["status"], Arc::new(Md5Encryptor)),
            ),
        ]);

        assert_eq!(
            Some("phone_assisted"),
            engine.get_assisted_query_column("t_user", "phone")
        );
        assert_eq!(None, engine.get_assisted_query_column("t_order", "status"));
        assert!(engine.is_has_sharding_query_assisted_encryptor("t_user"));
        assert!(!engine.is_has_sharding_query_assisted_encryptor("t_order"));
        assert_eq!(
            vec!["t_order", "t_user"],
            engine.encrypt_table_names().collect::<Vec<_>>()
        );
    }

    #[test]
    fn from_json() {
        logutil::init_test();

        let json = r#"{
            "tables": {
                "t_order": {"columns": ["status"], "type": "MD5"}
            }
        }"#;
        let engine = ShardingEncryptorEngine::from_json(json).unwrap();
        let encryptor = engine.get_sharding_encryptor("t_order", "status").unwrap();
        assert_eq!(
            "098f6bcd4621d373cade4e832627b4f6",
            encryptor.encrypt("test").unwrap()
        );
    }

    #[test]
    fn from_json_unknown_type() {
        let json = r#"{"tables": {"t_order": {"columns": ["status"], "type": "XOR"}}}"#;
        let err = ShardingEncryptorEngine::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            crate::errors::EncryptError::UnknownEncryptorType(_)
        ));
    }
}
