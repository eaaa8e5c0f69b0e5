use tracing::warn;

/// Data sources known to the sharding rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardingDataSourceNames {
    data_source_names: Vec<String>,
    default_data_source_name: Option<String>,
}

impl ShardingDataSourceNames {
    /// Create the set of data source names.
    ///
    /// With exactly one data source, that data source is always the default
    /// regardless of what's configured.
    pub fn new<S>(data_source_names: S, configured_default: Option<String>) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in data_source_names {
            let name = name.into();
            if !names.contains(&name) {
                names.push(name);
            }
        }

        let default_data_source_name = match names.as_slice() {
            [only] => Some(only.clone()),
            _ => configured_default,
        };

        if let Some(default) = &default_data_source_name {
            if !names.contains(default) {
                warn!(%default, "default data source is not a configured data source");
            }
        }

        ShardingDataSourceNames {
            data_source_names: names,
            default_data_source_name,
        }
    }

    pub fn data_source_names(&self) -> &[String] {
        &self.data_source_names
    }

    pub fn default_data_source_name(&self) -> Option<&str> {
        self.default_data_source_name.as_deref()
    }

    pub fn contains(&self, data_source_name: &str) -> bool {
        self.data_source_names.iter().any(|n| n == data_source_name)
    }

    /// Returns true if the default data source is one of the configured data
    /// sources.
    pub fn is_default_data_source_configured(&self) -> bool {
        self.default_data_source_name
            .as_deref()
            .is_some_and(|default| self.contains(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_data_source_is_default() {
        let names = ShardingDataSourceNames::new(["ds"], None);
        assert_eq!(Some("ds"), names.default_data_source_name());
        assert!(names.is_default_data_source_configured());

        let names = ShardingDataSourceNames::new(["ds"], Some("other".to_string()));
        assert_eq!(Some("ds"), names.default_data_source_name());
    }

    #[test]
    fn multiple_data_sources() {
        let names = ShardingDataSourceNames::new(["ds_0", "ds_1"], None);
        assert_eq!(None, names.default_data_source_name());
        assert!(!names.is_default_data_source_configured());

        let names = ShardingDataSourceNames::new(["ds_0", "ds_1"], Some("ds_1".to_string()));
        assert!(names.is_default_data_source_configured());

        let names = ShardingDataSourceNames::new(["ds_0", "ds_1"], Some("ds_x".to_string()));
        assert_eq!(Some("ds_x"), names.default_data_source_name());
        assert!(!names.is_default_data_source_configured());
    }

    #[test]
    fn duplicates_removed() {
        let names = ShardingDataSourceNames::new(["ds_0", "ds_1", "ds_0"], None);
        assert_eq!(&["ds_0".to_string(), "ds_1".to_string()], names.data_source_names());
    }
}
