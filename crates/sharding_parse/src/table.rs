/// A table registered into a statement.
///
/// Name and alias keep the casing they had in the SQL text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    pub name: String,
    pub alias: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>, alias: Option<String>) -> Self {
        Table {
            name: name.into(),
            alias,
        }
    }
}

/// Tables of a statement in registration order.
///
/// The same table may appear more than once (self joins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
    tables: Vec<Table>,
}

impl Tables {
    pub fn add(&mut self, table: Table) {
        self.tables.push(table);
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    /// Returns true if every registered table refers to the same name.
    pub fn is_single_table(&self) -> bool {
        self.table_names().len() == 1
    }

    /// Distinct table names in registration order.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for table in &self.tables {
            if !names.iter().any(|n| n.eq_ignore_ascii_case(&table.name)) {
                names.push(&table.name);
            }
        }
        names
    }

    /// Find a table by alias, falling back to the table name.
    pub fn find(&self, name_or_alias: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|t| {
                t.alias
                    .as_deref()
                    .is_some_and(|a| a.eq_ignore_ascii_case(name_or_alias))
            })
            .or_else(|| {
                self.tables
                    .iter()
                    .find(|t| t.name.eq_ignore_ascii_case(name_or_alias))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> Tables {
        let mut tables = Tables::default();
        tables.add(Table::new("t_order", Some("o".to_string())));
        tables.add(Table::new("t_order_item", Some("t_order".to_string())));
        tables.add(Table::new("T_ORDER", None));
        tables
    }

    #[test]
    fn names() {
        let tables = tables();
        assert_eq!(3, tables.len());
        assert_eq!(vec!["t_order", "t_order_item"], tables.table_names());
        assert!(!tables.is_single_table());
    }

    #[test]
    fn single_table_with_self_join() {
        let mut tables = Tables::default();
        tables.add(Table::new("t_order", Some("a".to_string())));
        tables.add(Table::new("t_order", Some("b".to_string())));
        assert!(tables.is_single_table());
    }

    #[test]
    fn find_prefers_alias() {
        let tables = tables();
        assert_eq!("t_order_item", tables.find("t_order").unwrap().name);
        assert_eq!("t_order", tables.find("O").unwrap().name);
        assert!(tables.find("t_user").is_none());
    }
}
