#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid data node '{0}', expected '<data_source>.<table>'")]
    InvalidDataNode(String),

    #[error("Duplicate table rule for logic table '{0}'")]
    DuplicateLogicTable(String),

    #[error("Cannot find table rule with logic table '{0}'")]
    MissingTableRule(String),

    #[error("Binding table group is empty")]
    EmptyBindingGroup,

    #[error("Invalid inline expression '{expression}': {reason}")]
    InvalidInlineExpression { expression: String, reason: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = RuleError> = std::result::Result<T, E>;
