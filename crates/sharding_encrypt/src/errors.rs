#[derive(Debug, thiserror::Error)]
pub enum EncryptError {
    #[error("Unknown encryptor type '{0}'")]
    UnknownEncryptorType(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = EncryptError> = std::result::Result<T, E>;
