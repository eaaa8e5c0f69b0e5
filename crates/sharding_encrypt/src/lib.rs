//! Column level encryption lookups.
//!
//! The engine only answers which encryptor, if any, is responsible for a
//! logic column. Algorithms live behind the `ShardingEncryptor` trait.
pub mod config;
pub mod encryptor;
pub mod engine;
pub mod errors;
pub mod strategy;

pub use encryptor::{Md5Encryptor, ShardingEncryptor};
pub use engine::ShardingEncryptorEngine;
pub use strategy::ShardingEncryptorStrategy;
