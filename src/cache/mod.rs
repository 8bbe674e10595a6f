//! Cache
//!
//! Este módulo contiene el cache de consultas del cliente y la
//! política de invalidación entre recursos.

pub mod invalidation;
pub mod memory_cache;
pub mod query_cache;

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

pub use invalidation::{dependents_of, Resource};
pub use memory_cache::MemoryCache;
pub use query_cache::QueryCache;

/// Operaciones de cache
#[async_trait::async_trait]
pub trait CacheOperations {
    async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;
    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
    async fn delete_prefix(&self, prefix: &str) -> Result<usize>;
    async fn exists(&self, key: &str) -> Result<bool>;
    async fn clear(&self) -> Result<()>;
}
