use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::CacheOperations;

/// Cache en memoria compartido entre servicios
///
/// Guarda los valores serializados como JSON, igual que harían en un
/// almacén externo, para que el tipo leído pueda diferir del escrito.
#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl CacheOperations for MemoryCache {
    async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let entries = self.entries.read().await;

        match entries.get(key) {
            Some(value) => {
                debug!("📥 Cache HIT para clave: {}", key);
                match serde_json::from_str(value) {
                    Ok(deserialized) => Ok(Some(deserialized)),
                    Err(e) => {
                        warn!("⚠️ Error leyendo cache para clave {}: {}", key, e);
                        Ok(None)
                    }
                }
            }
            None => {
                debug!("❌ Cache MISS para clave: {}", key);
                Ok(None)
            }
        }
    }

    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T) -> Result<()> {
        let serialized = serde_json::to_string(value)?;

        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), serialized);
        debug!("💾 Cache SET para clave: {}", key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        let removed = entries.remove(key).is_some();
        debug!("🗑️ Cache DELETE para clave: {} (eliminada: {})", key, removed);
        Ok(())
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<usize> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - entries.len();
        debug!(
            "🗑️ Cache DELETE por prefijo: {} (eliminadas: {})",
            prefix, removed
        );
        Ok(removed)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(key))
    }

    async fn clear(&self) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.clear();
        debug!("🧹 Cache limpiado completamente");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_delete() {
        let cache = MemoryCache::new();

        cache.set("k:1", &vec![1, 2, 3]).await.unwrap();
        let value: Option<Vec<i32>> = cache.get("k:1").await.unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));

        cache.delete("k:1").await.unwrap();
        assert!(!cache.exists("k:1").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_prefix() {
        let cache = MemoryCache::new();
        cache.set("a:1", &1).await.unwrap();
        cache.set("a:2", &2).await.unwrap();
        cache.set("b:1", &3).await.unwrap();

        let removed = cache.delete_prefix("a:").await.unwrap();
        assert_eq!(removed, 2);
        assert!(cache.exists("b:1").await.unwrap());
    }
}
