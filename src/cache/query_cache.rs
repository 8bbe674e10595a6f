use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::{dependents_of, CacheOperations, MemoryCache, Resource};

/// Prefijo de todas las claves del cache
const KEY_PREFIX: &str = "taller_gestion";

/// Cache de consultas keyed por (recurso, parámetros)
///
/// Espejo read-through / write-invalidate de los datos del backend: las
/// entradas solo se evictan por invalidación tras una escritura o al
/// cerrar sesión, nunca por borrado explícito.
#[derive(Clone, Default)]
pub struct QueryCache {
    store: MemoryCache,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn make_key(resource: Resource, params: &str) -> String {
        format!("{}:{}:{}", KEY_PREFIX, resource.as_str(), params)
    }

    fn group_prefix(resource: Resource) -> String {
        format!("{}:{}:", KEY_PREFIX, resource.as_str())
    }

    pub async fn get<T: DeserializeOwned>(&self, resource: Resource, params: &str) -> Option<T> {
        self.store
            .get(&Self::make_key(resource, params))
            .await
            .unwrap_or(None)
    }

    pub async fn set<T: Serialize + Send + Sync>(
        &self,
        resource: Resource,
        params: &str,
        value: &T,
    ) {
        // Un fallo serializando solo deja la entrada sin cachear
        let _ = self.store.set(&Self::make_key(resource, params), value).await;
    }

    pub async fn contains(&self, resource: Resource, params: &str) -> bool {
        self.store
            .exists(&Self::make_key(resource, params))
            .await
            .unwrap_or(false)
    }

    /// Invalidar el grupo propio de un recurso
    pub async fn invalidate(&self, resource: Resource) {
        let _ = self.store.delete_prefix(&Self::group_prefix(resource)).await;
    }

    /// Invalidar todos los grupos dependientes tras una escritura exitosa
    pub async fn invalidate_after_write(&self, resource: Resource) {
        for dep in dependents_of(resource) {
            debug!(
                "🗑️ Invalidando grupo '{}' tras escritura en '{}'",
                dep.as_str(),
                resource.as_str()
            );
            self.invalidate(*dep).await;
        }
    }

    /// Vaciar el cache completo (logout)
    pub async fn clear(&self) {
        let _ = self.store.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lectura_y_escritura_por_grupo() {
        let cache = QueryCache::new();
        cache
            .set(Resource::Clients, "", &vec!["c1".to_string()])
            .await;
        cache.set(Resource::Clients, "id-7", &"c7".to_string()).await;

        let lista: Option<Vec<String>> = cache.get(Resource::Clients, "").await;
        assert_eq!(lista, Some(vec!["c1".to_string()]));
        assert!(cache.contains(Resource::Clients, "id-7").await);
    }

    #[tokio::test]
    async fn test_invalidacion_completa_tras_escritura() {
        let cache = QueryCache::new();
        cache.set(Resource::Purchases, "", &1).await;
        cache.set(Resource::Products, "", &2).await;
        cache.set(Resource::Products, "search", &3).await;
        cache.set(Resource::Reports, "low-stock", &4).await;
        cache.set(Resource::Clients, "", &5).await;

        // Una compra invalida purchases, products y reports, pero no clients
        cache.invalidate_after_write(Resource::Purchases).await;

        assert!(!cache.contains(Resource::Purchases, "").await);
        assert!(!cache.contains(Resource::Products, "").await);
        assert!(!cache.contains(Resource::Products, "search").await);
        assert!(!cache.contains(Resource::Reports, "low-stock").await);
        assert!(cache.contains(Resource::Clients, "").await);
    }

    #[tokio::test]
    async fn test_vehiculos_invalidan_ordenes_de_trabajo() {
        let cache = QueryCache::new();
        cache.set(Resource::Vehicles, "", &1).await;
        cache.set(Resource::WorkOrders, "", &2).await;

        cache.invalidate_after_write(Resource::Vehicles).await;

        assert!(!cache.contains(Resource::Vehicles, "").await);
        assert!(!cache.contains(Resource::WorkOrders, "").await);
    }
}
