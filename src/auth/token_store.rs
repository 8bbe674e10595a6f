//! Almacén del token de sesión
//!
//! Única pieza de estado durable del cliente: el token bearer. Se fija
//! al iniciar sesión y se limpia al cerrar sesión o cuando el token no
//! se puede decodificar. El almacén se inyecta explícitamente en el
//! cliente del API en lugar de leerse de un global ambiente.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

#[derive(Clone, Default)]
pub struct TokenStore {
    token: Arc<RwLock<Option<String>>>,
    persist_path: Option<PathBuf>,
}

impl TokenStore {
    /// Almacén volátil, sin persistencia
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Almacén según la configuración: respaldado en archivo si
    /// `TOKEN_FILE` está definido, volátil en caso contrario
    pub fn from_config(config: &crate::config::environment::EnvironmentConfig) -> Self {
        match &config.token_file {
            Some(path) => Self::with_file(path.clone()),
            None => Self::in_memory(),
        }
    }

    /// Almacén respaldado en un archivo; carga el token persistido si existe
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let initial = std::fs::read_to_string(&path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            token: Arc::new(RwLock::new(initial)),
            persist_path: Some(path),
        }
    }

    pub async fn get(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn set(&self, token: impl Into<String>) {
        let token = token.into();
        if let Some(path) = &self.persist_path {
            if let Err(e) = std::fs::write(path, &token) {
                warn!("⚠️ No se pudo persistir el token en {:?}: {}", path, e);
            }
        }
        *self.token.write().await = Some(token);
    }

    pub async fn clear(&self) {
        if let Some(path) = &self.persist_path {
            let _ = std::fs::remove_file(path);
        }
        *self.token.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ciclo_de_vida() {
        let store = TokenStore::in_memory();
        assert_eq!(store.get().await, None);

        store.set("abc.def.ghi").await;
        assert_eq!(store.get().await, Some("abc.def.ghi".to_string()));

        store.clear().await;
        assert_eq!(store.get().await, None);
    }

    #[tokio::test]
    async fn test_persistencia_en_archivo() {
        let dir = std::env::temp_dir().join("taller_gestion_token_test");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("access_token");
        let _ = std::fs::remove_file(&path);

        let store = TokenStore::with_file(&path);
        store.set("tok.en.123").await;

        // Una instancia nueva recarga el token persistido
        let reloaded = TokenStore::with_file(&path);
        assert_eq!(reloaded.get().await, Some("tok.en.123".to_string()));

        reloaded.clear().await;
        assert!(!path.exists());
    }
}
