//! Resolución de URLs del API
//!
//! Este módulo construye la URL concreta de cada endpoint lógico según
//! el modo de ejecución: gateway local en desarrollo, base absoluta en
//! producción.

use super::environment::EnvironmentConfig;

/// Resolutor de rutas lógicas del API
#[derive(Debug, Clone)]
pub struct UrlResolver {
    base: String,
}

impl UrlResolver {
    /// Elegir la base según el modo de ejecución
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        let base = if config.is_development() {
            config.dev_gateway_url.clone()
        } else {
            config.api_base_url.clone()
        };
        Self::with_base(base)
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Resolver un endpoint lógico a una URL completa
    ///
    /// Idempotente: un endpoint ya absoluto se devuelve sin tocar, porque
    /// los servicios pasan tanto rutas relativas como URLs ya resueltas.
    pub fn resolve(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }

        // Asegurar que el endpoint comience con /
        let normalized = if endpoint.starts_with('/') {
            endpoint.to_string()
        } else {
            format!("/{}", endpoint)
        };

        format!("{}{}", self.base, normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_normaliza_la_barra_inicial() {
        let resolver = UrlResolver::with_base("http://localhost:3000/api");
        assert_eq!(resolver.resolve("/products"), resolver.resolve("products"));
        assert_eq!(
            resolver.resolve("products"),
            "http://localhost:3000/api/products"
        );
    }

    #[test]
    fn test_resolve_es_idempotente() {
        let resolver = UrlResolver::with_base("http://localhost:3000/api/");
        let once = resolver.resolve("/clients");
        let twice = resolver.resolve(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_base_segun_modo() {
        let mut config = EnvironmentConfig::from_env();
        config.environment = "production".to_string();
        config.api_base_url = "https://api.taller.cl/api".to_string();
        let resolver = UrlResolver::from_config(&config);
        assert_eq!(
            resolver.resolve("work-orders"),
            "https://api.taller.cl/api/work-orders"
        );
    }
}
