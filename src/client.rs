//! Cliente HTTP del API del taller
//!
//! Este módulo contiene el cliente compartido por todos los servicios
//! de recursos: cabeceras de autenticación, lecturas con cache e
//! invalidación de grupos dependientes tras cada escritura.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::auth::token_store::TokenStore;
use crate::cache::{QueryCache, Resource};
use crate::config::api_url::UrlResolver;
use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::{ApiError, ApiResult};

/// Cliente HTTP para el backend del taller
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    resolver: UrlResolver,
    tokens: TokenStore,
    cache: QueryCache,
}

impl ApiClient {
    /// Crear el cliente con la configuración del entorno
    pub fn new(config: &EnvironmentConfig, tokens: TokenStore) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            resolver: UrlResolver::from_config(config),
            tokens,
            cache: QueryCache::new(),
        })
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn resolve(&self, endpoint: &str) -> String {
        self.resolver.resolve(endpoint)
    }

    /// Cabeceras comunes: content-type y bearer cuando hay sesión
    ///
    /// Sin token las cabeceras salen sin Authorization; el backend es
    /// quien rechaza las rutas protegidas.
    pub async fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.tokens.get().await {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, value);
            }
        }

        headers
    }

    /// GET directo, sin cache
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        fallback: &str,
    ) -> ApiResult<T> {
        let url = self.resolve(endpoint);
        let res = self
            .http
            .get(&url)
            .headers(self.auth_headers().await)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(error_from_response(res, fallback).await);
        }

        Ok(res.json().await?)
    }

    /// Lectura con cache keyed por (recurso, parámetros)
    pub async fn get_cached<T: DeserializeOwned + Serialize + Send + Sync>(
        &self,
        resource: Resource,
        params: &str,
        endpoint: &str,
        fallback: &str,
    ) -> ApiResult<T> {
        if let Some(cached) = self.cache.get::<T>(resource, params).await {
            return Ok(cached);
        }

        let fresh: T = self.get_json(endpoint, fallback).await?;
        self.cache.set(resource, params, &fresh).await;
        Ok(fresh)
    }

    /// Lectura "opcional": ante cualquier fallo resuelve a lista vacía
    ///
    /// Disponibilidad sobre consistencia para las vistas de listado que
    /// no deben dejar la página en blanco por un backend intermitente.
    pub async fn get_list_opcional<T: DeserializeOwned + Serialize + Send + Sync>(
        &self,
        resource: Resource,
        params: &str,
        endpoint: &str,
    ) -> Vec<T> {
        match self
            .get_cached::<Vec<T>>(resource, params, endpoint, "")
            .await
        {
            Ok(list) => list,
            Err(e) => {
                debug!(
                    "⚠️ Lista opcional '{}' no disponible: {}",
                    resource.as_str(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// POST de un recurso nuevo; invalida los grupos dependientes
    pub async fn create<B, T>(&self, resource: Resource, body: &B, fallback: &str) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.resolve(&resource.endpoint());
        let res = self
            .http
            .post(&url)
            .headers(self.auth_headers().await)
            .json(body)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(error_from_response(res, fallback).await);
        }

        let created: T = res.json().await?;
        self.cache.invalidate_after_write(resource).await;
        Ok(created)
    }

    /// PATCH parcial de un recurso existente
    pub async fn update<B, T>(
        &self,
        resource: Resource,
        id: &str,
        body: &B,
        fallback: &str,
    ) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let endpoint = format!("{}/{}", resource.endpoint(), id);
        self.patch_endpoint(resource, &endpoint, body, fallback).await
    }

    /// PATCH a una ruta arbitraria de un recurso (p. ej. change-password)
    pub async fn patch_endpoint<B, T>(
        &self,
        resource: Resource,
        endpoint: &str,
        body: &B,
        fallback: &str,
    ) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.resolve(endpoint);
        let res = self
            .http
            .patch(&url)
            .headers(self.auth_headers().await)
            .json(body)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(error_from_response(res, fallback).await);
        }

        let updated: T = res.json().await?;
        self.cache.invalidate_after_write(resource).await;
        Ok(updated)
    }

    /// DELETE tolerante a respuestas sin cuerpo (204)
    pub async fn delete(
        &self,
        resource: Resource,
        id: &str,
        fallback: &str,
    ) -> ApiResult<Option<Value>> {
        let url = self.resolve(&format!("{}/{}", resource.endpoint(), id));
        let res = self
            .http
            .delete(&url)
            .headers(self.auth_headers().await)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(error_from_response(res, fallback).await);
        }

        // Solo intentar parsear JSON si el content-type lo declara
        let is_json = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);

        let body = if is_json { res.json().await.ok() } else { None };

        self.cache.invalidate_after_write(resource).await;
        Ok(body)
    }

    /// POST sin cabecera de autorización (login)
    pub async fn post_public<B, T>(&self, endpoint: &str, body: &B, fallback: &str) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.resolve(endpoint);
        let res = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(error_from_response(res, fallback).await);
        }

        Ok(res.json().await?)
    }

    /// POST sin cuerpo, con autorización (logout)
    pub async fn post_empty(&self, endpoint: &str, fallback: &str) -> ApiResult<()> {
        let url = self.resolve(endpoint);
        let res = self
            .http
            .post(&url)
            .headers(self.auth_headers().await)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(error_from_response(res, fallback).await);
        }

        Ok(())
    }
}

/// Extraer el mensaje de error del cuerpo de una respuesta no exitosa
///
/// Nunca produce un error de parseo secundario: sin cuerpo JSON legible
/// se usa el mensaje de respaldo propio del recurso.
pub(crate) async fn error_from_response(res: Response, fallback: &str) -> ApiError {
    let status = res.status();

    let message = match res.json::<Value>().await {
        Ok(body) => match body.get("message") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            // Un 400 puede traer una lista de mensajes de validación
            Some(Value::Array(parts)) => {
                let joined: Vec<&str> = parts.iter().filter_map(Value::as_str).collect();
                if joined.is_empty() {
                    fallback.to_string()
                } else {
                    joined.join(", ")
                }
            }
            _ => fallback.to_string(),
        },
        Err(_) => fallback.to_string(),
    };

    ApiError::Api { status, message }
}
