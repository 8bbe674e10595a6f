//! Servicio de autenticación
//!
//! Login y logout contra el backend, más la resolución de la sesión
//! activa a partir del token almacenado.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::session::{decode_session, session_from_value, Session};
use crate::client::ApiClient;
use crate::utils::errors::ApiResult;

/// Credenciales de login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub rut: String,
    pub password: String,
}

pub struct AuthService {
    api: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Iniciar sesión y almacenar el token
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<Session> {
        let body: Value = self
            .api
            .post_public("/auth/login", credentials, "Error al iniciar sesión")
            .await?;

        if let Some(token) = body.get("access_token").and_then(Value::as_str) {
            self.api.tokens().set(token).await;
        }

        // Backend nuevo: { access_token, user: {...} }; backend viejo: el
        // usuario directo en la raíz
        let user = body.get("user").unwrap_or(&body);
        let mut session = session_from_value(user);

        if session.id.is_empty() {
            if let Some(decoded) = self.current_session().await {
                session = decoded;
            }
        }

        Ok(session)
    }

    /// Cerrar sesión; la limpieza local ocurre aunque el backend falle
    pub async fn logout(&self) {
        if let Err(e) = self
            .api
            .post_empty("/auth/logout", "Error al cerrar sesión")
            .await
        {
            warn!("⚠️ Error en logout del servidor, limpiando sesión local: {}", e);
        }

        self.api.tokens().clear().await;
        self.api.cache().clear().await;
    }

    /// Sesión activa según el token almacenado, sin ir a la red
    ///
    /// Un token ilegible se evicta en silencio: el usuario queda como
    /// no autenticado en la siguiente acción protegida.
    pub async fn current_session(&self) -> Option<Session> {
        let token = self.api.tokens().get().await?;

        match decode_session(&token) {
            Some(session) => Some(session),
            None => {
                self.api.tokens().clear().await;
                None
            }
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current_session().await.is_some()
    }

    pub async fn is_admin(&self) -> bool {
        self.current_session()
            .await
            .map(|s| s.is_admin())
            .unwrap_or(false)
    }

    pub async fn is_worker(&self) -> bool {
        self.current_session()
            .await
            .map(|s| s.is_worker())
            .unwrap_or(false)
    }
}
