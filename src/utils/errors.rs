//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la capa de acceso a datos
//! y los helpers para reinterpretarlos por recurso.

use reqwest::StatusCode;
use thiserror::Error;

/// Errores de la capa de acceso a datos
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl ApiError {
    /// Construir un error a partir de un status HTTP y un mensaje
    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Api {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
            ApiError::Validation(_) => None,
        }
    }

    /// El backend rechazó la escritura por clave natural duplicada
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(StatusCode::CONFLICT)
    }

    /// Un 409 o 500 en un DELETE sugiere una violación de integridad referencial
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::CONFLICT) | Some(StatusCode::INTERNAL_SERVER_ERROR)
        )
    }
}

/// Resultado tipado para operaciones de la capa de datos
pub type ApiResult<T> = Result<T, ApiError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> ApiError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    ApiError::Validation(errors)
}

/// Reemplazar un 409 por el mensaje de duplicado propio del recurso,
/// con preferencia sobre el mensaje crudo del backend
pub fn remap_conflict(err: ApiError, message: &str) -> ApiError {
    if err.is_conflict() {
        ApiError::api(StatusCode::CONFLICT, message)
    } else {
        err
    }
}

/// Reemplazar un 409/500 de un DELETE por la guía de integridad referencial
pub fn remap_integrity(err: ApiError, message: &str) -> ApiError {
    if err.is_integrity_violation() {
        let status = err.status().unwrap_or(StatusCode::CONFLICT);
        ApiError::api(status, message)
    } else {
        err
    }
}
