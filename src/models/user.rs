use serde::{Deserialize, Serialize};
use validator::Validate;

/// Cuenta de usuario del sistema
///
/// Distinta de la sesión: la sesión es la vista decodificada del
/// usuario autenticado actual.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub rut: String,
    pub nombre: String,
    pub role: String,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserDTO {
    #[validate(length(min = 1, message = "El RUT es obligatorio"))]
    pub rut: String,
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub nombre: String,
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordDTO {
    #[serde(rename = "currentPassword")]
    pub current_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}
