//! Resolución local de la sesión
//!
//! Este módulo decodifica el payload del token almacenado sin llamar al
//! servidor. Es seguro porque las llamadas siguientes al API fallan
//! igual si el token es inválido o expiró; la expiración no se verifica
//! en el cliente.

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Roles del sistema
///
/// Los nombres heredados en español se normalizan aquí, una sola vez,
/// al decodificar la sesión.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Worker,
}

impl UserRole {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "ADMIN" | "administrador" => UserRole::Admin,
            "WORKER" | "mecanico" => UserRole::Worker,
            // Rol desconocido: privilegio mínimo
            _ => UserRole::Worker,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Worker => "WORKER",
        }
    }
}

/// Sesión activa derivada del token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub rut: String,
    pub nombre: String,
    pub role: UserRole,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Los administradores también cuentan como mecánicos
    pub fn is_worker(&self) -> bool {
        self.role == UserRole::Worker || self.is_admin()
    }
}

/// Decodificar el payload del token (sin verificar la firma)
///
/// Función pura: nunca falla con pánico; un token ilegible produce
/// `None` y es el llamador quien decide evictar el almacén.
pub fn decode_session(token: &str) -> Option<Session> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(parts[1])
        .or_else(|_| URL_SAFE.decode(parts[1]))
        .ok()?;
    let payload: Value = serde_json::from_slice(&bytes).ok()?;
    if !payload.is_object() {
        return None;
    }

    Some(session_from_value(&payload))
}

/// Mapear los campos de un payload o de un objeto usuario a una sesión
///
/// Un payload estructuralmente válido pero incompleto igual produce una
/// sesión; un rol ausente queda como WORKER.
pub fn session_from_value(payload: &Value) -> Session {
    Session {
        id: field_as_string(payload, "sub")
            .or_else(|| field_as_string(payload, "id"))
            .unwrap_or_default(),
        rut: field_as_string(payload, "rut").unwrap_or_default(),
        nombre: field_as_string(payload, "nombre").unwrap_or_default(),
        role: payload
            .get("role")
            .and_then(Value::as_str)
            .map(UserRole::from_raw)
            .unwrap_or(UserRole::Worker),
    }
}

fn field_as_string(payload: &Value, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    fn token_for(claims: &Value) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(b"secreto-de-prueba"),
        )
        .unwrap()
    }

    #[test]
    fn test_round_trip_del_token() {
        let token = token_for(&json!({
            "sub": "u1",
            "rut": "11111111-1",
            "nombre": "Ana",
            "role": "ADMIN",
        }));

        let session = decode_session(&token).unwrap();
        assert_eq!(session.id, "u1");
        assert_eq!(session.rut, "11111111-1");
        assert_eq!(session.nombre, "Ana");
        assert_eq!(session.role, UserRole::Admin);
    }

    #[test]
    fn test_token_malformado_no_falla() {
        assert!(decode_session("").is_none());
        assert!(decode_session("no-es-un-token").is_none());
        assert!(decode_session("a.b").is_none());
        assert!(decode_session("a.!!!no-base64!!!.c").is_none());
    }

    #[test]
    fn test_roles_heredados() {
        for (raw, expected) in [
            ("ADMIN", UserRole::Admin),
            ("administrador", UserRole::Admin),
            ("WORKER", UserRole::Worker),
            ("mecanico", UserRole::Worker),
            ("gerente", UserRole::Worker),
        ] {
            assert_eq!(UserRole::from_raw(raw), expected, "rol {}", raw);
        }
    }

    #[test]
    fn test_payload_incompleto_produce_sesion() {
        // Sin rol: privilegio mínimo, nunca ADMIN
        let token = token_for(&json!({ "sub": 42, "nombre": "Pedro" }));
        let session = decode_session(&token).unwrap();
        assert_eq!(session.id, "42");
        assert_eq!(session.role, UserRole::Worker);
        assert!(!session.is_admin());
        assert!(session.is_worker());
    }
}
