//! Utilidades de validación y normalización
//!
//! Este módulo contiene funciones helper para normalizar datos
//! antes de enviarlos al backend.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    static ref NON_DIGITS: Regex = Regex::new(r"[^0-9]").unwrap();
    static ref NON_RUT: Regex = Regex::new(r"[^0-9kK\-]").unwrap();
}

/// Prefijo nacional fijo para teléfonos móviles chilenos
pub const PHONE_PREFIX: &str = "+569";

/// Normalizar una patente: mayúsculas, sin espacios ni separadores
pub fn normalize_patente(value: &str) -> String {
    value
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Normalizar un RUT: sin caracteres extraños, dígito verificador en mayúscula
pub fn normalize_rut(value: &str) -> String {
    NON_RUT.replace_all(value.trim(), "").to_uppercase()
}

/// Reconstruir un teléfono a partir del prefijo nacional fijo y los
/// últimos 8 dígitos ingresados por el usuario
pub fn normalize_telefono(value: &str) -> String {
    let digits = NON_DIGITS.replace_all(value, "");
    if digits.is_empty() {
        return String::new();
    }
    let subscriber = if digits.len() > 8 {
        &digits[digits.len() - 8..]
    } else {
        digits.as_ref()
    };
    format!("{}{}", PHONE_PREFIX, subscriber)
}

/// Formatear un teléfono para mostrar: "+56 9 1234 5678"
pub fn format_telefono(value: &str) -> String {
    let digits = NON_DIGITS.replace_all(value, "").to_string();

    // +56912345678 -> 11 dígitos empezando con 569
    let subscriber = if digits.len() == 11 && digits.starts_with("569") {
        &digits[3..]
    } else if digits.len() == 9 && digits.starts_with('9') {
        &digits[1..]
    } else if digits.len() == 8 {
        &digits[..]
    } else {
        return value.to_string();
    };

    format!("+56 9 {} {}", &subscriber[..4], &subscriber[4..])
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_patente() {
        assert_eq!(normalize_patente(" ab12cd "), "AB12CD");
        assert_eq!(normalize_patente("AB-12-CD"), "AB12CD");
        assert_eq!(normalize_patente("gh·js 82"), "GHJS82");
    }

    #[test]
    fn test_normalize_rut() {
        assert_eq!(normalize_rut(" 12.345.678-k "), "12345678-K");
        assert_eq!(normalize_rut("11111111-1"), "11111111-1");
    }

    #[test]
    fn test_normalize_telefono() {
        assert_eq!(normalize_telefono("12345678"), "+56912345678");
        assert_eq!(normalize_telefono("+56 9 1234 5678"), "+56912345678");
        assert_eq!(normalize_telefono("912345678"), "+56912345678");
        assert_eq!(normalize_telefono(""), "");
    }

    #[test]
    fn test_format_telefono() {
        assert_eq!(format_telefono("+56912345678"), "+56 9 1234 5678");
        assert_eq!(format_telefono("912345678"), "+56 9 1234 5678");
        assert_eq!(format_telefono("12345678"), "+56 9 1234 5678");
        assert_eq!(format_telefono("123"), "123");
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Pastillas").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
    }
}
