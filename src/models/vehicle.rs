use serde::{Deserialize, Serialize};
use validator::Validate;

/// Vehículo de un cliente
///
/// La patente viaja siempre normalizada (mayúsculas, sin separadores);
/// su unicidad la garantiza el backend y aparece como error 409.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub patente: String,
    pub marca: String,
    pub modelo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anio: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub cliente_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kilometraje: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVehicleDTO {
    #[validate(length(min = 1, message = "La patente es obligatoria"))]
    pub patente: String,
    pub marca: String,
    pub modelo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anio: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub cliente_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kilometraje: Option<i64>,
}

/// Campos parciales para PATCH
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateVehicleDTO {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patente: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modelo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anio: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kilometraje: Option<i64>,
}
