use serde::{Deserialize, Serialize};
use validator::Validate;

use super::vehicle_model::VehicleModel;

/// Referencia de categoría embebida en un producto
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub nombre: String,
}

/// Producto del inventario
///
/// El stock solo se mueve de forma indirecta (compras, ventas,
/// consumo de órdenes de trabajo); el cliente nunca lo escribe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub nombre: String,
    #[serde(default)]
    pub marca: Option<String>,
    #[serde(default)]
    pub calidad: Option<String>,
    #[serde(default)]
    pub precio_venta: i64,
    #[serde(default)]
    pub stock_actual: i64,
    #[serde(default)]
    pub stock_minimo: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub categoria: Option<CategoryRef>,
    #[serde(
        default,
        rename = "modelosCompatibles",
        skip_serializing_if = "Option::is_none"
    )]
    pub modelos_compatibles: Option<Vec<VehicleModel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibilidades: Option<Vec<VehicleModel>>,
}

impl Product {
    /// El producto está en o bajo su stock mínimo
    pub fn is_low_stock(&self) -> bool {
        self.stock_actual <= self.stock_minimo
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductDTO {
    #[validate(length(min = 1, message = "El SKU es obligatorio"))]
    pub sku: String,
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calidad: Option<String>,
    pub precio_venta: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_actual: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_minimo: Option<i64>,
    #[serde(
        default,
        rename = "categoriaId",
        skip_serializing_if = "Option::is_none"
    )]
    pub categoria_id: Option<String>,
    #[serde(
        default,
        rename = "modelosCompatiblesIds",
        skip_serializing_if = "Option::is_none"
    )]
    pub modelos_compatibles_ids: Option<Vec<String>>,
}

/// Campos parciales para PATCH
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductDTO {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calidad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio_venta: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_actual: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_minimo: Option<i64>,
    #[serde(rename = "categoriaId", skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<String>,
    #[serde(
        rename = "modelosCompatiblesIds",
        skip_serializing_if = "Option::is_none"
    )]
    pub modelos_compatibles_ids: Option<Vec<String>>,
}
