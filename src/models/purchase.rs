use serde::{Deserialize, Serialize};

/// Referencia de producto embebida en una línea de compra o venta
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub marca: Option<String>,
}

/// Proveedor embebido en una compra
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseProvider {
    pub id: String,
    pub nombre: String,
}

/// Línea de detalle de una compra
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseDetail {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub cantidad: i64,
    #[serde(default)]
    pub precio_costo_unitario: i64,
    #[serde(default)]
    pub total_fila: i64,
    #[serde(default)]
    pub producto: ProductRef,
}

/// Compra a proveedor
///
/// Los montos de IVA y total son derivables del neto a la tasa fija
/// del 19% cuando el backend no los trae.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: String,
    pub numero_factura: Option<String>,
    pub fecha: String,
    pub monto_neto: i64,
    pub monto_iva: i64,
    pub monto_total: i64,
    pub proveedor: PurchaseProvider,
    pub detalles: Vec<PurchaseDetail>,
    #[serde(default, rename = "createdByName")]
    pub created_by_name: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: String,
}

/// Tipo de documento tributario de la compra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "FACTURA")]
    Factura,
    #[serde(rename = "BOLETA")]
    Boleta,
    #[serde(rename = "NOTA")]
    Nota,
}

/// Línea de compra ya normalizada, lista para transmitir
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseItem {
    pub sku: String,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calidad: Option<String>,
    pub cantidad: i64,
    pub precio_costo: i64,
    pub precio_venta_sugerido: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modelos_compatibles_ids: Option<Vec<String>>,
}

/// Línea de compra tal como llega del formulario, con los números
/// todavía como texto libre
#[derive(Debug, Clone, Default)]
pub struct RawPurchaseItem {
    pub sku: String,
    pub nombre: String,
    pub marca: Option<String>,
    pub calidad: Option<String>,
    pub cantidad: String,
    pub precio_costo: String,
    pub precio_venta_sugerido: String,
    pub modelos_compatibles_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePurchaseDTO {
    pub proveedor_nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_documento: Option<String>,
    pub tipo_documento: DocumentType,
    pub items: Vec<PurchaseItem>,
}

/// Totales derivados de las líneas de una compra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTotals {
    pub neto: i64,
    pub iva: i64,
    pub total: i64,
}
