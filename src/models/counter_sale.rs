use serde::{Deserialize, Serialize};

use super::purchase::ProductRef;

/// Tipo de movimiento de mostrador
///
/// Una venta directa, una pérdida registrada o consumo interno del
/// taller; nada de esto pasa por una orden de trabajo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoMovimiento {
    #[serde(rename = "VENTA")]
    Venta,
    #[serde(rename = "PERDIDA")]
    Perdida,
    #[serde(rename = "USO_INTERNO")]
    UsoInterno,
}

impl TipoMovimiento {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoMovimiento::Venta => "VENTA",
            TipoMovimiento::Perdida => "PERDIDA",
            TipoMovimiento::UsoInterno => "USO_INTERNO",
        }
    }
}

/// Línea de detalle de un movimiento de mostrador
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CounterSaleDetail {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub cantidad: i64,
    #[serde(default)]
    pub precio_venta_unitario: i64,
    #[serde(default)]
    pub costo_producto: i64,
    #[serde(default)]
    pub total_fila: i64,
    #[serde(default)]
    pub producto: ProductRef,
}

/// Movimiento de mostrador
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterSale {
    pub id: String,
    pub tipo_movimiento: TipoMovimiento,
    pub fecha: String,
    #[serde(default)]
    pub total_venta: i64,
    #[serde(default)]
    pub costo_perdida: i64,
    #[serde(default)]
    pub comentario: Option<String>,
    #[serde(default)]
    pub comprador: Option<String>,
    #[serde(default, rename = "createdByName")]
    pub created_by_name: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: String,
    #[serde(default)]
    pub detalles: Vec<CounterSaleDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterSaleItem {
    pub sku: String,
    pub cantidad: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precio_venta: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCounterSaleDTO {
    pub tipo_movimiento: TipoMovimiento,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comprador: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comentario: Option<String>,
    pub items: Vec<CounterSaleItem>,
}
