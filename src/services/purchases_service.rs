//! Servicio de compras a proveedores
//!
//! El listado es "opcional": un backend intermitente devuelve lista
//! vacía en vez de botar la página completa. Las filas se adaptan de
//! forma defensiva porque conviven dos generaciones de backend.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::cache::Resource;
use crate::client::ApiClient;
use crate::models::purchase::{
    CreatePurchaseDTO, Purchase, PurchaseDetail, PurchaseItem, PurchaseProvider, PurchaseTotals,
    RawPurchaseItem,
};
use crate::utils::errors::{validation_error, ApiResult};

/// Tasa de IVA aplicada a las compras
pub const IVA_RATE: f64 = 0.19;

pub struct PurchasesService {
    api: Arc<ApiClient>,
}

impl PurchasesService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Listar compras; nunca falla, resuelve a lista vacía
    pub async fn list(&self) -> Vec<Purchase> {
        let rows: Vec<Value> = self
            .api
            .get_list_opcional(Resource::Purchases, "", "/purchases")
            .await;

        rows.iter().map(adapt_purchase_row).collect()
    }

    pub async fn create(&self, data: CreatePurchaseDTO) -> ApiResult<Purchase> {
        if data.items.is_empty() {
            return Err(validation_error(
                "items",
                "La compra debe incluir al menos un producto",
            ));
        }

        self.api
            .create(Resource::Purchases, &data, "Error al crear compra")
            .await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Option<Value>> {
        self.api
            .delete(Resource::Purchases, id, "Error al eliminar compra")
            .await
    }
}

/// Coerción de los valores crudos del formulario
///
/// Cantidad inválida o vacía queda en 1; costo inválido o vacío en 0.
pub fn normalize_items(raw: &[RawPurchaseItem]) -> Vec<PurchaseItem> {
    raw.iter()
        .map(|item| PurchaseItem {
            sku: item.sku.trim().to_string(),
            nombre: item.nombre.trim().to_string(),
            marca: item.marca.clone(),
            calidad: item.calidad.clone(),
            cantidad: match item.cantidad.trim().parse::<i64>() {
                Ok(n) if n != 0 => n,
                _ => 1,
            },
            precio_costo: item.precio_costo.trim().parse().unwrap_or(0),
            precio_venta_sugerido: item.precio_venta_sugerido.trim().parse().unwrap_or(0),
            modelos_compatibles_ids: item.modelos_compatibles_ids.clone(),
        })
        .collect()
}

/// Totales derivados de las líneas, a la tasa fija de IVA
pub fn compute_totals(items: &[PurchaseItem]) -> PurchaseTotals {
    let neto: i64 = items
        .iter()
        .map(|item| item.cantidad * item.precio_costo)
        .sum();
    let iva = (neto as f64 * IVA_RATE).round() as i64;

    PurchaseTotals {
        neto,
        iva,
        total: neto + iva,
    }
}

/// Adaptar una fila del backend a la forma que consumen las vistas
///
/// Recalcula IVA y total cuando faltan y rellena proveedor y fechas
/// con los valores de respaldo del backend viejo.
fn adapt_purchase_row(row: &Value) -> Purchase {
    let neto = row.get("monto_neto").and_then(Value::as_i64).unwrap_or(0);
    let iva = row
        .get("monto_iva")
        .and_then(Value::as_i64)
        .filter(|v| *v != 0)
        .unwrap_or_else(|| (neto as f64 * IVA_RATE).round() as i64);
    let total = row
        .get("monto_total")
        .and_then(Value::as_i64)
        .filter(|v| *v != 0)
        .unwrap_or(neto + iva);

    let now = Utc::now().to_rfc3339();
    let created_at = string_field(row, "createdAt").unwrap_or_else(|| now.clone());

    let proveedor = PurchaseProvider {
        id: row
            .get("proveedor")
            .and_then(|p| string_field(p, "id"))
            .unwrap_or_else(|| "1".to_string()),
        nombre: row
            .get("proveedor")
            .and_then(|p| string_field(p, "nombre"))
            .or_else(|| string_field(row, "proveedor_nombre"))
            .unwrap_or_else(|| "Proveedor General".to_string()),
    };

    let detalles: Vec<PurchaseDetail> = row
        .get("items")
        .or_else(|| row.get("detalles"))
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default();

    Purchase {
        id: string_field(row, "id").unwrap_or_default(),
        numero_factura: string_field(row, "numero_factura")
            .or_else(|| string_field(row, "numero_documento")),
        fecha: string_field(row, "fecha").unwrap_or_else(|| created_at.clone()),
        monto_neto: neto,
        monto_iva: iva,
        monto_total: total,
        proveedor,
        detalles,
        created_by_name: row
            .get("createdBy")
            .and_then(|c| string_field(c, "nombre"))
            .or_else(|| string_field(row, "createdByName"))
            .unwrap_or_else(|| "Sistema".to_string()),
        created_at,
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(cantidad: i64, precio_costo: i64) -> PurchaseItem {
        PurchaseItem {
            sku: "SKU".to_string(),
            nombre: "Pastillas".to_string(),
            marca: None,
            calidad: None,
            cantidad,
            precio_costo,
            precio_venta_sugerido: 0,
            modelos_compatibles_ids: None,
        }
    }

    #[test]
    fn test_totales_derivados() {
        let totals = compute_totals(&[item(2, 1000), item(1, 500)]);
        assert_eq!(totals.neto, 2500);
        assert_eq!(totals.iva, 475);
        assert_eq!(totals.total, 2975);
    }

    #[test]
    fn test_coercion_de_items_crudos() {
        let raw = vec![RawPurchaseItem {
            sku: " FRN-001 ".to_string(),
            nombre: "Disco de freno".to_string(),
            cantidad: "".to_string(),
            precio_costo: "no-numero".to_string(),
            precio_venta_sugerido: "12000".to_string(),
            ..Default::default()
        }];

        let items = normalize_items(&raw);
        assert_eq!(items[0].sku, "FRN-001");
        assert_eq!(items[0].cantidad, 1);
        assert_eq!(items[0].precio_costo, 0);
        assert_eq!(items[0].precio_venta_sugerido, 12000);
    }

    #[test]
    fn test_adaptacion_defensiva_de_fila() {
        let row = json!({
            "id": 7,
            "numero_documento": "F-123",
            "monto_neto": 2500,
            "items": [],
        });

        let purchase = adapt_purchase_row(&row);
        assert_eq!(purchase.id, "7");
        assert_eq!(purchase.numero_factura.as_deref(), Some("F-123"));
        assert_eq!(purchase.monto_iva, 475);
        assert_eq!(purchase.monto_total, 2975);
        assert_eq!(purchase.proveedor.nombre, "Proveedor General");
        assert_eq!(purchase.created_by_name, "Sistema");
        assert!(!purchase.fecha.is_empty());
    }

    #[test]
    fn test_fila_completa_no_se_recalcula() {
        let row = json!({
            "id": "8",
            "monto_neto": 1000,
            "monto_iva": 200,
            "monto_total": 1200,
            "proveedor": { "id": "p1", "nombre": "Frenos SpA" },
        });

        let purchase = adapt_purchase_row(&row);
        assert_eq!(purchase.monto_iva, 200);
        assert_eq!(purchase.monto_total, 1200);
        assert_eq!(purchase.proveedor.nombre, "Frenos SpA");
    }
}
