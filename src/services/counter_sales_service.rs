//! Servicio de ventas de mostrador
//!
//! Movimientos de stock que no pasan por una orden de trabajo: venta
//! directa, pérdida registrada o consumo interno.

use std::sync::Arc;

use crate::cache::Resource;
use crate::client::ApiClient;
use crate::models::counter_sale::{CounterSale, CreateCounterSaleDTO, TipoMovimiento};
use crate::utils::errors::{validation_error, ApiResult};

pub struct CounterSalesService {
    api: Arc<ApiClient>,
}

impl CounterSalesService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Listar movimientos, opcionalmente por tipo; nunca falla
    pub async fn list(&self, tipo: Option<TipoMovimiento>) -> Vec<CounterSale> {
        let (params, endpoint) = match tipo {
            Some(t) => (
                t.as_str().to_string(),
                format!("/counter-sales?tipo={}", t.as_str()),
            ),
            None => (String::new(), "/counter-sales".to_string()),
        };

        self.api
            .get_list_opcional(Resource::CounterSales, &params, &endpoint)
            .await
    }

    pub async fn create(&self, data: CreateCounterSaleDTO) -> ApiResult<CounterSale> {
        if data.items.is_empty() {
            return Err(validation_error(
                "items",
                "El movimiento debe incluir al menos un producto",
            ));
        }

        self.api
            .create(
                Resource::CounterSales,
                &data,
                "Error al registrar el movimiento",
            )
            .await
    }
}
