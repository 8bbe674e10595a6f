//! Servicio de órdenes de trabajo

use std::sync::Arc;

use serde_json::Value;

use crate::cache::Resource;
use crate::client::ApiClient;
use crate::models::work_order::{CreateWorkOrderDTO, UpdateWorkOrderDTO, WorkOrder};
use crate::utils::errors::{remap_integrity, validation_error, ApiError, ApiResult};
use crate::utils::validation::validate_positive;

const INTEGRITY_MSG: &str =
    "No se puede eliminar esta orden de trabajo porque tiene repuestos u otros registros asociados.";

pub struct WorkOrdersService {
    api: Arc<ApiClient>,
}

impl WorkOrdersService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<WorkOrder>> {
        self.api
            .get_cached(
                Resource::WorkOrders,
                "",
                "/work-orders",
                "Error al cargar órdenes de trabajo",
            )
            .await
    }

    pub async fn get(&self, id: &str) -> ApiResult<WorkOrder> {
        self.api
            .get_cached(
                Resource::WorkOrders,
                id,
                &format!("/work-orders/{}", id),
                "Error al cargar orden de trabajo",
            )
            .await
    }

    pub async fn create(&self, data: CreateWorkOrderDTO) -> ApiResult<WorkOrder> {
        validate_positive(data.numero_orden_papel).map_err(|_| {
            validation_error(
                "numero_orden_papel",
                "El número de orden física debe ser mayor que cero",
            )
        })?;

        let numero = data.numero_orden_papel;
        self.api
            .create(Resource::WorkOrders, &data, "Error al crear orden de trabajo")
            .await
            .map_err(|e| remap_duplicate_order(e, numero))
    }

    pub async fn update(&self, id: &str, data: UpdateWorkOrderDTO) -> ApiResult<WorkOrder> {
        let numero = data.numero_orden_papel;
        self.api
            .update(
                Resource::WorkOrders,
                id,
                &data,
                "Error al actualizar orden de trabajo",
            )
            .await
            .map_err(|e| match numero {
                Some(n) => remap_duplicate_order(e, n),
                None => e,
            })
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Option<Value>> {
        self.api
            .delete(Resource::WorkOrders, id, "Error al eliminar orden de trabajo")
            .await
            .map_err(|e| remap_integrity(e, INTEGRITY_MSG))
    }
}

/// Un 409, o un mensaje del backend que menciona el número de orden,
/// se reemplaza por la guía de número duplicado
fn remap_duplicate_order(err: ApiError, numero: i64) -> ApiError {
    let is_duplicate = err.is_conflict() || err.to_string().contains("numero_orden_papel");

    if is_duplicate {
        ApiError::api(
            reqwest::StatusCode::CONFLICT,
            format!(
                "El número de orden física {} ya está en uso. Por favor, elige un número diferente.",
                numero
            ),
        )
    } else {
        err
    }
}
