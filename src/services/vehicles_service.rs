//! Servicio de vehículos
//!
//! La patente viaja siempre normalizada; los duplicados que detecta el
//! backend se reemplazan por un mensaje propio antes de propagarse.

use std::sync::Arc;

use serde_json::Value;
use validator::Validate;

use crate::cache::Resource;
use crate::client::ApiClient;
use crate::models::vehicle::{CreateVehicleDTO, UpdateVehicleDTO, Vehicle};
use crate::utils::errors::{remap_conflict, remap_integrity, ApiResult};
use crate::utils::validation::normalize_patente;

const DUPLICATE_MSG: &str = "Ya existe un vehículo con esa patente.";
const INTEGRITY_MSG: &str =
    "No se puede eliminar este vehículo porque tiene órdenes de trabajo asociadas.";

pub struct VehiclesService {
    api: Arc<ApiClient>,
}

impl VehiclesService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<Vehicle>> {
        self.api
            .get_cached(
                Resource::Vehicles,
                "",
                "/vehicles",
                "Error al cargar vehículos",
            )
            .await
    }

    pub async fn get(&self, id: &str) -> ApiResult<Vehicle> {
        self.api
            .get_cached(
                Resource::Vehicles,
                id,
                &format!("/vehicles/{}", id),
                "Error al cargar vehículo",
            )
            .await
    }

    pub async fn create(&self, mut data: CreateVehicleDTO) -> ApiResult<Vehicle> {
        data.validate()?;
        data.patente = normalize_patente(&data.patente);

        self.api
            .create(Resource::Vehicles, &data, "Error al crear vehículo")
            .await
            .map_err(|e| remap_conflict(e, DUPLICATE_MSG))
    }

    pub async fn update(&self, id: &str, mut data: UpdateVehicleDTO) -> ApiResult<Vehicle> {
        data.patente = data.patente.as_deref().map(normalize_patente);

        self.api
            .update(Resource::Vehicles, id, &data, "Error al actualizar vehículo")
            .await
            .map_err(|e| remap_conflict(e, DUPLICATE_MSG))
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Option<Value>> {
        self.api
            .delete(Resource::Vehicles, id, "Error al eliminar vehículo")
            .await
            .map_err(|e| remap_integrity(e, INTEGRITY_MSG))
    }
}
