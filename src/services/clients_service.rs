//! Servicio de clientes

use std::sync::Arc;

use serde_json::Value;
use validator::Validate;

use crate::cache::Resource;
use crate::client::ApiClient;
use crate::models::client::{Client, CreateClientDTO, UpdateClientDTO};
use crate::utils::errors::{remap_conflict, remap_integrity, ApiResult};
use crate::utils::validation::{normalize_rut, normalize_telefono};

const DUPLICATE_MSG: &str = "Ya existe un cliente con ese RUT.";
const INTEGRITY_MSG: &str =
    "No se puede eliminar este cliente porque tiene vehículos u órdenes de trabajo asociadas.";

pub struct ClientsService {
    api: Arc<ApiClient>,
}

impl ClientsService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<Client>> {
        self.api
            .get_cached(Resource::Clients, "", "/clients", "Error al cargar clientes")
            .await
    }

    pub async fn get(&self, id: &str) -> ApiResult<Client> {
        self.api
            .get_cached(
                Resource::Clients,
                id,
                &format!("/clients/{}", id),
                "Error al cargar cliente",
            )
            .await
    }

    pub async fn create(&self, mut data: CreateClientDTO) -> ApiResult<Client> {
        data.validate()?;
        data.rut = normalize_rut(&data.rut);
        data.telefono = data.telefono.as_deref().map(normalize_telefono);

        self.api
            .create(Resource::Clients, &data, "Error al crear cliente")
            .await
            .map_err(|e| remap_conflict(e, DUPLICATE_MSG))
    }

    pub async fn update(&self, id: &str, mut data: UpdateClientDTO) -> ApiResult<Client> {
        data.rut = data.rut.as_deref().map(normalize_rut);
        data.telefono = data.telefono.as_deref().map(normalize_telefono);

        self.api
            .update(Resource::Clients, id, &data, "Error al actualizar cliente")
            .await
            .map_err(|e| remap_conflict(e, DUPLICATE_MSG))
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Option<Value>> {
        self.api
            .delete(Resource::Clients, id, "Error al eliminar cliente")
            .await
            .map_err(|e| remap_integrity(e, INTEGRITY_MSG))
    }
}
