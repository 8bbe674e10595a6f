//! Servicio de proveedores

use std::sync::Arc;

use serde_json::Value;
use validator::Validate;

use crate::cache::Resource;
use crate::client::ApiClient;
use crate::models::provider::{CreateProviderDTO, Provider, UpdateProviderDTO};
use crate::utils::errors::{remap_conflict, remap_integrity, ApiResult};
use crate::utils::validation::{normalize_rut, normalize_telefono};

const DUPLICATE_MSG: &str = "Ya existe un proveedor con ese RUT.";
const INTEGRITY_MSG: &str =
    "No se puede eliminar este proveedor porque tiene compras asociadas.";

pub struct ProvidersService {
    api: Arc<ApiClient>,
}

impl ProvidersService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<Provider>> {
        self.api
            .get_cached(
                Resource::Providers,
                "",
                "/providers",
                "Error al cargar proveedores",
            )
            .await
    }

    pub async fn get(&self, id: &str) -> ApiResult<Provider> {
        self.api
            .get_cached(
                Resource::Providers,
                id,
                &format!("/providers/{}", id),
                "Error al cargar proveedor",
            )
            .await
    }

    pub async fn create(&self, mut data: CreateProviderDTO) -> ApiResult<Provider> {
        data.validate()?;
        data.rut = normalize_rut(&data.rut);
        data.telefono = data.telefono.as_deref().map(normalize_telefono);

        self.api
            .create(Resource::Providers, &data, "Error al crear proveedor")
            .await
            .map_err(|e| remap_conflict(e, DUPLICATE_MSG))
    }

    pub async fn update(&self, id: &str, mut data: UpdateProviderDTO) -> ApiResult<Provider> {
        data.rut = data.rut.as_deref().map(normalize_rut);
        data.telefono = data.telefono.as_deref().map(normalize_telefono);

        self.api
            .update(
                Resource::Providers,
                id,
                &data,
                "Error al actualizar proveedor",
            )
            .await
            .map_err(|e| remap_conflict(e, DUPLICATE_MSG))
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Option<Value>> {
        self.api
            .delete(Resource::Providers, id, "Error al eliminar proveedor")
            .await
            .map_err(|e| remap_integrity(e, INTEGRITY_MSG))
    }
}
