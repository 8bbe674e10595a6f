//! Servicio de categorías de productos

use std::sync::Arc;

use serde_json::Value;

use crate::cache::Resource;
use crate::client::ApiClient;
use crate::models::category::{Category, CreateCategoryDTO};
use crate::utils::errors::{remap_conflict, validation_error, ApiResult};
use crate::utils::validation::validate_not_empty;

const DUPLICATE_MSG: &str = "Ya existe una categoría con ese nombre.";

pub struct CategoriesService {
    api: Arc<ApiClient>,
}

impl CategoriesService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<Category>> {
        self.api
            .get_cached(
                Resource::Categories,
                "",
                "/categories",
                "Error al cargar categorías",
            )
            .await
    }

    pub async fn create(&self, data: CreateCategoryDTO) -> ApiResult<Category> {
        validate_not_empty(&data.nombre).map_err(|_| {
            validation_error("nombre", "El nombre de la categoría es obligatorio")
        })?;

        self.api
            .create(Resource::Categories, &data, "Error al crear categoría")
            .await
            .map_err(|e| remap_conflict(e, DUPLICATE_MSG))
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Option<Value>> {
        self.api
            .delete(Resource::Categories, id, "Error al eliminar categoría")
            .await
    }
}
