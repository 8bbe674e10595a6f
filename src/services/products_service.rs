//! Servicio de productos del inventario

use std::sync::Arc;

use serde_json::Value;
use validator::Validate;

use crate::cache::Resource;
use crate::client::ApiClient;
use crate::models::product::{CreateProductDTO, Product, UpdateProductDTO};
use crate::utils::errors::{remap_conflict, remap_integrity, ApiResult};

const DUPLICATE_MSG: &str =
    "Ya existe un producto con ese SKU o un modelo de vehículo duplicado. Por favor, verifica los datos.";
const INTEGRITY_MSG: &str =
    "No se puede eliminar este producto porque está siendo usado en órdenes de trabajo, compras o ventas. Considera reducir el stock a 0 en su lugar.";

pub struct ProductsService {
    api: Arc<ApiClient>,
}

impl ProductsService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Listar productos, opcionalmente filtrados por texto de búsqueda
    pub async fn list(&self, search: Option<&str>) -> ApiResult<Vec<Product>> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        let (params, endpoint) = match search {
            Some(q) => (
                q.to_string(),
                format!("/products?search={}", urlencoding::encode(q)),
            ),
            None => (String::new(), "/products".to_string()),
        };

        self.api
            .get_cached(
                Resource::Products,
                &params,
                &endpoint,
                "Error al cargar productos",
            )
            .await
    }

    pub async fn get(&self, id: &str) -> ApiResult<Product> {
        self.api
            .get_cached(
                Resource::Products,
                id,
                &format!("/products/{}", id),
                "Error al cargar producto",
            )
            .await
    }

    pub async fn create(&self, data: CreateProductDTO) -> ApiResult<Product> {
        data.validate()?;

        self.api
            .create(Resource::Products, &data, "Error al crear producto")
            .await
            .map_err(|e| remap_conflict(e, DUPLICATE_MSG))
    }

    pub async fn update(&self, id: &str, data: UpdateProductDTO) -> ApiResult<Product> {
        self.api
            .update(Resource::Products, id, &data, "Error al actualizar producto")
            .await
            .map_err(|e| remap_conflict(e, DUPLICATE_MSG))
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Option<Value>> {
        self.api
            .delete(Resource::Products, id, "Error al eliminar producto")
            .await
            .map_err(|e| remap_integrity(e, INTEGRITY_MSG))
    }
}
