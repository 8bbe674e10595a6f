//! Servicio de usuarios del sistema (solo ADMIN)

use std::sync::Arc;

use serde_json::Value;
use validator::Validate;

use crate::cache::Resource;
use crate::client::ApiClient;
use crate::models::user::{ChangePasswordDTO, CreateUserDTO, User};
use crate::utils::errors::{remap_conflict, ApiResult};
use crate::utils::validation::normalize_rut;

const DUPLICATE_MSG: &str = "Ya existe un usuario con ese RUT.";

pub struct UsersService {
    api: Arc<ApiClient>,
}

impl UsersService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<User>> {
        self.api
            .get_cached(Resource::Users, "", "/users", "Error al obtener usuarios")
            .await
    }

    pub async fn create(&self, mut data: CreateUserDTO) -> ApiResult<User> {
        data.validate()?;
        data.rut = normalize_rut(&data.rut);

        self.api
            .create(Resource::Users, &data, "Error al crear usuario")
            .await
            .map_err(|e| remap_conflict(e, DUPLICATE_MSG))
    }

    /// Cambiar la contraseña del usuario autenticado
    pub async fn change_password(&self, data: &ChangePasswordDTO) -> ApiResult<Value> {
        self.api
            .patch_endpoint(
                Resource::Users,
                "/users/change-password",
                data,
                "Error al cambiar contraseña",
            )
            .await
    }

    /// Desactivar una cuenta
    ///
    /// El endpoint es un DELETE pero el backend la trata como
    /// desactivación, no como borrado físico.
    pub async fn deactivate(&self, id: &str) -> ApiResult<Option<Value>> {
        self.api
            .delete(Resource::Users, id, "Error al desactivar usuario")
            .await
    }
}
