//! Servicio del catálogo de modelos de vehículos
//!
//! Incluye la búsqueda con debounce que acota el volumen de requests
//! del buscar-mientras-escribe, y la vinculación de rangos de años
//! contra el catálogo existente.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::cache::Resource;
use crate::client::ApiClient;
use crate::models::vehicle_model::{CreateVehicleModelDTO, VehicleModel};
use crate::utils::errors::{validation_error, ApiResult};

/// Retardo fijo del debounce de búsqueda
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

pub struct VehicleModelsService {
    api: Arc<ApiClient>,
}

impl VehicleModelsService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<VehicleModel>> {
        self.api
            .get_cached(
                Resource::VehicleModels,
                "",
                "/vehicle-models",
                "Error al cargar modelos de vehículos",
            )
            .await
    }

    pub async fn create(&self, mut data: CreateVehicleModelDTO) -> ApiResult<VehicleModel> {
        data.marca = data.marca.trim().to_uppercase();
        data.modelo = data.modelo.trim().to_uppercase();

        self.api
            .create(Resource::VehicleModels, &data, "Error al crear modelo de vehículo")
            .await
    }

    /// Vincular o crear los modelos de un rango de años
    ///
    /// Para cada año del rango se busca primero en el catálogo; solo los
    /// que faltan se crean. Un fallo creando un año se registra y se
    /// salta, no aborta el resto del rango.
    pub async fn ensure_models_for_range(
        &self,
        marca: &str,
        modelo: &str,
        anio_desde: i32,
        anio_hasta: Option<i32>,
    ) -> ApiResult<Vec<VehicleModel>> {
        let start = anio_desde;
        let end = anio_hasta.unwrap_or(start);

        if !(1900..=2100).contains(&start) {
            return Err(validation_error(
                "anio",
                "El año debe ser un número entre 1900 y 2100",
            ));
        }
        if end < start {
            return Err(validation_error(
                "anio",
                "El año final no puede ser menor al inicial",
            ));
        }

        let marca = marca.trim().to_uppercase();
        let modelo = modelo.trim().to_uppercase();
        let existing = self.list().await.unwrap_or_default();

        let mut result: Vec<VehicleModel> = Vec::new();
        for anio in start..=end {
            let found = existing.iter().find(|m| {
                m.marca.to_uppercase() == marca && m.modelo.to_uppercase() == modelo && m.anio == anio
            });

            match found {
                Some(model) => result.push(model.clone()),
                None => match self
                    .create(CreateVehicleModelDTO {
                        marca: marca.clone(),
                        modelo: modelo.clone(),
                        anio,
                    })
                    .await
                {
                    Ok(created) => result.push(created),
                    Err(e) => {
                        log::warn!(
                            "⚠️ No se pudo crear el modelo {} {} {}: {}",
                            marca,
                            modelo,
                            anio,
                            e
                        );
                    }
                },
            }
        }

        // Quitar duplicados conservando el orden
        let mut seen = HashSet::new();
        result.retain(|m| seen.insert(m.id.clone()));

        Ok(result)
    }
}

/// Búsqueda de modelos con debounce y cancelación cooperativa
///
/// Cada llamada reemplaza a la anterior: la reemplazada resuelve
/// `Ok(None)`, ya sea que la alcanzaran durante la espera o con su
/// request todavía en vuelo. La cancelación solo descarta el resultado
/// tardío, no aborta el transporte.
pub struct ModelSearcher {
    api: Arc<ApiClient>,
    generation: Arc<AtomicU64>,
}

impl ModelSearcher {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn search(&self, query: &str) -> ApiResult<Option<Vec<VehicleModel>>> {
        let my_gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(SEARCH_DEBOUNCE).await;
        if self.generation.load(Ordering::SeqCst) != my_gen {
            return Ok(None);
        }

        let endpoint = format!(
            "/vehicle-models?search={}",
            urlencoding::encode(query.trim())
        );
        let models: Vec<VehicleModel> = self
            .api
            .get_json(&endpoint, "Error al cargar modelos de vehículos")
            .await?;

        if self.generation.load(Ordering::SeqCst) != my_gen {
            return Ok(None);
        }

        Ok(Some(models))
    }
}
