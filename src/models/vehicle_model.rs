use serde::{Deserialize, Serialize};

/// Modelo de vehículo del catálogo de compatibilidades
///
/// Un producto puede llevar cero o más modelos compatibles como
/// etiquetas; el catálogo es plano: una fila por (marca, modelo, año).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleModel {
    pub id: String,
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVehicleModelDTO {
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
}
