use serde::{Deserialize, Serialize};

use super::purchase::ProductRef;

/// Estado de una orden de trabajo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkOrderStatus {
    #[serde(rename = "EN_PROCESO")]
    EnProceso,
    #[serde(rename = "FINALIZADA")]
    Finalizada,
    #[serde(rename = "ENTREGADA")]
    Entregada,
    #[serde(rename = "CANCELADA")]
    Cancelada,
}

impl WorkOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkOrderStatus::EnProceso => "EN_PROCESO",
            WorkOrderStatus::Finalizada => "FINALIZADA",
            WorkOrderStatus::Entregada => "ENTREGADA",
            WorkOrderStatus::Cancelada => "CANCELADA",
        }
    }
}

/// Cliente embebido en una orden mostrada
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkOrderClient {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub rut: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
}

/// Vehículo embebido en una orden mostrada
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkOrderVehicle {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub patente: String,
    #[serde(default)]
    pub marca: String,
    #[serde(default)]
    pub modelo: String,
}

/// Línea de servicio de una orden; puede referenciar un repuesto
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkOrderDetail {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub cantidad: i64,
    #[serde(default)]
    pub precio_unitario: i64,
    #[serde(default)]
    pub producto: Option<ProductRef>,
}

/// Orden de trabajo (ticket de servicio)
///
/// `numero_orden_papel` es el número del talonario físico; el backend
/// garantiza su unicidad y los duplicados llegan como 409.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: String,
    pub numero_orden_papel: i64,
    pub fecha_ingreso: String,
    pub estado: WorkOrderStatus,
    #[serde(default)]
    pub cliente: WorkOrderClient,
    #[serde(default)]
    pub vehiculo: WorkOrderVehicle,
    #[serde(default)]
    pub realizado_por: String,
    #[serde(default)]
    pub revisado_por: Option<String>,
    #[serde(default)]
    pub detalles: Vec<WorkOrderDetail>,
    #[serde(default)]
    pub total_cobrado: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkOrderDetail {
    pub descripcion: String,
    pub cantidad: i64,
    pub precio_unitario: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producto_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkOrderDTO {
    pub numero_orden_papel: i64,
    pub cliente_id: String,
    pub vehiculo_id: String,
    pub realizado_por: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revisado_por: Option<String>,
    pub detalles: Vec<CreateWorkOrderDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cobrado: Option<i64>,
}

/// Campos parciales para PATCH
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWorkOrderDTO {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_orden_papel: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<WorkOrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realizado_por: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revisado_por: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detalles: Option<Vec<CreateWorkOrderDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cobrado: Option<i64>,
}
