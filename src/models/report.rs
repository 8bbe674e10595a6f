use serde::{Deserialize, Serialize};

use super::client::Client;
use super::product::Product;
use super::vehicle::Vehicle;

/// Resumen de caja de un día
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCashReport {
    pub fecha: String,
    /// Total de ventas de mostrador del día
    pub total_ventas: i64,
    /// Total cobrado en órdenes finalizadas o entregadas del día
    pub total_ordenes: i64,
    pub total: i64,
    pub movimientos: usize,
    pub ordenes: usize,
}

/// Total de órdenes de trabajo acumulado por cliente
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientTotal {
    pub cliente_id: String,
    pub nombre: String,
    pub ordenes: usize,
    pub total_cobrado: i64,
}

/// Resultado de la búsqueda global del panel de reportes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalSearchResult {
    pub clientes: Vec<Client>,
    pub vehiculos: Vec<Vehicle>,
    pub productos: Vec<Product>,
}
