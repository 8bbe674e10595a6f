//! Reportes derivados en el cliente
//!
//! Agregaciones sobre datos ya cacheados: stock bajo, caja diaria,
//! totales por cliente y búsqueda global. Los resultados se cachean
//! bajo el grupo `reports`, que la tabla de invalidación refresca
//! cuando cambian productos, compras o ventas.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::Resource;
use crate::client::ApiClient;
use crate::models::counter_sale::TipoMovimiento;
use crate::models::product::Product;
use crate::models::report::{ClientTotal, DailyCashReport, GlobalSearchResult};
use crate::models::work_order::{WorkOrder, WorkOrderStatus};
use crate::utils::errors::ApiResult;

use super::clients_service::ClientsService;
use super::counter_sales_service::CounterSalesService;
use super::products_service::ProductsService;
use super::vehicles_service::VehiclesService;
use super::work_orders_service::WorkOrdersService;

pub struct ReportsService {
    api: Arc<ApiClient>,
}

impl ReportsService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Productos en o bajo su stock mínimo
    pub async fn low_stock(&self) -> ApiResult<Vec<Product>> {
        if let Some(cached) = self
            .api
            .cache()
            .get::<Vec<Product>>(Resource::Reports, "low-stock")
            .await
        {
            return Ok(cached);
        }

        let products = ProductsService::new(self.api.clone()).list(None).await?;
        let low: Vec<Product> = products.into_iter().filter(Product::is_low_stock).collect();

        self.api
            .cache()
            .set(Resource::Reports, "low-stock", &low)
            .await;
        Ok(low)
    }

    /// Resumen de caja de un día (fecha en formato YYYY-MM-DD)
    ///
    /// Suma las ventas de mostrador del día y el total cobrado de las
    /// órdenes finalizadas o entregadas ingresadas ese día.
    pub async fn daily_cash(&self, fecha: &str) -> ApiResult<DailyCashReport> {
        let cache_key = format!("daily:{}", fecha);
        if let Some(cached) = self
            .api
            .cache()
            .get::<DailyCashReport>(Resource::Reports, &cache_key)
            .await
        {
            return Ok(cached);
        }

        // Las dos fuentes se consultan a la vez, como al montar la página
        let counter_sales_service = CounterSalesService::new(self.api.clone());
        let work_orders_service = WorkOrdersService::new(self.api.clone());
        let (ventas, ordenes) = futures::join!(
            counter_sales_service.list(Some(TipoMovimiento::Venta)),
            work_orders_service.list(),
        );
        let ordenes = ordenes?;

        let del_dia: Vec<_> = ventas
            .iter()
            .filter(|v| v.fecha.starts_with(fecha))
            .collect();
        let ordenes_del_dia: Vec<&WorkOrder> = ordenes
            .iter()
            .filter(|o| {
                o.fecha_ingreso.starts_with(fecha)
                    && matches!(
                        o.estado,
                        WorkOrderStatus::Finalizada | WorkOrderStatus::Entregada
                    )
            })
            .collect();

        let total_ventas: i64 = del_dia.iter().map(|v| v.total_venta).sum();
        let total_ordenes: i64 = ordenes_del_dia.iter().map(|o| o.total_cobrado).sum();

        let report = DailyCashReport {
            fecha: fecha.to_string(),
            total_ventas,
            total_ordenes,
            total: total_ventas + total_ordenes,
            movimientos: del_dia.len(),
            ordenes: ordenes_del_dia.len(),
        };

        self.api
            .cache()
            .set(Resource::Reports, &cache_key, &report)
            .await;
        Ok(report)
    }

    /// Total de órdenes acumulado por cliente, de mayor a menor
    pub async fn totals_per_client(&self) -> ApiResult<Vec<ClientTotal>> {
        if let Some(cached) = self
            .api
            .cache()
            .get::<Vec<ClientTotal>>(Resource::Reports, "per-client")
            .await
        {
            return Ok(cached);
        }

        let ordenes = WorkOrdersService::new(self.api.clone()).list().await?;

        let mut acc: HashMap<String, ClientTotal> = HashMap::new();
        for orden in &ordenes {
            if orden.estado == WorkOrderStatus::Cancelada {
                continue;
            }
            let entry = acc
                .entry(orden.cliente.id.clone())
                .or_insert_with(|| ClientTotal {
                    cliente_id: orden.cliente.id.clone(),
                    nombre: orden.cliente.nombre.clone(),
                    ordenes: 0,
                    total_cobrado: 0,
                });
            entry.ordenes += 1;
            entry.total_cobrado += orden.total_cobrado;
        }

        let mut totals: Vec<ClientTotal> = acc.into_values().collect();
        totals.sort_by(|a, b| b.total_cobrado.cmp(&a.total_cobrado));

        self.api
            .cache()
            .set(Resource::Reports, "per-client", &totals)
            .await;
        Ok(totals)
    }

    /// Búsqueda global sobre clientes, vehículos y productos
    pub async fn global_search(&self, query: &str) -> ApiResult<GlobalSearchResult> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Ok(GlobalSearchResult::default());
        }

        let clients_service = ClientsService::new(self.api.clone());
        let vehicles_service = VehiclesService::new(self.api.clone());
        let products_service = ProductsService::new(self.api.clone());
        let (clientes, vehiculos, productos) = futures::join!(
            clients_service.list(),
            vehicles_service.list(),
            products_service.list(None),
        );

        let clientes = clientes?
            .into_iter()
            .filter(|c| {
                c.nombre.to_lowercase().contains(&q) || c.rut.to_lowercase().contains(&q)
            })
            .collect();
        let vehiculos = vehiculos?
            .into_iter()
            .filter(|v| {
                v.patente.to_lowercase().contains(&q)
                    || v.marca.to_lowercase().contains(&q)
                    || v.modelo.to_lowercase().contains(&q)
            })
            .collect();
        let productos = productos?
            .into_iter()
            .filter(|p| {
                p.nombre.to_lowercase().contains(&q) || p.sku.to_lowercase().contains(&q)
            })
            .collect();

        Ok(GlobalSearchResult {
            clientes,
            vehiculos,
            productos,
        })
    }
}
