//! Services module
//!
//! Este módulo contiene un servicio por recurso del API. Cada servicio
//! envuelve las consultas cacheadas y las mutaciones de su recurso, y
//! aplica la política de invalidación a través del cliente compartido.

pub mod categories_service;
pub mod clients_service;
pub mod counter_sales_service;
pub mod products_service;
pub mod providers_service;
pub mod purchases_service;
pub mod reports_service;
pub mod users_service;
pub mod vehicle_models_service;
pub mod vehicles_service;
pub mod work_orders_service;

pub use categories_service::CategoriesService;
pub use clients_service::ClientsService;
pub use counter_sales_service::CounterSalesService;
pub use products_service::ProductsService;
pub use providers_service::ProvidersService;
pub use purchases_service::{compute_totals, normalize_items, PurchasesService, IVA_RATE};
pub use reports_service::ReportsService;
pub use users_service::UsersService;
pub use vehicle_models_service::{ModelSearcher, VehicleModelsService, SEARCH_DEBOUNCE};
pub use vehicles_service::VehiclesService;
pub use work_orders_service::WorkOrdersService;
