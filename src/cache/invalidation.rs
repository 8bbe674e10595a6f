//! Política de invalidación entre recursos
//!
//! Tabla estática consultada tras cada escritura exitosa: el recurso
//! escrito determina qué grupos del cache deben refrescarse. Cualquier
//! entidad cuya escritura cambia una cantidad o valorización mostrada
//! en un reporte, o cuya identidad aparece embebida en otra entidad,
//! invalida ese grupo dependiente.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Recursos del API, uno por entidad de dominio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Clients,
    Vehicles,
    Products,
    Providers,
    Purchases,
    CounterSales,
    WorkOrders,
    Users,
    Categories,
    VehicleModels,
    Reports,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Clients => "clients",
            Resource::Vehicles => "vehicles",
            Resource::Products => "products",
            Resource::Providers => "providers",
            Resource::Purchases => "purchases",
            Resource::CounterSales => "counter-sales",
            Resource::WorkOrders => "work-orders",
            Resource::Users => "users",
            Resource::Categories => "categories",
            Resource::VehicleModels => "vehicle-models",
            Resource::Reports => "reports",
        }
    }

    /// Ruta lógica del recurso en el API REST
    pub fn endpoint(&self) -> String {
        format!("/{}", self.as_str())
    }
}

lazy_static! {
    static ref DEPENDENTS: HashMap<Resource, Vec<Resource>> = {
        use Resource::*;
        let mut m = HashMap::new();
        m.insert(Clients, vec![Clients]);
        m.insert(Vehicles, vec![Vehicles, WorkOrders]);
        m.insert(Products, vec![Products, Reports]);
        m.insert(Providers, vec![Providers]);
        m.insert(Purchases, vec![Purchases, Products, Reports]);
        m.insert(CounterSales, vec![CounterSales, Products, Reports]);
        m.insert(WorkOrders, vec![WorkOrders]);
        m.insert(Users, vec![Users]);
        m.insert(Categories, vec![Categories]);
        m.insert(VehicleModels, vec![VehicleModels]);
        m
    };
}

/// Grupos de cache a invalidar tras escribir un recurso
pub fn dependents_of(resource: Resource) -> &'static [Resource] {
    DEPENDENTS
        .get(&resource)
        .map(|deps| deps.as_slice())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escrituras_que_afectan_reportes() {
        for recurso in [Resource::Products, Resource::Purchases, Resource::CounterSales] {
            assert!(
                dependents_of(recurso).contains(&Resource::Reports),
                "{} debe invalidar reports",
                recurso.as_str()
            );
        }
    }

    #[test]
    fn test_vehiculos_invalidan_ordenes() {
        // Las órdenes mostradas embeben datos del vehículo
        assert!(dependents_of(Resource::Vehicles).contains(&Resource::WorkOrders));
    }

    #[test]
    fn test_todo_recurso_se_invalida_a_si_mismo() {
        use Resource::*;
        for recurso in [
            Clients,
            Vehicles,
            Products,
            Providers,
            Purchases,
            CounterSales,
            WorkOrders,
            Users,
            Categories,
            VehicleModels,
        ] {
            assert!(
                dependents_of(recurso).contains(&recurso),
                "{} debe invalidarse a sí mismo",
                recurso.as_str()
            );
        }
    }

    #[test]
    fn test_reportes_no_se_escriben() {
        assert!(dependents_of(Resource::Reports).is_empty());
    }
}
