use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use taller_gestion::auth::{AuthService, LoginRequest, TokenStore, UserRole};
use taller_gestion::cache::Resource;
use taller_gestion::client::ApiClient;
use taller_gestion::config::environment::EnvironmentConfig;
use taller_gestion::models::{
    CreatePurchaseDTO, CreateVehicleDTO, DocumentType, PurchaseItem, UpdateVehicleDTO,
};
use taller_gestion::services::{
    ModelSearcher, ProductsService, PurchasesService, VehiclesService,
};

/// Cliente apuntando al backend simulado
fn test_client(server: &MockServer) -> Arc<ApiClient> {
    let mut config = EnvironmentConfig::from_env();
    config.environment = "production".to_string();
    config.api_base_url = server.base_url();

    Arc::new(ApiClient::new(&config, TokenStore::in_memory()).unwrap())
}

#[tokio::test]
async fn test_cabeceras_de_autenticacion() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/clients")
                .header("authorization", "Bearer tok.en.123")
                .header("content-type", "application/json");
            then.status(200).json_body(json!([]));
        })
        .await;

    let api = test_client(&server);
    api.tokens().set("tok.en.123").await;

    let clients = taller_gestion::services::ClientsService::new(api)
        .list()
        .await
        .unwrap();

    assert!(clients.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_almacena_token_y_logout_limpia() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/auth/login")
                .json_body(json!({ "rut": "11111111-1", "password": "secreto" }));
            then.status(200).json_body(json!({
                "access_token": "aaa.bbb.ccc",
                "user": { "id": "u1", "rut": "11111111-1", "nombre": "Ana", "role": "administrador" },
            }));
        })
        .await;
    // El logout del backend falla: la sesión local se limpia igual
    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/logout");
            then.status(500);
        })
        .await;

    let api = test_client(&server);
    let auth = AuthService::new(api.clone());

    let session = auth
        .login(&LoginRequest {
            rut: "11111111-1".to_string(),
            password: "secreto".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(session.nombre, "Ana");
    assert_eq!(session.role, UserRole::Admin);
    assert_eq!(api.tokens().get().await, Some("aaa.bbb.ccc".to_string()));

    auth.logout().await;
    assert_eq!(api.tokens().get().await, None);
    assert!(auth.current_session().await.is_none());
}

#[tokio::test]
async fn test_token_ilegible_se_evicta_en_silencio() {
    let server = MockServer::start_async().await;
    let api = test_client(&server);
    api.tokens().set("no-es-un-token").await;

    let auth = AuthService::new(api.clone());
    assert!(auth.current_session().await.is_none());
    // La evicción la hace el hook que resuelve la sesión, no el decoder
    assert_eq!(api.tokens().get().await, None);
}

#[tokio::test]
async fn test_conflicto_de_patente_usa_mensaje_propio() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/vehicles");
            then.status(409)
                .json_body(json!({ "message": "duplicate key value violates unique constraint" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(PATCH).path("/vehicles/v1");
            then.status(409).json_body(json!({ "message": "otro mensaje crudo" }));
        })
        .await;

    let api = test_client(&server);
    let vehicles = VehiclesService::new(api);

    let created = vehicles
        .create(CreateVehicleDTO {
            patente: " ab12cd ".to_string(),
            marca: "TOYOTA".to_string(),
            modelo: "YARIS".to_string(),
            anio: Some(2020),
            color: None,
            cliente_id: "c1".to_string(),
            kilometraje: None,
        })
        .await;
    assert_eq!(
        created.unwrap_err().to_string(),
        "Ya existe un vehículo con esa patente."
    );

    let updated = vehicles
        .update(
            "v1",
            UpdateVehicleDTO {
                patente: Some("ZZ99XX".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert_eq!(
        updated.unwrap_err().to_string(),
        "Ya existe un vehículo con esa patente."
    );
}

#[tokio::test]
async fn test_patente_se_normaliza_antes_de_transmitir() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/vehicles")
                .json_body_includes(r#"{ "patente": "AB12CD" }"#);
            then.status(201).json_body(json!({
                "id": "v1",
                "patente": "AB12CD",
                "marca": "TOYOTA",
                "modelo": "YARIS",
                "cliente_id": "c1",
            }));
        })
        .await;

    let api = test_client(&server);
    let vehicle = VehiclesService::new(api)
        .create(CreateVehicleDTO {
            patente: " ab12cd ".to_string(),
            marca: "TOYOTA".to_string(),
            modelo: "YARIS".to_string(),
            anio: None,
            color: None,
            cliente_id: "c1".to_string(),
            kilometraje: None,
        })
        .await
        .unwrap();

    assert_eq!(vehicle.patente, "AB12CD");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_400_con_lista_de_mensajes_se_une() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/vehicles");
            then.status(400).json_body(json!({
                "message": ["patente es requerida", "marca es requerida"],
            }));
        })
        .await;

    let api = test_client(&server);
    let err = VehiclesService::new(api)
        .create(CreateVehicleDTO {
            patente: "XX11YY".to_string(),
            marca: "X".to_string(),
            modelo: "Y".to_string(),
            anio: None,
            color: None,
            cliente_id: "c1".to_string(),
            kilometraje: None,
        })
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "patente es requerida, marca es requerida"
    );
}

#[tokio::test]
async fn test_lista_opcional_resiliente() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/purchases");
            then.status(500);
        })
        .await;
    // Los demás recursos de la misma página no se ven afectados
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(json!([
                { "id": "p1", "sku": "FRN-001", "nombre": "Pastillas", "precio_venta": 15000,
                  "stock_actual": 4, "stock_minimo": 2 },
            ]));
        })
        .await;

    let api = test_client(&server);
    let purchases_service = PurchasesService::new(api.clone());
    let products_service = ProductsService::new(api.clone());
    let (purchases, products) = futures::join!(
        purchases_service.list(),
        products_service.list(None),
    );

    assert!(purchases.is_empty());
    assert_eq!(products.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_sin_cuerpo_resuelve_null() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/products/p1");
            then.status(204);
        })
        .await;

    let api = test_client(&server);
    let result = ProductsService::new(api).delete("p1").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_con_violacion_de_integridad() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/products/p1");
            then.status(500).json_body(json!({ "message": "FK constraint" }));
        })
        .await;

    let api = test_client(&server);
    let err = ProductsService::new(api).delete("p1").await.unwrap_err();
    assert!(err.to_string().contains("Considera reducir el stock a 0"));
}

#[tokio::test]
async fn test_invalidacion_tras_crear_compra() {
    let server = MockServer::start_async().await;
    let products_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(json!([]));
        })
        .await;
    let purchases_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/purchases");
            then.status(200).json_body(json!([]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/purchases");
            then.status(201).json_body(json!({
                "id": "c1",
                "fecha": "2026-08-06T10:00:00Z",
                "monto_neto": 2500,
                "monto_iva": 475,
                "monto_total": 2975,
                "proveedor": { "id": "pr1", "nombre": "Frenos SpA" },
                "detalles": [],
            }));
        })
        .await;

    let api = test_client(&server);
    let products = ProductsService::new(api.clone());
    let purchases = PurchasesService::new(api.clone());

    // Primer fetch de cada lista puebla el cache; el segundo no va a la red
    products.list(None).await.unwrap();
    products.list(None).await.unwrap();
    purchases.list().await;
    purchases.list().await;
    products_mock.assert_hits_async(1).await;
    purchases_mock.assert_hits_async(1).await;

    purchases
        .create(CreatePurchaseDTO {
            proveedor_nombre: "Frenos SpA".to_string(),
            numero_documento: Some("F-123".to_string()),
            tipo_documento: DocumentType::Factura,
            items: vec![PurchaseItem {
                sku: "FRN-001".to_string(),
                nombre: "Pastillas".to_string(),
                marca: None,
                calidad: None,
                cantidad: 2,
                precio_costo: 1000,
                precio_venta_sugerido: 2000,
                modelos_compatibles_ids: None,
            }],
        })
        .await
        .unwrap();

    // La compra invalidó purchases, products y reports: ambos listados
    // vuelven a la red y el grupo de reportes quedó vacío
    assert!(!api.cache().contains(Resource::Reports, "low-stock").await);
    products.list(None).await.unwrap();
    purchases.list().await;
    products_mock.assert_hits_async(2).await;
    purchases_mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn test_busqueda_reemplazada_resuelve_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/vehicle-models");
            then.status(200).json_body(json!([]));
        })
        .await;

    let api = test_client(&server);
    let searcher = Arc::new(ModelSearcher::new(api));

    let first = {
        let searcher = searcher.clone();
        tokio::spawn(async move { searcher.search("yar").await })
    };
    // La segunda llegada durante la espera del debounce supera a la primera
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    let second = searcher.search("yaris").await.unwrap();

    let first = first.await.unwrap().unwrap();
    assert!(first.is_none());
    assert!(second.is_some());
}

#[tokio::test]
async fn test_proxy_reenvia_al_backend() {
    use taller_gestion::proxy::{proxy_router, ProxyState};

    let backend = MockServer::start_async().await;
    backend
        .mock_async(|when, then| {
            when.method(GET)
                .path("/clients")
                .query_param("search", "ana")
                .header("authorization", "Bearer tok.en.123");
            then.status(200)
                .header("x-backend", "frenos")
                .json_body(json!([{ "id": "c1", "rut": "1-9", "nombre": "Ana" }]));
        })
        .await;

    let mut config = EnvironmentConfig::from_env();
    config.backend_url = backend.base_url();

    let app = proxy_router(ProxyState::new(&config).unwrap());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let response = reqwest::Client::new()
        .get(format!("http://{}/api/proxy/clients?search=ana", addr))
        .header("authorization", "Bearer tok.en.123")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("x-backend").unwrap().to_str().unwrap(),
        "frenos"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body[0]["nombre"], "Ana");
}
