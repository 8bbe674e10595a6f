use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use taller_gestion::config::environment::EnvironmentConfig;
use taller_gestion::proxy::{proxy_router, ProxyState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🔧 Taller Frenos Aguilera - Proxy del API");
    info!("=========================================");

    let config = EnvironmentConfig::from_env();
    let state = ProxyState::new(&config)?;
    let app = proxy_router(state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Proxy iniciando en http://{}", addr);
    info!("🔁 Reenviando /api/proxy/* hacia {}", config.backend_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(anyhow::anyhow!("Error del servidor: {}", e));
    }

    info!("👋 Proxy terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando proxy...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando proxy...");
        },
    }
}
