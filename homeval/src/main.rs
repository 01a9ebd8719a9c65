use homeval::{config, model, server, telemetry};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Init
    telemetry::init_tracing();
    let metrics = telemetry::install_metrics()?;

    // 2. Load Config
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());
    let (config, found) = config::AppConfig::load(&config_path)?;
    if !found {
        tracing::warn!(path = %config_path, "config file not found, using defaults");
    }

    // 3. Load artifacts; failure here keeps the process from serving
    let store = model::ModelStore::load(&config.artifacts).map_err(|e| {
        tracing::error!(error = %e, "failed to load model artifacts");
        e
    })?;

    // 4. Create Router
    let app = server::routes::create_router(store, metrics, &config.cors)?;

    // 5. Bind & Serve
    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
