use axum::Router;
use eyre::Report;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

/// Binds the listener and serves until a shutdown signal arrives.
pub async fn serve(router: Router) -> Result<(), Report> {
    let addr = bind_address()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Listening on http://{addr}");
    info!("API docs at http://{addr}/swagger-ui/");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn bind_address() -> Result<SocketAddr, Report> {
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()
        .map_err(|e| eyre::eyre!("Invalid PORT: {}", e))?;

    let ip = host
        .parse()
        .map_err(|e| eyre::eyre!("Invalid HOST: {}", e))?;

    Ok(SocketAddr::new(ip, port))
}

/// Resolves on Ctrl+C or SIGTERM, letting in-flight requests drain.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
