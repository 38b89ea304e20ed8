use std::sync::Arc;

use anyhow::Result;
use frontier_contact::{ContactSessions, ContactWorkflow, DeliveryClient, Inbox};
use frontier_notification::{EmailJsClient, EmailService};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{
    config::{Config, DeliveryBackend},
    routes::AppState,
};

/// Builds the delivery client selected by `delivery.backend`.
pub fn delivery_client(config: &Config) -> Result<Arc<dyn DeliveryClient>> {
    let client: Arc<dyn DeliveryClient> = match config.delivery.backend {
        DeliveryBackend::Emailjs => Arc::new(EmailJsClient::new(config.delivery.emailjs())?),
        DeliveryBackend::Smtp => Arc::new(EmailService::new(&config.email)?),
    };

    Ok(client)
}

pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting frontier server...");

    for warning in config.warnings() {
        tracing::warn!("{warning}");
    }

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    // Write pool first: it creates the file and applies migrations before
    // the read-only pool opens it.
    let write_pool = crate::db::create_write_pool(&config.database.url).await?;
    frontier_contact::MIGRATOR.run(&write_pool).await?;

    let read_pool =
        crate::db::create_read_pool(&config.database.url, config.database.max_connections)
            .await?;

    let workflow = ContactWorkflow::new(delivery_client(&config)?, &config.contact.address);

    let state = AppState {
        workflow,
        sessions: ContactSessions::new(),
        inbox: Inbox::new(read_pool.clone(), write_pool),
        pool: read_pool,
        config,
    };

    let app = crate::routes::router(state)
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        // Minify before compressing
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
