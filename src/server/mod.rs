//! Order endpoint
//!
//! The receiving side of an order submission. It runs the same schema as the
//! form over every incoming body:
//! - invalid JSON or wrong shape: 400
//! - schema failures: 422 with the per-field messages
//! - accepted: 201 with an acknowledgement

pub mod extractor;
pub mod handlers;
pub mod router;

pub use extractor::{OrderRejection, ValidatedOrder};
pub use handlers::{OrderAck, OrderApiState};
pub use router::build_order_routes;

use anyhow::Result;
use tokio::net::TcpListener;

/// Serve the order endpoint with graceful shutdown
///
/// # Example
///
/// ```ignore
/// serve("127.0.0.1:9009", OrderApiState::default()).await?;
/// ```
pub async fn serve(addr: &str, state: OrderApiState) -> Result<()> {
    let app = build_order_routes(state);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Order endpoint listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Order endpoint shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
