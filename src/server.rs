//! HTTP boundary for the suggestion service.
//!
//! `suggest_router()` returns a composable `Router`; `serve()` runs it on a
//! bound listener until the shutdown token is cancelled.

mod error;
mod handlers;
mod router;

pub use error::{ApiError, ErrorBody, ErrorDetail};
pub use handlers::{AppState, HealthResponse, SearchHit, SearchResponse, SuggestResponse};
pub use router::suggest_router;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Serve `router` until `shutdown` is cancelled, letting in-flight requests finish
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    log::info!("Suggestion server listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    log::info!("Suggestion server stopped");
    Ok(())
}
