use super::handlers::{
    create_cliente, delete_cliente, get_cliente, handle_health, list_clientes, update_cliente,
};
use super::state::AppState;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/clientes", get(list_clientes).post(create_cliente))
        .route(
            "/clientes/:dni",
            get(get_cliente).put(update_cliente).delete(delete_cliente),
        )
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the API on `addr` until `shutdown` resolves.
///
/// The router (and the client clone inside its state) is dropped when this
/// returns, so the Cliente actor can shut down afterwards.
pub async fn serve(
    addr: SocketAddr,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "HTTP server ready");
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
