//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and final store size
//! - **Entity Operations**: Create, Get, List, Update, Delete with the `dni` as a field
//! - **Rejections**: Duplicates, missing clients and failed age checks at `warn`
//! - **HTTP**: One span per request from `tower-http`'s `TraceLayer`
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Full payloads and HTTP spans
//! RUST_LOG=debug,tower_http=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a registration looks like:
//!
//! ```text
//! INFO Actor started entity_type="Cliente" size=0
//! INFO create_cliente: Created entity_type="Cliente" id=12345678 size=1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at startup.
///
/// `RUST_LOG` selects the filter; when it is unset or invalid, `info` is used.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_target(false) // entity_type identifies the source instead
        .compact()
        .init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
