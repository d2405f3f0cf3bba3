//! HTTP boundary for the client registry.
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `POST` | `/clientes` | 201 + created client |
//! | `GET` | `/clientes` | 200 + all clients |
//! | `GET` | `/clientes/{dni}` | 200 + client |
//! | `PUT` | `/clientes/{dni}` | 200 + updated client |
//! | `DELETE` | `/clientes/{dni}` | 200 + removed client |
//!
//! Failures are mapped by [`ApiError`].

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::{build_router, serve};
pub use state::AppState;
