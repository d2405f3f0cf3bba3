//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod cliente_client;

pub use actor_client::*;
pub use cliente_client::*;
