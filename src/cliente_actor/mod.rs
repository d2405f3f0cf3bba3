//! # Cliente Actor
//!
//! The resource actor that owns every registered [`Cliente`](crate::model::Cliente).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for `Cliente`
//! - [`error`] - [`ClienteError`] type for type-safe error handling
//! - [`policy`] - [`AgePolicy`], the actor's injected context
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = cliente_actor::new(32);
//! tokio::spawn(actor.run(AgePolicy::default()));
//!
//! let cliente = client.create_cliente(params).await?;
//! ```

pub mod entity;
pub mod error;
pub mod policy;

pub use error::*;
pub use policy::*;

use crate::clients::ClienteClient;
use crate::framework::ResourceActor;
use crate::model::Cliente;

/// Creates a new Cliente actor over an empty in-memory store, and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cliente>, ClienteClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = ClienteClient::new(generic_client);

    (actor, client)
}
