//! Error types for the Cliente actor.

use crate::model::Dni;
use crate::validation::ValidationError;
use thiserror::Error;

/// Errors that can occur during client operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClienteError {
    /// The request payload was rejected before reaching the actor.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A client with the same dni is already registered.
    #[error("Cliente already exists: {0}")]
    AlreadyExists(String),

    /// The client is younger than the minimum age for registration.
    #[error("Cliente {dni} is {edad} years old, minimum age is {minima}")]
    Underage { dni: Dni, edad: u32, minima: u32 },

    /// The requested client was not found.
    #[error("Cliente not found: {0}")]
    NotFound(String),

    /// Listing was requested while no client is registered.
    #[error("No clientes registered")]
    NoneRegistered,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
