//! Generic actor framework for resource management.
//!
//! This module provides the core building blocks for creating type-safe actor systems
//! that manage keyed resource entities with CRUD operations.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns an [`EntityStore`] and serves requests
//! - [`ResourceClient`] - Type-safe async handle for sending requests to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use self::core::*;
pub use self::store::{EntityStore, MemoryStore};
