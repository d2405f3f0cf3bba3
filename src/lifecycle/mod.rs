//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and shutting down the service.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`Config`] from defaults, a TOML file and the environment
//! 2. **Actor Creation & Wiring** - [`ClienteSystem`] spawns the Cliente actor with its [`AgePolicy`](crate::cliente_actor::AgePolicy)
//! 3. **Graceful Shutdown** - [`ClienteSystem::shutdown`] closes the channel and awaits the actor
//! 4. **Observability Setup** - [`setup_tracing`]
//!
//! ## Dependency Injection via Context
//!
//! The actor is created without dependencies and receives them in
//! `run(context)`. For the Cliente actor the context is the age policy, so
//! tests can pin "today" through [`Config::reference_date`].
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for the actor task to finish

pub mod cliente_system;
pub mod config;
pub mod telemetry;

pub use cliente_system::*;
pub use config::*;
pub use telemetry::*;
