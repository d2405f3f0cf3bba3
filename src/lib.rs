//! # Clientes Service
//!
//! > **A client registry for a bank, built on a resource-oriented actor.**
//!
//! Clients (`Cliente`) are created, read, updated, deleted and listed through
//! an HTTP API. Every client is keyed by its national identity number
//! ([`Dni`](model::Dni)); at most one client exists per dni.
//!
//! ## 🏗️ Request Flow
//!
//! ```text
//! HTTP request ──► ClienteValidator ──► ClienteClient ──► ResourceActor<Cliente>
//!   (api)           (validation)          (clients)        (framework + cliente_actor)
//! ```
//!
//! 1. The [`validation`] module rejects a malformed payload with the first
//!    rule it breaks, before anything touches the store.
//! 2. The [`ClienteClient`](clients::ClienteClient) sends the typed payload to
//!    the actor and maps framework errors to [`ClienteError`](cliente_actor::ClienteError).
//! 3. The actor enforces uniqueness and the minimum age, then mutates its store.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Validation failures, duplicates, underage clients and missing clients are
//! variants of one error enum, returned as values and mapped to status codes
//! only at the HTTP boundary ([`api::ApiError`]).
//!
//! ### 2. Concurrency Model
//! The store is owned by one [`ResourceActor`](framework::ResourceActor)
//! running in its own Tokio task. Requests are processed one at a time, so
//! "check the dni is free, then insert" can't race with another create.
//!
//! ### 3. Explicit Wiring
//! [`ClienteSystem`](lifecycle::ClienteSystem) builds the validator, the
//! actor and its client from a [`Config`](lifecycle::Config); handlers get
//! them through [`AppState`](api::AppState).
//!
//! ### 4. Observability
//! We use `tracing` everywhere with structured logging. See [`lifecycle::telemetry`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`]: generic `ActorEntity` / `ResourceActor` / `ResourceClient`, stores and mocks.
//! - [`model`]: `Cliente`, its request DTOs and `Dni`.
//! - [`validation`]: the fail-fast request validator.
//! - [`cliente_actor`]: the Cliente entity hooks, errors and age policy.
//! - [`clients`]: the `ClienteClient` service.
//! - [`lifecycle`]: configuration, bootstrap, shutdown and tracing.
//! - [`api`]: axum routes and error mapping.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! curl -X POST localhost:8080/clientes -H 'content-type: application/json' -d '{
//!   "dni": "12345678", "nombre": "Ana", "apellido": "Gómez",
//!   "direccion": "Calle 1", "banco": "Banco Sur",
//!   "fechaNacimiento": "1990-05-20", "tipoPersona": "PERSONA_FISICA"
//! }'
//! ```

pub mod api;
pub mod cliente_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod validation;
