//! # Cliente Client
//!
//! The client service: a high-level API over the Cliente actor that speaks in
//! [`ClienteError`] instead of [`FrameworkError`].
use crate::clients::actor_client::ActorClient;
use crate::cliente_actor::ClienteError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cliente, ClienteCreate, ClienteUpdate, Dni};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cliente actor.
#[derive(Clone)]
pub struct ClienteClient {
    inner: ResourceClient<Cliente>,
}

impl ClienteClient {
    pub fn new(inner: ResourceClient<Cliente>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cliente> for ClienteClient {
    type Error = ClienteError;

    fn inner(&self) -> &ResourceClient<Cliente> {
        &self.inner
    }

    /// Recovers the typed error raised by a Cliente hook; anything that isn't
    /// a Cliente outcome becomes a communication error.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ClienteError::NotFound(id),
            FrameworkError::AlreadyExists(id) => ClienteError::AlreadyExists(id),
            FrameworkError::EntityError(source) => match source.downcast::<ClienteError>() {
                Ok(cliente_error) => *cliente_error,
                Err(other) => ClienteError::ActorCommunicationError(other.to_string()),
            },
            other => ClienteError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ClienteClient {
    /// Registers a new client.
    ///
    /// Fails with `AlreadyExists` when the dni is taken and `Underage` when
    /// the client is younger than the configured minimum age.
    #[instrument(skip(self, params), fields(dni = %params.dni))]
    pub async fn create_cliente(&self, params: ClienteCreate) -> Result<Cliente, ClienteError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_cliente(&self, dni: Dni) -> Result<Cliente, ClienteError> {
        self.get(dni)
            .await?
            .ok_or_else(|| ClienteError::NotFound(dni.to_string()))
    }

    /// Every registered client ordered by dni.
    ///
    /// An empty registry is reported as `NoneRegistered` rather than an empty list.
    #[instrument(skip(self))]
    pub async fn list_clientes(&self) -> Result<Vec<Cliente>, ClienteError> {
        let clientes = self.list().await?;
        if clientes.is_empty() {
            return Err(ClienteError::NoneRegistered);
        }
        Ok(clientes)
    }

    /// Replaces the data of the client registered under `dni`.
    ///
    /// The dni carried in `params` never changes the identity of the target.
    #[instrument(skip(self, params))]
    pub async fn update_cliente(&self, dni: Dni, params: ClienteCreate) -> Result<Cliente, ClienteError> {
        if params.dni != dni {
            debug!(body_dni = %params.dni, "Ignoring dni in body");
        }
        self.inner
            .update(dni, ClienteUpdate::from(params))
            .await
            .map_err(Self::map_error)
    }

    /// Removes the client registered under `dni` and returns it.
    #[instrument(skip(self))]
    pub async fn delete_cliente(&self, dni: Dni) -> Result<Cliente, ClienteError> {
        self.delete(dni).await
    }
}
