use crate::clients::ClienteClient;
use crate::cliente_actor;
use crate::lifecycle::Config;
use crate::validation::ClienteValidator;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The runtime orchestrator for the client registry.
///
/// `ClienteSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the Cliente actor
/// - **Dependency Wiring**: Injecting the [`AgePolicy`](crate::cliente_actor::AgePolicy) from [`Config`]
/// - **Handing out collaborators**: The [`ClienteClient`] service and the [`ClienteValidator`]
///
/// # Example
///
/// ```ignore
/// let system = ClienteSystem::new(&Config::default());
///
/// let params = system.validator.validate(&request)?;
/// let cliente = system.cliente_client.create_cliente(params).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct ClienteSystem {
    /// Client for interacting with the Cliente actor
    pub cliente_client: ClienteClient,

    /// Validator for inbound create/update payloads
    pub validator: ClienteValidator,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: JoinHandle<()>,
}

impl ClienteSystem {
    /// Creates the Cliente actor and spawns it with the policy from `config`.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &Config) -> Self {
        let (cliente_actor, cliente_client) = cliente_actor::new(config.channel_buffer);
        let handle = tokio::spawn(cliente_actor.run(config.age_policy()));

        info!(
            min_age = config.min_age,
            channel_buffer = config.channel_buffer,
            "Cliente system started"
        );

        Self {
            cliente_client,
            validator: ClienteValidator::new(),
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the last client closes the actor's channel; the actor then
    /// exits its loop. Every clone handed out (for example to the HTTP state)
    /// must be dropped before this resolves.
    ///
    /// Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.cliente_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(e);
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
