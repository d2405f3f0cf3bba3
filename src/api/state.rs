use crate::clients::ClienteClient;
use crate::lifecycle::ClienteSystem;
use crate::validation::ClienteValidator;

/// Collaborators shared by every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub clientes: ClienteClient,
    pub validator: ClienteValidator,
}

impl AppState {
    pub fn new(clientes: ClienteClient, validator: ClienteValidator) -> Self {
        Self { clientes, validator }
    }
}

impl From<&ClienteSystem> for AppState {
    fn from(system: &ClienteSystem) -> Self {
        Self::new(system.cliente_client.clone(), system.validator)
    }
}
