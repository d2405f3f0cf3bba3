//! ActorEntity trait implementation for the Cliente domain type.
//!
//! Uniqueness of the dni is enforced by the framework before `on_create`
//! runs, so a duplicate is reported as "already exists" even when the
//! duplicate would also be underage.

use super::{AgePolicy, ClienteError};
use crate::framework::ActorEntity;
use crate::model::{Cliente, ClienteCreate, ClienteUpdate, Dni};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Cliente {
    type Id = Dni;
    type Create = ClienteCreate;
    type Update = ClienteUpdate;
    type Context = AgePolicy;
    type Error = ClienteError;

    fn id(&self) -> &Dni {
        &self.dni
    }

    /// Builds the client, registered on the policy's current date.
    fn from_create_params(params: ClienteCreate, policy: &AgePolicy) -> Result<Self, ClienteError> {
        Ok(Cliente::new(params, policy.today()))
    }

    /// Rejects clients younger than the policy's minimum age.
    async fn on_create(&mut self, policy: &AgePolicy) -> Result<(), ClienteError> {
        check_age(self, policy)
    }

    /// Replaces the mutable fields; dni and registration date are kept.
    /// A new birth date must still satisfy the minimum age.
    async fn on_update(&mut self, update: ClienteUpdate, policy: &AgePolicy) -> Result<(), ClienteError> {
        self.apply(update);
        check_age(self, policy)
    }
}

fn check_age(cliente: &Cliente, policy: &AgePolicy) -> Result<(), ClienteError> {
    let edad = cliente.edad(policy.today());
    debug!(dni = %cliente.dni, edad, min_age = policy.min_age, "Age check");
    if edad < policy.min_age {
        return Err(ClienteError::Underage {
            dni: cliente.dni,
            edad,
            minima: policy.min_age,
        });
    }
    Ok(())
}
