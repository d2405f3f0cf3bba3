use crate::model::Dni;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Whether a client is a natural person or a legal entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoPersona {
    PersonaFisica,
    PersonaJuridica,
}

/// A registered bank client.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor)
/// keyed by [`Dni`].
///
/// See [`impl ActorEntity for Cliente`](#impl-ActorEntity-for-Cliente) for details on:
/// - Creation parameters ([`ClienteCreate`])
/// - Update parameters ([`ClienteUpdate`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub dni: Dni,
    pub nombre: String,
    pub apellido: String,
    pub direccion: String,
    pub banco: String,
    pub fecha_nacimiento: NaiveDate,
    pub tipo_persona: TipoPersona,
    /// Registration date, set once at creation.
    pub fecha_alta: NaiveDate,
}

impl Cliente {
    /// Builds a client from a validated payload, registered on `fecha_alta`.
    pub fn new(params: ClienteCreate, fecha_alta: NaiveDate) -> Self {
        Self {
            dni: params.dni,
            nombre: params.nombre,
            apellido: params.apellido,
            direccion: params.direccion,
            banco: params.banco,
            fecha_nacimiento: params.fecha_nacimiento,
            tipo_persona: params.tipo_persona,
            fecha_alta,
        }
    }

    /// Age in whole years on `hoy`.
    pub fn edad(&self, hoy: NaiveDate) -> u32 {
        age_between(self.fecha_nacimiento, hoy)
    }

    /// Replaces every mutable field. `dni` and `fecha_alta` are kept.
    pub fn apply(&mut self, update: ClienteUpdate) {
        self.nombre = update.nombre;
        self.apellido = update.apellido;
        self.direccion = update.direccion;
        self.banco = update.banco;
        self.fecha_nacimiento = update.fecha_nacimiento;
        self.tipo_persona = update.tipo_persona;
    }
}

/// Whole years elapsed from `birth` to `on`; zero when `on` precedes `birth`.
pub fn age_between(birth: NaiveDate, on: NaiveDate) -> u32 {
    let mut years = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Raw create/update payload as received at the HTTP boundary.
///
/// Every field is optional so that missing or `null` values reach the
/// validator, which reports them with a field-specific error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteRequest {
    #[serde(default, deserialize_with = "dni_as_text")]
    pub dni: Option<String>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub direccion: Option<String>,
    pub banco: Option<String>,
    pub fecha_nacimiento: Option<String>,
    pub tipo_persona: Option<TipoPersona>,
}

/// Accepts the dni either as a JSON string or as any JSON number.
///
/// Numbers are kept as their JSON text, so a float or an out-of-range
/// integer is rejected by the validator's format rule, like the same text
/// sent as a string.
fn dni_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDni {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawDni>::deserialize(deserializer)?.map(|raw| match raw {
        RawDni::Text(text) => text,
        RawDni::Number(number) => number.to_string(),
    }))
}

/// Validated payload for creating a client.
///
/// Only [`ClienteValidator`](crate::validation::ClienteValidator) produces
/// these from a [`ClienteRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClienteCreate {
    pub dni: Dni,
    pub nombre: String,
    pub apellido: String,
    pub direccion: String,
    pub banco: String,
    pub fecha_nacimiento: NaiveDate,
    pub tipo_persona: TipoPersona,
}

/// Validated payload for updating a client. Carries no identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClienteUpdate {
    pub nombre: String,
    pub apellido: String,
    pub direccion: String,
    pub banco: String,
    pub fecha_nacimiento: NaiveDate,
    pub tipo_persona: TipoPersona,
}

impl From<ClienteCreate> for ClienteUpdate {
    fn from(params: ClienteCreate) -> Self {
        Self {
            nombre: params.nombre,
            apellido: params.apellido,
            direccion: params.direccion,
            banco: params.banco,
            fecha_nacimiento: params.fecha_nacimiento,
            tipo_persona: params.tipo_persona,
        }
    }
}
