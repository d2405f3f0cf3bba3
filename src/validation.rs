//! # Request Validation
//!
//! Turns an untrusted [`ClienteRequest`] into a typed [`ClienteCreate`], or
//! rejects it with the first rule it breaks. Rules run in a fixed order:
//!
//! 1. `dni` parses as an integer
//! 2. `dni` is not zero
//! 3. `dni` is not negative
//! 4. `dni` has exactly 8 digits
//! 5. `nombre`, `apellido`, `direccion`, `banco` are present and non-empty
//! 6. `fechaNacimiento` is present and a `YYYY-MM-DD` calendar date
//! 7. `tipoPersona` is present
//!
//! Rules 2 and 3 can't fire without rule 4 firing too; they are kept so that
//! zero and negative numbers get their own message.

use crate::model::{ClienteCreate, ClienteRequest, Dni};
use chrono::NaiveDate;
use thiserror::Error;

/// The first rule a [`ClienteRequest`] failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("dni format")]
    DniFormat,
    #[error("dni required")]
    DniRequired,
    #[error("dni negative")]
    DniNegative,
    #[error("dni must be 8 digits")]
    DniLength,
    /// A required text field is missing or empty. Holds the field name.
    #[error("{0} required")]
    MissingField(&'static str),
    #[error("birth date required")]
    BirthDateRequired,
    #[error("birth date format")]
    BirthDateFormat,
    #[error("person type required")]
    PersonTypeRequired,
}

/// Stateless validator for client create/update payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClienteValidator;

impl ClienteValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks `request` and returns the typed payload on success.
    pub fn validate(&self, request: &ClienteRequest) -> Result<ClienteCreate, ValidationError> {
        let dni = validate_dni(request.dni.as_deref())?;
        let nombre = required("nombre", &request.nombre)?;
        let apellido = required("apellido", &request.apellido)?;
        let direccion = required("direccion", &request.direccion)?;
        let banco = required("banco", &request.banco)?;
        let fecha_nacimiento = validate_birth_date(request.fecha_nacimiento.as_deref())?;
        let tipo_persona = request
            .tipo_persona
            .ok_or(ValidationError::PersonTypeRequired)?;

        Ok(ClienteCreate {
            dni,
            nombre,
            apellido,
            direccion,
            banco,
            fecha_nacimiento,
            tipo_persona,
        })
    }
}

fn validate_dni(raw: Option<&str>) -> Result<Dni, ValidationError> {
    let value: i64 = raw
        .ok_or(ValidationError::DniFormat)?
        .parse()
        .map_err(|_| ValidationError::DniFormat)?;

    if value == 0 {
        return Err(ValidationError::DniRequired);
    }
    if value < 0 {
        return Err(ValidationError::DniNegative);
    }
    if !(Dni::MIN..=Dni::MAX).contains(&value) {
        return Err(ValidationError::DniLength);
    }
    u32::try_from(value)
        .map(Dni::from)
        .map_err(|_| ValidationError::DniLength)
}

fn required(field: &'static str, value: &Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text.clone()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn validate_birth_date(raw: Option<&str>) -> Result<NaiveDate, ValidationError> {
    let raw = raw.ok_or(ValidationError::BirthDateRequired)?;
    if !is_iso_date_shape(raw) {
        return Err(ValidationError::BirthDateFormat);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::BirthDateFormat)
}

/// `DDDD-DD-DD`. chrono alone would also take single-digit months and days.
fn is_iso_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
