//! Handlers for `/clientes`. Each one validates (where a body is involved)
//! before calling the client service, so a rejected payload never reaches the store.

use super::error::ApiError;
use super::state::AppState;
use crate::model::{Cliente, ClienteRequest, Dni};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::trace;

type JsonBody = Result<Json<ClienteRequest>, JsonRejection>;

fn parse_dni(raw: &str) -> Result<Dni, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid dni in path: {raw:?}")))
}

pub async fn create_cliente(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<Cliente>), ApiError> {
    let Json(request) = body?;
    let params = state.validator.validate(&request)?;
    let cliente = state.clientes.create_cliente(params).await?;
    Ok((StatusCode::CREATED, Json(cliente)))
}

pub async fn get_cliente(
    State(state): State<AppState>,
    Path(dni): Path<String>,
) -> Result<Json<Cliente>, ApiError> {
    let dni = parse_dni(&dni)?;
    Ok(Json(state.clientes.get_cliente(dni).await?))
}

pub async fn list_clientes(State(state): State<AppState>) -> Result<Json<Vec<Cliente>>, ApiError> {
    Ok(Json(state.clientes.list_clientes().await?))
}

pub async fn update_cliente(
    State(state): State<AppState>,
    Path(dni): Path<String>,
    body: JsonBody,
) -> Result<Json<Cliente>, ApiError> {
    let dni = parse_dni(&dni)?;
    let Json(request) = body?;
    let params = state.validator.validate(&request)?;
    Ok(Json(state.clientes.update_cliente(dni, params).await?))
}

pub async fn delete_cliente(
    State(state): State<AppState>,
    Path(dni): Path<String>,
) -> Result<Json<Cliente>, ApiError> {
    let dni = parse_dni(&dni)?;
    Ok(Json(state.clientes.delete_cliente(dni).await?))
}

pub async fn handle_health() -> impl IntoResponse {
    trace!("health check: ok");
    Json(serde_json::json!({
        "status": "healthy",
    }))
}
