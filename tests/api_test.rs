use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use clientes_service::api::{build_router, AppState};
use clientes_service::lifecycle::{ClienteSystem, Config};
use serde_json::{json, Value};
use tower::ServiceExt;

fn start() -> (ClienteSystem, Router) {
    let config = Config {
        reference_date: NaiveDate::from_ymd_opt(2024, 6, 15),
        ..Config::default()
    };
    let system = ClienteSystem::new(&config);
    let router = build_router(AppState::from(&system));
    (system, router)
}

fn body(dni: Value, fecha_nacimiento: &str) -> Value {
    json!({
        "dni": dni,
        "nombre": "Ana",
        "apellido": "Gómez",
        "direccion": "Calle 1",
        "banco": "Banco Sur",
        "fechaNacimiento": fecha_nacimiento,
        "tipoPersona": "PERSONA_FISICA",
    })
}

async fn call(router: &Router, method: &str, uri: &str, payload: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match payload {
        Some(payload) => request
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("req");

    let response = router.clone().oneshot(request).await.expect("call");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json")
    };
    (status, value)
}

#[tokio::test]
async fn api_crud_round_trip() {
    let (system, router) = start();

    let (status, created) = call(&router, "POST", "/clientes", Some(body(json!("12345678"), "1990-05-20"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["dni"], 12345678);
    assert_eq!(created["fechaNacimiento"], "1990-05-20");
    assert_eq!(created["tipoPersona"], "PERSONA_FISICA");
    assert_eq!(created["fechaAlta"], "2024-06-15");

    let (status, fetched) = call(&router, "GET", "/clientes/12345678", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let mut changed = body(json!(12345678), "1990-05-20");
    changed["banco"] = json!("Banco Norte");
    let (status, updated) = call(&router, "PUT", "/clientes/12345678", Some(changed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["banco"], "Banco Norte");

    let (status, all) = call(&router, "GET", "/clientes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all, json!([updated]));

    let (status, removed) = call(&router, "DELETE", "/clientes/12345678", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed, updated);

    let (status, error) = call(&router, "GET", "/clientes/12345678", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["error"], "not_found");

    drop(router);
    system.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn api_maps_domain_errors() {
    let (system, router) = start();

    let (status, error) = call(&router, "GET", "/clientes", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["error"], "not_found");

    let (status, _) = call(&router, "POST", "/clientes", Some(body(json!(12345678), "1990-05-20"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, error) = call(&router, "POST", "/clientes", Some(body(json!(12345678), "1990-05-20"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["error"], "already_exists");

    let (status, error) = call(&router, "POST", "/clientes", Some(body(json!(87654321), "2010-01-01"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "underage");

    let (status, error) = call(&router, "PUT", "/clientes/12345678", Some(body(json!(12345678), "2020-01-01"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "underage");
    let (_, stored) = call(&router, "GET", "/clientes/12345678", None).await;
    assert_eq!(stored["fechaNacimiento"], "1990-05-20");

    let (status, error) = call(&router, "PUT", "/clientes/87654321", Some(body(json!(87654321), "1990-05-20"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["error"], "not_found");

    let (status, error) = call(&router, "DELETE", "/clientes/87654321", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["error"], "not_found");

    drop(router);
    system.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn api_rejects_invalid_payloads() {
    let (system, router) = start();

    let (status, error) = call(&router, "POST", "/clientes", Some(body(json!("1234567"), "1990-05-20"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error,
        json!({ "error": "validation_error", "message": "dni must be 8 digits" })
    );

    let mut missing = body(json!(12345678), "1990-05-20");
    missing["banco"] = Value::Null;
    let (status, error) = call(&router, "POST", "/clientes", Some(missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "banco required");

    let (status, error) = call(&router, "POST", "/clientes", Some(body(json!(12345678), "20/05/1990"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "birth date format");

    // A rejected update never reaches the store.
    let (status, created) = call(&router, "POST", "/clientes", Some(body(json!(12345678), "1990-05-20"))).await;
    assert_eq!(status, StatusCode::CREATED);
    let mut rejected = body(json!("abc"), "1990-05-20");
    rejected["nombre"] = json!("Otra");
    let (status, error) = call(&router, "PUT", "/clientes/12345678", Some(rejected)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "dni format");
    let (status, stored) = call(&router, "GET", "/clientes/12345678", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored, created);

    let (status, error) = call(&router, "GET", "/clientes/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "bad_request");

    let request = Request::builder()
        .method("POST")
        .uri("/clientes")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .expect("req");
    let response = router.clone().oneshot(request).await.expect("call");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, all) = call(&router, "GET", "/clientes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all, json!([created]));

    drop(router);
    system.shutdown().await.expect("shutdown");
}

/// Numeric dnis that aren't integers in range fail the format rule, like their text form.
#[tokio::test]
async fn api_rejects_non_integer_numeric_dni() {
    let (system, router) = start();
    let expected = json!({ "error": "validation_error", "message": "dni format" });

    for raw in [r#"12345678.0"#, r#"12345678901234567890"#, r#""12345678.0""#] {
        let payload = body(Value::Null, "1990-05-20")
            .to_string()
            .replace(r#""dni":null"#, &format!(r#""dni":{raw}"#));
        let request = Request::builder()
            .method("POST")
            .uri("/clientes")
            .header("content-type", "application/json")
            .body(Body::from(payload))
            .expect("req");
        let response = router.clone().oneshot(request).await.expect("call");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "dni {raw}");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let error: Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(error, expected, "dni {raw}");
    }

    let (status, _) = call(&router, "GET", "/clientes", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    drop(router);
    system.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn api_health() {
    let (system, router) = start();

    let (status, health) = call(&router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");

    drop(router);
    system.shutdown().await.expect("shutdown");
}
