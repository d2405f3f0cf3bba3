use chrono::NaiveDate;
use clientes_service::cliente_actor::{self, AgePolicy, ClienteError};
use clientes_service::clients::ClienteClient;
use clientes_service::framework::{mock::MockClient, FrameworkError};
use clientes_service::model::{Cliente, ClienteCreate, Dni, TipoPersona};

fn params(dni: u32, fecha_nacimiento: NaiveDate) -> ClienteCreate {
    ClienteCreate {
        dni: Dni::from(dni),
        nombre: "Carla".to_string(),
        apellido: "Ruiz".to_string(),
        direccion: "Av. Siempre Viva 742".to_string(),
        banco: "Banco Ciudad".to_string(),
        fecha_nacimiento,
        tipo_persona: TipoPersona::PersonaFisica,
    }
}

fn cliente(dni: u32) -> Cliente {
    let fecha = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    Cliente::new(params(dni, fecha), fecha)
}

/// Real Cliente actor with an injected age policy.
#[tokio::test]
async fn test_cliente_actor_with_injected_policy() {
    let hoy = NaiveDate::from_ymd_opt(2030, 3, 1).unwrap();
    let (actor, client) = cliente_actor::new(8);
    let handle = tokio::spawn(actor.run(AgePolicy::new(25).with_reference_date(hoy)));

    let young = params(10101010, NaiveDate::from_ymd_opt(2006, 1, 1).unwrap());
    assert_eq!(
        client.create_cliente(young).await.unwrap_err(),
        ClienteError::Underage {
            dni: Dni::from(10101010),
            edad: 24,
            minima: 25,
        }
    );

    let old_enough = params(10101010, NaiveDate::from_ymd_opt(2005, 3, 1).unwrap());
    let created = client.create_cliente(old_enough).await.unwrap();
    assert_eq!(created.fecha_alta, hoy);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_get_missing_maps_to_not_found() {
    let mut mock = MockClient::<Cliente>::new();
    mock.expect_get(Dni::from(12345678)).return_ok(None);

    let client = ClienteClient::new(mock.client());
    let err = client.get_cliente(Dni::from(12345678)).await.unwrap_err();
    assert_eq!(err, ClienteError::NotFound("12345678".to_string()));

    mock.verify();
}

#[tokio::test]
async fn test_empty_list_maps_to_none_registered() {
    let mut mock = MockClient::<Cliente>::new();
    mock.expect_list().return_ok(vec![]);
    mock.expect_list().return_ok(vec![cliente(1), cliente(2)]);

    let client = ClienteClient::new(mock.client());
    assert_eq!(
        client.list_clientes().await.unwrap_err(),
        ClienteError::NoneRegistered
    );
    assert_eq!(client.list_clientes().await.unwrap().len(), 2);

    mock.verify();
}

#[tokio::test]
async fn test_framework_errors_are_mapped() {
    let mut mock = MockClient::<Cliente>::new();
    mock.expect_create()
        .return_err(FrameworkError::AlreadyExists("12345678".into()));
    mock.expect_delete(Dni::from(12345678))
        .return_err(FrameworkError::NotFound("12345678".into()));
    mock.expect_get(Dni::from(12345678))
        .return_err(FrameworkError::ActorClosed);

    let client = ClienteClient::new(mock.client());
    let fecha = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();

    assert_eq!(
        client.create_cliente(params(12345678, fecha)).await.unwrap_err(),
        ClienteError::AlreadyExists("12345678".to_string())
    );
    assert_eq!(
        client.delete_cliente(Dni::from(12345678)).await.unwrap_err(),
        ClienteError::NotFound("12345678".to_string())
    );
    assert!(matches!(
        client.get_cliente(Dni::from(12345678)).await,
        Err(ClienteError::ActorCommunicationError(_))
    ));

    mock.verify();
}

/// Hook failures travel boxed through the framework and come back typed.
#[tokio::test]
async fn test_entity_error_is_downcast() {
    let underage = ClienteError::Underage {
        dni: Dni::from(12345678),
        edad: 16,
        minima: 18,
    };
    let mut mock = MockClient::<Cliente>::new();
    mock.expect_create()
        .return_err(FrameworkError::EntityError(Box::new(underage.clone())));
    mock.expect_update(Dni::from(12345678))
        .return_err(FrameworkError::EntityError("disk on fire".into()));

    let client = ClienteClient::new(mock.client());
    let fecha = NaiveDate::from_ymd_opt(2008, 1, 1).unwrap();

    assert_eq!(
        client.create_cliente(params(12345678, fecha)).await.unwrap_err(),
        underage
    );
    assert_eq!(
        client
            .update_cliente(Dni::from(12345678), params(12345678, fecha))
            .await
            .unwrap_err(),
        ClienteError::ActorCommunicationError("disk on fire".to_string())
    );

    mock.verify();
}

#[tokio::test]
async fn test_update_targets_path_dni() {
    let mut mock = MockClient::<Cliente>::new();
    mock.expect_update(Dni::from(11111111)).return_ok(cliente(11111111));

    let client = ClienteClient::new(mock.client());
    let fecha = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let updated = client
        .update_cliente(Dni::from(11111111), params(99999999, fecha))
        .await
        .unwrap();
    assert_eq!(updated.dni, Dni::from(11111111));

    mock.verify();
}
