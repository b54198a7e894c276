use guardian_ward::{Discovery, NsdRegistrar, SERVICE_TYPE};

#[tokio::test]
async fn registrar_records_the_advertised_service() {
    let mut registrar = NsdRegistrar::new("Hallway Tablet");

    assert!(!registrar.is_broadcasting());
    assert!(registrar.service_info().is_none());

    let registered = registrar.start_broadcasting(8888).await.unwrap();
    assert!(registered);
    assert!(registrar.is_broadcasting());

    let info = registrar.service_info().unwrap();
    assert_eq!(info.name, "Hallway Tablet");
    assert_eq!(info.service_type, SERVICE_TYPE);
    assert_eq!(info.port, 8888);
}

#[tokio::test]
async fn repeated_start_keeps_the_original_registration() {
    let mut registrar = NsdRegistrar::new("Ward Device");

    assert!(registrar.start_broadcasting(8888).await.unwrap());
    assert!(registrar.start_broadcasting(9999).await.unwrap());

    // First registration wins until the broadcast is withdrawn.
    assert_eq!(registrar.service_info().unwrap().port, 8888);
}

#[tokio::test]
async fn stop_withdraws_the_registration() {
    let mut registrar = NsdRegistrar::new("Ward Device");

    assert!(registrar.start_broadcasting(8888).await.unwrap());
    registrar.stop_broadcasting().await.unwrap();

    assert!(!registrar.is_broadcasting());
    assert!(registrar.service_info().is_none());

    // Stopping again is harmless.
    registrar.stop_broadcasting().await.unwrap();
}

#[tokio::test]
async fn registrar_restarts_on_a_new_port() {
    let mut registrar = NsdRegistrar::new("Ward Device");

    assert!(registrar.start_broadcasting(8888).await.unwrap());
    registrar.stop_broadcasting().await.unwrap();
    assert!(registrar.start_broadcasting(9001).await.unwrap());

    assert_eq!(registrar.service_info().unwrap().port, 9001);
}

#[test]
fn guardian_service_type_is_stable() {
    // Guardians browse for this exact type; changing it is a breaking change.
    assert_eq!(SERVICE_TYPE, "_guardian-angel._tcp");
}
