//! Variable configuration: path validation gates every save.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use supplier_scorecard::{
    errors::ServiceError,
    services::variables::{VariableInput, VariableService},
    variables::{Metric, NamespaceResolver, CATALOGUE_SIZE},
};

use common::setup_db;

#[tokio::test]
async fn saves_variable_with_catalogue_path() {
    let service = VariableService::new(setup_db().await);

    let saved = service
        .save_variable(VariableInput::new("Total Workdays", "get_total_workdays"))
        .await
        .expect("save");

    assert_eq!(saved.name, "Total Workdays");
    assert_eq!(saved.param_name, "total_workdays");
    assert_eq!(saved.path, "get_total_workdays");
    assert!(saved.is_custom);
}

#[tokio::test]
async fn rejects_unknown_path_and_stores_nothing() {
    let service = VariableService::new(setup_db().await);

    let err = service
        .save_variable(VariableInput::new("Bogus", "not_a_real_function"))
        .await
        .unwrap_err();

    assert_matches!(&err, ServiceError::UnresolvablePath(p) if p == "not_a_real_function");
    assert_eq!(err.to_string(), "Could not find path for not_a_real_function");
    assert!(service.list_variables().await.unwrap().is_empty());
}

#[tokio::test]
async fn rejects_unresolvable_dotted_path() {
    let service = VariableService::new(setup_db().await);

    let err = service
        .save_variable(VariableInput::new("Bogus", "erp.module.get_total_workdays"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("erp.module.get_total_workdays"));
}

#[tokio::test]
async fn accepts_qualified_path() {
    let service = VariableService::new(setup_db().await);

    let saved = service
        .save_variable(VariableInput::new(
            "Late Shipments",
            "buying.supplier_scorecard_variable.get_late_shipments",
        ))
        .await
        .expect("save");

    assert_eq!(saved.param_name, "late_shipments");
}

#[tokio::test]
async fn custom_resolver_controls_dotted_paths() {
    let resolver = NamespaceResolver::new().with_namespace("acme.kpi", [Metric::TotalShipments]);
    let service = VariableService::with_resolver(setup_db().await, Arc::new(resolver));

    assert!(service
        .save_variable(VariableInput::new("Shipments", "acme.kpi.get_total_shipments"))
        .await
        .is_ok());
    assert!(service
        .save_variable(VariableInput::new(
            "Workdays",
            "buying.supplier_scorecard_variable.get_total_workdays"
        ))
        .await
        .is_err());
}

#[tokio::test]
async fn rejects_empty_label() {
    let service = VariableService::new(setup_db().await);

    let err = service
        .save_variable(VariableInput::new("", "get_total_workdays"))
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::ValidationError(_));

    let err = service
        .save_variable(VariableInput::new("   ", "get_total_workdays"))
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::ValidationError(_));
}

#[tokio::test]
async fn saving_again_updates_in_place() {
    let service = VariableService::new(setup_db().await);

    service
        .save_variable(VariableInput::new("Lateness", "get_total_days_late"))
        .await
        .unwrap();
    let updated = service
        .save_variable(
            VariableInput::new("Lateness", "get_late_shipments")
                .with_param_name("late_count")
                .with_description("late shipment count"),
        )
        .await
        .unwrap();

    assert_eq!(updated.path, "get_late_shipments");
    assert_eq!(updated.param_name, "late_count");

    let all = service.list_variables().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(
        service.get_variable("Lateness").await.unwrap().description.as_deref(),
        Some("late shipment count")
    );
}

#[tokio::test]
async fn failed_update_keeps_previous_record() {
    let service = VariableService::new(setup_db().await);

    service
        .save_variable(VariableInput::new("Lateness", "get_total_days_late"))
        .await
        .unwrap();
    assert!(service
        .save_variable(VariableInput::new("Lateness", "get_lateness"))
        .await
        .is_err());

    assert_eq!(
        service.get_variable("Lateness").await.unwrap().path,
        "get_total_days_late"
    );
}

#[tokio::test]
async fn param_names_must_be_unique() {
    let service = VariableService::new(setup_db().await);

    service
        .save_variable(VariableInput::new("Shipments", "get_total_shipments"))
        .await
        .unwrap();
    let err = service
        .save_variable(
            VariableInput::new("Shipments Again", "get_total_received").with_param_name("shipments"),
        )
        .await
        .unwrap_err();

    assert_matches!(err, ServiceError::ValidationError(msg) if msg.contains("'Shipments'"));
}

#[tokio::test]
async fn missing_variable_is_not_found() {
    let service = VariableService::new(setup_db().await);

    assert_matches!(
        service.get_variable("Nope").await,
        Err(ServiceError::NotFound(_))
    );
}

#[tokio::test]
async fn standard_install_is_idempotent() {
    let service = VariableService::new(setup_db().await);

    assert_eq!(service.install_standard_variables().await.unwrap(), CATALOGUE_SIZE);
    assert_eq!(service.install_standard_variables().await.unwrap(), 0);

    let all = service.list_variables().await.unwrap();
    assert_eq!(all.len(), CATALOGUE_SIZE);
    assert!(all.iter().all(|v| !v.is_custom));

    let workdays = service.get_variable("Total Workdays").await.unwrap();
    assert_eq!(workdays.path, "get_total_workdays");
    assert_eq!(workdays.param_name, "total_workdays");
}

#[tokio::test]
async fn standard_install_skips_taken_param_names() {
    let service = VariableService::new(setup_db().await);

    service
        .save_variable(
            VariableInput::new("My Workdays", "get_total_workdays").with_param_name("total_workdays"),
        )
        .await
        .unwrap();

    assert_eq!(
        service.install_standard_variables().await.unwrap(),
        CATALOGUE_SIZE - 1
    );
}
