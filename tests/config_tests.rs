//! Integration tests for form configuration loading

use bloom_pizza::prelude::*;
use std::io::Write;

#[test]
fn test_load_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
endpoint: https://orders.example.com/api/order
timeout_ms: 2500
toppings_required: true
validation_mode: on_submit
"#
    )
    .unwrap();

    let config = FormConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.endpoint, "https://orders.example.com/api/order");
    assert_eq!(config.timeout().as_millis(), 2500);
    assert!(config.toppings_required);
    assert_eq!(config.validation_mode, ValidationMode::OnSubmit);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    assert!(FormConfig::from_yaml_file(path.to_str().unwrap()).is_err());
}

#[test]
fn test_empty_endpoint_is_rejected() {
    let err = FormConfig::from_yaml_str("endpoint: \"\"\n").unwrap_err();
    assert!(err.to_string().contains("endpoint"));
}

#[test]
fn test_unknown_validation_mode_is_rejected() {
    assert!(FormConfig::from_yaml_str("validation_mode: whenever\n").is_err());
}

#[test]
fn test_config_drives_schema_and_form() {
    let config = FormConfig::from_yaml_str("toppings_required: true\n").unwrap();
    let mut form = OrderForm::new(config);

    form.update_field(FieldChange::FullName("Alice".into()));
    form.update_field(FieldChange::Size("M".into()));
    assert!(!form.is_submittable());
    assert_eq!(
        form.validate().get(Field::Toppings),
        Some("Select at least one topping")
    );

    form.update_field(FieldChange::Topping {
        id: "4".into(),
        checked: true,
    });
    assert!(form.is_submittable());
}

#[test]
fn test_gateway_from_loaded_config() {
    let config = FormConfig::from_yaml_str("endpoint: http://127.0.0.1:9009/api/order\n").unwrap();
    let gateway = HttpOrderGateway::from_config(&config).unwrap();
    assert_eq!(gateway.endpoint(), "http://127.0.0.1:9009/api/order");
}
