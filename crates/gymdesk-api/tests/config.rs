use std::collections::HashMap;

use gymdesk_api::config::{ApiConfig, DEFAULT_BUCKET, StoreKind};

fn config(vars: &[(&str, &str)]) -> eyre::Result<ApiConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ApiConfig::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn defaults_target_s3_under_lambda() {
    let cfg = config(&[]).unwrap();
    assert_eq!(cfg.store, StoreKind::S3);
    assert_eq!(cfg.bucket, DEFAULT_BUCKET);
    assert_eq!(cfg.bind, None);
    assert!(!cfg.seed);
}

#[test]
fn memory_store_seeds_unless_disabled() {
    let cfg = config(&[("GYMDESK_STORE", "Memory"), ("GYMDESK_BIND", "127.0.0.1:8080")]).unwrap();
    assert_eq!(cfg.store, StoreKind::Memory);
    assert_eq!(cfg.bind, Some("127.0.0.1:8080".parse().unwrap()));
    assert!(cfg.seed);

    let cfg = config(&[("GYMDESK_STORE", "memory"), ("GYMDESK_SEED", "false")]).unwrap();
    assert!(!cfg.seed);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config(&[("GYMDESK_BUCKET", "  "), ("GYMDESK_BIND", "")]).unwrap();
    assert_eq!(cfg.bucket, DEFAULT_BUCKET);
    assert_eq!(cfg.bind, None);
}

#[test]
fn invalid_values_are_errors() {
    assert!(config(&[("GYMDESK_STORE", "dynamo")]).is_err());
    assert!(config(&[("GYMDESK_BIND", "not an address")]).is_err());
    assert!(config(&[("GYMDESK_SEED", "maybe")]).is_err());
}
