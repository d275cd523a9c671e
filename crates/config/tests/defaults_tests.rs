//! Transaction defaults parsing tests.

use icon_config::{
    ConfigError, NetworkType, TransactionDefaults, DEFAULT_STEP_LIMIT, TRANSACTION_VERSION,
};

#[test]
fn test_defaults_target_mainnet_v3() {
    let defaults = TransactionDefaults::default();
    assert_eq!(defaults.network, NetworkType::MainNet);
    assert_eq!(defaults.version, TRANSACTION_VERSION);
    assert_eq!(defaults.step_limit, Some(DEFAULT_STEP_LIMIT));
}

#[test]
fn test_partial_toml_keeps_remaining_defaults() {
    let defaults = TransactionDefaults::from_toml_str("network = \"yeouido\"\n").unwrap();
    assert_eq!(defaults.network, NetworkType::Yeouido);
    assert_eq!(defaults.network.nid(), 3);
    assert_eq!(defaults.version, 3);
    assert_eq!(defaults.step_limit, Some(100_000));
}

#[test]
fn test_full_toml() {
    let text = r#"
        network = "private:0x53"
        version = 3
        step_limit = 2500000
    "#;
    let defaults = TransactionDefaults::from_toml_str(text).unwrap();
    assert_eq!(defaults, TransactionDefaults {
        network: NetworkType::Private(0x53),
        version: 3,
        step_limit: Some(2_500_000),
    });
}

#[test]
fn test_unknown_network_is_rejected() {
    let err = TransactionDefaults::from_toml_str("network = \"atlantis\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(message) if message.contains("atlantis")));
}

#[test]
fn test_network_serializes_as_string() {
    let json = serde_json::to_string(&TransactionDefaults::for_network(NetworkType::Berlin)).unwrap();
    assert!(json.contains("\"network\":\"berlin\""));

    let back: TransactionDefaults = serde_json::from_str(&json).unwrap();
    assert_eq!(back.network, NetworkType::Berlin);
}
