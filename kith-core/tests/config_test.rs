//! Config defaults and TOML loading.

use kith_core::config::{EventsConfig, KithConfig, SuggestConfig, TrustConfig};

#[test]
fn defaults_match_the_documented_values() {
    let trust = TrustConfig::default();
    assert!((trust.base - 10.0).abs() < f64::EPSILON);
    assert!((trust.per_connection - 2.0).abs() < f64::EPSILON);
    assert!((trust.connection_bonus_cap - 20.0).abs() < f64::EPSILON);
    assert!((trust.per_group - 3.0).abs() < f64::EPSILON);
    assert!((trust.group_bonus_cap - 15.0).abs() < f64::EPSILON);

    let suggest = SuggestConfig::default();
    assert!((suggest.mutual_weight - 5.0).abs() < f64::EPSILON);
    assert_eq!(suggest.default_limit, 10);

    let events = EventsConfig::default();
    assert_eq!(events.channel_capacity, 1024);
    assert_eq!(events.max_reconnect_attempts, 0);
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let config = KithConfig::from_toml(
        r#"
        [trust]
        base = 25.0
        connection_bonus_cap = 30.0

        [suggest]
        mutual_weight = 8.0

        [events]
        channel_capacity = 64
        "#,
    )
    .unwrap();

    assert!((config.trust.base - 25.0).abs() < f64::EPSILON);
    assert!((config.trust.connection_bonus_cap - 30.0).abs() < f64::EPSILON);
    // Untouched fields keep defaults.
    assert!((config.trust.per_connection - 2.0).abs() < f64::EPSILON);
    assert!((config.suggest.mutual_weight - 8.0).abs() < f64::EPSILON);
    assert_eq!(config.suggest.default_limit, 10);
    assert_eq!(config.events.channel_capacity, 64);
    assert_eq!(config.events.reconnect_delay_secs, 5);
}

#[test]
fn empty_toml_is_all_defaults() {
    let config = KithConfig::from_toml("").unwrap();
    assert!((config.trust.base - TrustConfig::default().base).abs() < f64::EPSILON);
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = KithConfig::from_toml("trust = \"not a table\"").unwrap_err();
    assert!(matches!(err, kith_core::errors::KithError::Config(_)));
}
