use std::collections::HashMap;

use align_core::config::*;
use align_core::errors::{AlignErrorCode, ConfigError};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = AlignConfig::from_toml("").unwrap();

    // Scoring defaults
    assert_eq!(config.scoring.semantic_weight, 0.4);
    assert_eq!(config.scoring.concept_weight, 0.4);
    assert_eq!(config.scoring.coherence_weight, 0.2);
    assert_eq!(config.scoring.baseline_blend, 0.3);
    assert_eq!(config.scoring.low_signal_threshold, 0.2);
    assert_eq!(config.scoring.low_signal_penalty, 0.7);

    // Similarity defaults
    assert_eq!(config.similarity.backend, "concept_overlap");
    assert_eq!(config.similarity.related_discount, 0.6);

    // Embedding defaults
    assert_eq!(config.embedding.provider, "tfidf");
    assert_eq!(config.embedding.dimensions, 256);
    assert!(config.embedding.api_key.is_none());

    // Explanation defaults
    assert_eq!(config.explanation.max_suggestions, 5);
    assert_eq!(config.explanation.high_weight_threshold, 0.8);

    // Catalog and observability defaults
    assert!(config.catalog.path.is_none());
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);

    config.validate().unwrap();
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[scoring]
semantic_weight = 0.3
concept_weight = 0.4
coherence_weight = 0.3

[similarity]
backend = "embedding"

[embedding]
dimensions = 64
"#;
    let config = AlignConfig::from_toml(toml).unwrap();
    assert_eq!(config.scoring.semantic_weight, 0.3);
    assert_eq!(config.scoring.coherence_weight, 0.3);
    // Non-overridden fields keep defaults
    assert_eq!(config.scoring.baseline_blend, 0.3);
    assert_eq!(config.similarity.backend, "embedding");
    assert_eq!(config.embedding.dimensions, 64);
    assert_eq!(config.embedding.provider, "tfidf");
    config.validate().unwrap();
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = AlignConfig::from_toml("[scoring\nsemantic_weight = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { ref path, .. } if path == "<string>"));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn weights_must_sum_to_one() {
    let mut config = AlignConfig::default();
    config.scoring = ScoringConfig::with_weights(0.5, 0.5, 0.5);
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "scoring"));
}

#[test]
fn out_of_range_values_are_rejected() {
    let mut config = AlignConfig::default();
    config.scoring.baseline_blend = 1.5;
    assert!(config.validate().is_err());

    let mut config = AlignConfig::default();
    config.similarity.related_discount = 0.0;
    assert!(config.validate().is_err());

    let mut config = AlignConfig::default();
    config.explanation.max_suggestions = 6;
    assert!(config.validate().is_err());

    let mut config = AlignConfig::default();
    config.scoring.semantic_weight = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn unknown_backend_and_provider_are_rejected() {
    let mut config = AlignConfig::default();
    config.similarity.backend = "neural".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("similarity.backend"));

    let mut config = AlignConfig::default();
    config.embedding.provider = "onnx".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn env_style_overrides_apply() {
    let vars: HashMap<&str, &str> = [
        ("ALIGN_SIMILARITY_BACKEND", "embedding"),
        ("ALIGN_EMBEDDING_PROVIDER", "api"),
        ("ALIGN_EMBEDDING_ENDPOINT", "http://localhost:9/embed"),
        ("ALIGN_CATALOG_PATH", "/tmp/catalog.toml"),
        ("ALIGN_JSON_LOGS", "true"),
    ]
    .into_iter()
    .collect();

    let mut config = AlignConfig::default();
    config.apply_overrides_from(|k| vars.get(k).map(|v| v.to_string()));

    assert_eq!(config.similarity.backend, "embedding");
    assert_eq!(config.embedding.provider, "api");
    assert_eq!(
        config.embedding.api_endpoint.as_deref(),
        Some("http://localhost:9/embed")
    );
    assert_eq!(config.catalog.path.as_deref(), Some("/tmp/catalog.toml"));
    assert!(config.observability.json_logs);
    // Untouched keys keep their values.
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn cli_overrides_take_priority() {
    let mut config = AlignConfig::default();
    config.observability.log_level = "warn".to_string();
    let cli = CliOverrides {
        log_level: Some("debug".to_string()),
        similarity_backend: Some("embedding".to_string()),
        ..Default::default()
    };
    AlignConfig::apply_cli_overrides(&mut config, &cli);
    assert_eq!(config.observability.log_level, "debug");
    assert_eq!(config.similarity.backend, "embedding");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let err = AlignConfig::load(Some(std::path::Path::new("/nonexistent/align.toml")), None)
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn config_round_trips_through_toml() {
    let config = AlignConfig::default();
    let text = toml::to_string(&config).unwrap();
    let back = AlignConfig::from_toml(&text).unwrap();
    assert_eq!(back.scoring.semantic_weight, config.scoring.semantic_weight);
    assert_eq!(back.similarity.backend, config.similarity.backend);
}
