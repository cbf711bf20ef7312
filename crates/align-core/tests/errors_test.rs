use align_core::errors::*;

#[test]
fn invalid_input_is_flagged() {
    let err = AlignError::invalid_input("source_text", "must not be empty");
    assert!(err.is_invalid_input());
    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert_eq!(
        err.to_string(),
        "invalid input for source_text: must not be empty"
    );
}

#[test]
fn sub_errors_convert_and_keep_their_codes() {
    let err: AlignError = CatalogError::DuplicateConcept {
        id: "analysis".to_string(),
    }
    .into();
    assert!(!err.is_invalid_input());
    assert_eq!(err.error_code(), "CATALOG_ERROR");
    assert!(err.to_string().contains("duplicate concept id: analysis"));

    let err: AlignError = EmbeddingError::ProviderUnavailable {
        provider: "api".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "EMBEDDING_ERROR");

    let err: AlignError = ConfigError::ValidationFailed {
        field: "scoring".to_string(),
        message: "bad".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn coded_string_prefixes_code() {
    let err = AlignError::AnalysisFailed {
        reason: "regex blew up".to_string(),
    };
    assert_eq!(
        err.coded_string(),
        "[ANALYSIS_FAILED] analysis failed: regex blew up"
    );
}
