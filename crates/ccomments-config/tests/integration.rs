use ccomments_config::{ConfigError, OverlayConfig};
use serde_json::json;

#[test]
fn full_document_round_trips_through_json() -> Result<(), ConfigError> {
    let document = json!({
        "storage_key": "gitlab-macros",
        "field_selectors": ["textarea.note-textarea"],
        "container_selectors": [".note-form"],
        "anchor_selectors": [".md-area"],
        "poll_interval_ms": 1500,
        "navigation_events": [],
        "style_element_id": "gl-cc-styles"
    })
    .to_string();

    let config = OverlayConfig::from_json(&document)?;
    assert_eq!(config.storage_key, "gitlab-macros");
    assert_eq!(config.field_selectors.joined(), "textarea.note-textarea");
    assert!(config.navigation_events.is_empty());

    let encoded = serde_json::to_string(&config).map_err(|source| ConfigError::Parse { source })?;
    assert_eq!(OverlayConfig::from_json(&encoded)?, config);
    Ok(())
}

#[test]
fn invalid_document_reports_field_context() {
    let document = json!({ "field_selectors": [] }).to_string();
    match OverlayConfig::from_json(&document) {
        Err(ConfigError::InvalidField { field, reason, value }) => {
            assert_eq!(field, "field_selectors");
            assert_eq!(reason, "empty");
            assert!(value.is_none());
        }
        other => panic!("expected invalid field error, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        OverlayConfig::from_json("not json"),
        Err(ConfigError::Parse { .. })
    ));
}
