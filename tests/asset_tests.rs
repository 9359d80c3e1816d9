// Validation of fetched animation documents.

use folio_core::asset::{is_json_content_type, parse_header, validate_response};
use folio_core::AssetError;

const DOC: &str = r#"{"v":"5.7.4","fr":30,"ip":0,"op":90,"w":512,"h":512,"nm":"data-flow","layers":[]}"#;

#[test]
fn accepts_a_json_document_with_frames() {
    let header = validate_response(200, Some("application/json"), DOC).unwrap();
    assert_eq!(header.total_frames(), 90.0);
    assert_eq!(header.duration_secs(), Some(3.0));
    assert_eq!(header.name.as_deref(), Some("data-flow"));
}

#[test]
fn content_type_parameters_and_case_are_tolerated() {
    assert!(is_json_content_type(Some("application/json; charset=utf-8")));
    assert!(is_json_content_type(Some("Application/JSON")));
    assert!(!is_json_content_type(Some("text/html")));
    assert!(!is_json_content_type(None));
}

#[test]
fn non_success_status_is_rejected_first() {
    let err = validate_response(404, Some("text/html"), "<html>").unwrap_err();
    assert!(matches!(err, AssetError::Status(404)));
    assert_eq!(err.to_string(), "failed to load animation: HTTP 404");
}

#[test]
fn html_served_with_200_is_not_an_animation() {
    let err = validate_response(200, Some("text/html"), "<!doctype html>").unwrap_err();
    assert!(matches!(err, AssetError::NotJson(Some(ref ct)) if ct == "text/html"));
}

#[test]
fn malformed_or_empty_timelines_are_rejected() {
    assert!(matches!(parse_header("{not json"), Err(AssetError::Malformed(_))));
    assert!(matches!(parse_header(r#"{"fr":30}"#), Err(AssetError::Malformed(_))));
    assert!(matches!(
        parse_header(r#"{"fr":30,"ip":10,"op":10}"#),
        Err(AssetError::EmptyTimeline { .. })
    ));
}

#[test]
fn optional_fields_may_be_missing() {
    let header = parse_header(r#"{"fr":0,"ip":5,"op":65}"#).unwrap();
    assert_eq!(header.total_frames(), 60.0);
    assert_eq!(header.duration_secs(), None);
    assert_eq!(header.width, None);
}
