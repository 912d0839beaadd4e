use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::testing::ScriptedTransport;

#[test]
fn success_returns_parsed_json() {
    let transport = ScriptedTransport::new();
    transport.reply("/api/characters/1", 200, r#"{"id":1,"name":"Rick Sanchez"}"#);

    let value = block_on(transport.client().get("/api/characters/1")).unwrap();
    assert_eq!(value, json!({ "id": 1, "name": "Rick Sanchez" }));
}

#[test]
fn error_status_carries_parsed_body() {
    let transport = ScriptedTransport::new();
    transport.reply("/api/characters?name=zzz&page=1", 404, r#"{"error":"There is nothing here"}"#);

    let err = block_on(transport.client().get("/api/characters?name=zzz&page=1")).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 404, body: json!({ "error": "There is nothing here" }) });
    assert!(err.is_not_found());
}

#[test]
fn error_status_with_text_body_keeps_raw_text() {
    assert_eq!(
        interpret(502, "<h1>Bad gateway</h1>"),
        Err(ApiError::Status { status: 502, body: json!("<h1>Bad gateway</h1>") })
    );
    assert_eq!(interpret(500, ""), Err(ApiError::Status { status: 500, body: json!("") }));
}

#[test]
fn non_json_success_is_decode_error() {
    assert!(matches!(interpret(200, "not json"), Err(ApiError::Decode { .. })));
}

#[test]
fn transport_failure_is_network_error() {
    let transport = ScriptedTransport::new();
    transport.fail("/api/episodes/1", "connection refused");

    let err = block_on(transport.client().get("/api/episodes/1")).unwrap_err();
    assert_eq!(err, ApiError::Network { message: "connection refused".into() });
    assert_eq!(err.status(), None);
}

#[test]
fn get_as_decodes_typed_view() {
    let transport = ScriptedTransport::new();
    transport.reply("/api/locations/3", 200, r#"{"id":3,"name":"Citadel of Ricks","type":"Space station"}"#);

    let location: catalog::Location = block_on(transport.client().get_as("/api/locations/3")).unwrap();
    assert_eq!(location.name, "Citadel of Ricks");
    assert_eq!(location.kind, "Space station");
}

#[test]
fn get_as_shape_mismatch_is_decode_error() {
    let transport = ScriptedTransport::new();
    transport.reply("/api/characters/1", 200, "[1,2]");

    let result: Result<catalog::Character, _> = block_on(transport.client().get_as("/api/characters/1"));
    assert!(matches!(result, Err(ApiError::Decode { .. })));
}

#[test]
fn base_url_is_prefixed_without_double_slash() {
    let transport = ScriptedTransport::new();
    let client = ApiClient::new("http://localhost:5000/", transport.clone());
    assert_eq!(client.url("/api/characters"), "http://localhost:5000/api/characters");

    transport.reply("http://localhost:5000/health", 200, r#"{"ok":true}"#);
    block_on(client.get("/health")).unwrap();
    assert_eq!(transport.calls(), vec!["http://localhost:5000/health"]);
}

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(list_endpoint(EntityKind::Character, "name=rick&page=2"), "/api/characters?name=rick&page=2");
    assert_eq!(list_endpoint(EntityKind::Episode, ""), "/api/episodes");
    assert_eq!(detail_endpoint(EntityKind::Location, 7), "/api/locations/7");
    assert_eq!(batch_endpoint(EntityKind::Character, &[1, 2, 3]), "/api/characters/1,2,3");
}

#[test]
fn error_serializes_for_error_panel() {
    let err = ApiError::Status { status: 500, body: json!({ "error": "Proxy error" }) };
    let rendered: serde_json::Value = serde_json::from_str(&err.to_pretty_json()).unwrap();
    assert_eq!(rendered, json!({ "kind": "status", "status": 500, "body": { "error": "Proxy error" } }));
}
