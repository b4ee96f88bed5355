use crate::router::handle;
use crate::tests::utils::{body_string, get, make_ctx, MemorySource, REMOTE_HOTELS, REMOTE_VACANCY};
use serde_json::{json, Value};

fn ctx_for(registry: Value) -> crate::router::AppContext {
    make_ctx(
        MemorySource::new(&[
            (REMOTE_HOTELS, registry),
            (
                REMOTE_VACANCY,
                json!({ "74732": { "2025-08-21": [{ "available": true, "planName": "Standard", "url": "https://x" }] } }),
            ),
        ]),
        None,
    )
}

fn json_body(uri: &str, registry: Value) -> (u16, Value) {
    let resp = handle(get(uri), &ctx_for(registry)).unwrap();
    let status = resp.status().as_u16();
    (status, serde_json::from_str(&body_string(resp)).unwrap())
}

#[test]
fn plans_api_returns_one_group_for_available_day() {
    let (status, body) = json_body("/api/plans?date=2025-08-21", json!({ "hotels": ["74732"] }));

    assert_eq!(status, 200);
    assert_eq!(body["date"], "2025-08-21");
    let hotels = body["hotels"].as_array().unwrap();
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0]["hotel"]["id"], "74732");
    assert_eq!(hotels[0]["plans"][0]["plan_name"], "Standard");
}

#[test]
fn plans_api_returns_nothing_for_empty_day() {
    let (_, body) = json_body("/api/plans?date=2025-08-22", json!({ "hotels": ["74732"] }));
    assert_eq!(body["hotels"], json!([]));
}

#[test]
fn plans_api_defaults_to_today() {
    let (_, body) = json_body("/api/plans", json!({ "hotels": ["74732"] }));
    assert_eq!(body["date"], "2025-08-21");
}

#[test]
fn plans_api_rejects_bad_date() {
    let (status, body) = json_body("/api/plans?date=08%2F21", json!({ "hotels": ["74732"] }));

    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("invalid date"));
}

#[test]
fn hotels_api_reports_registry_shape() {
    let (_, body) = json_body("/api/hotels", json!({ "hotels": { "74732": { "abbr": "DLH" } } }));

    assert_eq!(body["shape"], "recognized_map");
    assert_eq!(body["hotels"][0]["abbreviation"], "DLH");
    assert_eq!(body["hotels"][0]["display_name"], "ディズニーランドホテル");

    let (_, body) = json_body("/api/hotels", json!({ "hotels": 12 }));
    assert_eq!(body["shape"], "unrecognized_fallback");
    assert_eq!(body["hotels"].as_array().unwrap().len(), 6);
}

#[test]
fn api_load_failure_is_json() {
    let ctx = make_ctx(MemorySource::new(&[]), None);

    let resp = handle(get("/api/hotels"), &ctx).unwrap();
    assert_eq!(resp.status(), 502);
    let body: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert!(body["error"].as_str().unwrap().contains("Failed to load data"));
}
