// src/tests/router_tests/dashboard_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::templates::components::error::LOAD_FAILED_MESSAGE;
use crate::templates::components::plans::NO_VACANCY_MESSAGE;
use crate::templates::html_error_response;
use crate::tests::utils::{body_string, get, make_ctx, MemorySource, REMOTE_HOTELS, REMOTE_VACANCY};
use serde_json::{json, Value};

fn vacancy() -> Value {
    json!({
        "74732": {
            "2025-08-21": [{ "available": true, "planName": "Standard", "url": "https://x" }],
            "2025-08-22": [{ "available": false, "planName": "Sold out" }]
        },
        "189000": {
            "2025-08-22": [{ "available": true, "planName": "<Suite>" }]
        }
    })
}

fn remote() -> MemorySource {
    MemorySource::new(&[
        (REMOTE_HOTELS, json!({ "hotels": ["74732", "189000"] })),
        (REMOTE_VACANCY, vacancy()),
    ])
}

#[test]
fn dashboard_renders_calendar_and_todays_plans() {
    let ctx = make_ctx(remote(), None);

    let resp = handle(get("/"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    // Registry order drives row order
    let dlh = body.find("DLH").expect("DLH row missing");
    let fsh = body.find("FSH").expect("FSH row missing");
    assert!(dlh < fsh);

    assert!(body.contains("2025/8"));
    assert!(body.contains("21(木)"));
    assert!(body.contains("選択日：2025-08-21"));
    assert!(body.contains("Standard"));
    assert!(body.contains(r#"href="https://x""#));
    assert!(!body.contains("Sold out"));
    // first day of the range: no previous-day button
    assert!(!body.contains("btnPrevDay"));
    assert!(body.contains("btnNextDay"));
}

#[test]
fn selecting_a_date_changes_the_plan_list() {
    let ctx = make_ctx(remote(), None);

    let body = body_string(handle(get("/?date=2025-08-22"), &ctx).unwrap());

    assert!(body.contains("選択日：2025-08-22"));
    assert!(body.contains("ファンタジースプリングスホテル - 2025-08-22"));
    // plan names are escaped
    assert!(body.contains("&lt;Suite&gt;"));
    assert!(!body.contains("Standard"));
}

#[test]
fn date_outside_range_keeps_today() {
    let ctx = make_ctx(remote(), None);

    for uri in ["/?date=2025-09-01", "/?date=not-a-date", "/?date=2025-08-20"] {
        let body = body_string(handle(get(uri), &ctx).unwrap());
        assert!(body.contains("選択日：2025-08-21"), "{uri} moved the selection");
    }
}

#[test]
fn step_moves_one_day_and_stops_at_edges() {
    let ctx = make_ctx(remote(), None);

    let body = body_string(handle(get("/?date=2025-08-21&step=1"), &ctx).unwrap());
    assert!(body.contains("選択日：2025-08-22"));

    let body = body_string(handle(get("/?date=2025-08-31&step=1"), &ctx).unwrap());
    assert!(body.contains("選択日：2025-08-31"));
    assert!(!body.contains("btnNextDay"));
}

#[test]
fn huge_step_is_ignored() {
    let ctx = make_ctx(remote(), None);

    for uri in [
        "/?date=2025-08-22&step=9223372036854775807",
        "/?date=2025-08-22&step=-9223372036854775808",
    ] {
        let resp = handle(get(uri), &ctx).unwrap();
        assert_eq!(resp.status(), 200);
        assert!(body_string(resp).contains("選択日：2025-08-22"), "{uri} moved the selection");
    }
}

#[test]
fn today_link_resets_selection() {
    let ctx = make_ctx(remote(), None);

    let body = body_string(handle(get("/?date=today"), &ctx).unwrap());
    assert!(body.contains("選択日：2025-08-21"));
    assert!(body.contains(r#"href="/?date=today#calendar-section""#));
}

#[test]
fn day_without_vacancy_shows_empty_message() {
    let ctx = make_ctx(remote(), None);

    let body = body_string(handle(get("/plans?date=2025-08-25"), &ctx).unwrap());

    assert!(body.contains(NO_VACANCY_MESSAGE));
    assert!(!body.contains("<html"));
}

#[test]
fn query_overrides_pick_sources_and_survive_navigation() {
    let remote = MemorySource::new(&[
        ("https://mirror.test/h.json", json!({ "hotels": { "74732": { "abbr": "XYZ" } } })),
        ("https://mirror.test/v.json", vacancy()),
    ]);
    let mut ctx = make_ctx(remote, None);
    ctx.config.allow_source_override = true;

    let resp = handle(
        get("/?hotels=https%3A%2F%2Fmirror.test%2Fh.json&vacancy=https%3A%2F%2Fmirror.test%2Fv.json"),
        &ctx,
    )
    .unwrap();
    let body = body_string(resp);

    assert!(body.contains("XYZ"));
    assert!(body.contains("vacancy=https%3A%2F%2Fmirror.test%2Fv.json"));
}

#[test]
fn overrides_are_ignored_when_disabled() {
    let ctx = make_ctx(remote(), None);

    let resp = handle(get("/?hotels=http%3A%2F%2F10.0.0.5%2Fh.json"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    // configured registry still drives the rows
    assert!(body.contains("DLH"));
    assert!(!body.contains("10.0.0.5"));
}

#[test]
fn failed_load_falls_back_to_local_documents() {
    let local = MemorySource::new(&[
        ("./hotels.json", json!({ "hotels": ["74733"] })),
        ("./vacancy.json", json!({ "74733": { "2025-08-21": [{ "available": true, "planName": "Local" }] } })),
    ]);
    let ctx = make_ctx(MemorySource::new(&[]), Some(local));

    let body = body_string(handle(get("/"), &ctx).unwrap());

    assert!(body.contains("MIR"));
    assert!(body.contains("Local"));
}

#[test]
fn failed_load_renders_single_error_page() {
    let ctx = make_ctx(
        MemorySource::new(&[(REMOTE_HOTELS, json!({ "hotels": ["74732"] }))]),
        Some(MemorySource::new(&[])),
    );

    let resp = handle(get("/"), &ctx).unwrap();
    assert_eq!(resp.status(), 502);
    let body = body_string(resp);
    assert!(body.contains(LOAD_FAILED_MESSAGE));
    assert!(!body.contains("calendar-section"));
    assert!(body.contains(r#"href="/""#));

    // fragment requests surface the load error to the server loop
    let err = handle(get("/plans"), &ctx).unwrap_err();
    assert!(matches!(err, ServerError::Load(_)));
    assert_eq!(html_error_response(err).status(), 502);
}

#[test]
fn retry_link_keeps_source_overrides() {
    let mut ctx = make_ctx(MemorySource::new(&[]), None);
    ctx.config.allow_source_override = true;

    let resp = handle(get("/?vacancy=https%3A%2F%2Fmirror.test%2Fv.json"), &ctx).unwrap();
    assert_eq!(resp.status(), 502);
    let body = body_string(resp);

    assert!(body.contains(LOAD_FAILED_MESSAGE));
    assert!(body.contains(r#"href="/?vacancy=https%3A%2F%2Fmirror.test%2Fv.json""#));
}

#[test]
fn script_urls_are_not_linked() {
    let ctx = make_ctx(
        MemorySource::new(&[
            (REMOTE_HOTELS, json!({ "hotels": ["74732"] })),
            (
                REMOTE_VACANCY,
                json!({ "74732": { "2025-08-21": [{ "available": true, "planName": "Trap", "url": "javascript:alert(1)" }] } }),
            ),
        ]),
        None,
    );

    let body = body_string(handle(get("/"), &ctx).unwrap());

    assert!(body.contains("Trap"));
    assert!(!body.contains("javascript:"));
}

#[test]
fn unknown_route_is_not_found() {
    let ctx = make_ctx(remote(), None);

    let err = handle(get("/nope"), &ctx).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(html_error_response(err).status(), 404);
}

#[test]
fn stylesheet_is_served() {
    let ctx = make_ctx(remote(), None);

    let resp = handle(get("/static/calendar.css"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(".cell-btn"));
}
