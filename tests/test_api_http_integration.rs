use axum::body::{to_bytes, Body};
use hyper::{Request, StatusCode};
use palette_mcp_gateway::infra::http_app::build_app_with_rest;
use palette_mcp_gateway::tools::registry::build_registry;
use serde_json::{json, Value as J};
use tower::ServiceExt;

const BODY_LIMIT: usize = 1024 * 1024;

async fn run(body: J) -> (StatusCode, J) {
    let app = build_app_with_rest(build_registry());
    let req = Request::builder()
        .method("POST")
        .uri("/mcp/run")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), BODY_LIMIT).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn http_e2e_every_mode() {
    let cases = [
        ("complementary", 2),
        ("analogous", 3),
        ("triadic", 3),
        ("split_complementary", 3),
        ("tetradic", 4),
    ];
    for (mode, len) in cases {
        let (status, v) = run(json!({
            "tool": "palette_generator",
            "input": { "base_color": "#3366cc", "mode": mode }
        }))
        .await;
        assert_eq!(status, StatusCode::OK, "{mode}");
        let palette = v["palette"].as_array().unwrap();
        assert_eq!(palette.len(), len, "{mode}");
        for c in palette {
            let c = c.as_str().unwrap();
            assert!(c.starts_with('#') && c.len() == 7, "{c}");
            assert_eq!(c, c.to_uppercase());
        }
    }
}

#[tokio::test]
async fn http_e2e_mode_is_normalized() {
    let (status, v) = run(json!({
        "tool": "palette_generator",
        "input": { "base_color": "#f00", "mode": "  Complementary " }
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v, json!({ "palette": ["#FF0000", "#00FFFF"] }));
}

#[tokio::test]
async fn http_e2e_client_errors() {
    let (status, v) = run(json!({
        "tool": "palette_generator",
        "input": { "base_color": "#ZZZ", "mode": "triadic" }
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(v["detail"].is_string());

    let (status, _) = run(json!({
        "tool": "palette_generator",
        "input": { "base_color": "#FFF", "mode": 7 }
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = run(json!({
        "tool": "palette_generator",
        "input": { "base_color": "#3366CC", "mode": "bogus_mode" }
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = run(json!({ "tool": "does.not.exist", "input": {} })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
