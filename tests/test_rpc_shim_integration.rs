use axum::body::{to_bytes, Body};
use hyper::Request;
use palette_mcp_gateway::infra::http_app::build_app_with_rest;
use palette_mcp_gateway::tools::registry::build_registry;
use serde_json::Value as J;
use tower::ServiceExt;

const BODY_LIMIT: usize = 1024 * 1024;

#[tokio::test]
async fn it_lists_and_calls_over_json_rpc() {
    let app = build_app_with_rest(build_registry());

    // list
    let list = Request::builder()
        .method("POST")
        .uri("/v1/rpc")
        .header("content-type", "application/json")
        .body(Body::from(r##"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"##))
        .unwrap();
    let resp = app.clone().oneshot(list).await.unwrap();
    assert!(resp.status().is_success());
    let bytes = to_bytes(resp.into_body(), BODY_LIMIT).await.unwrap();
    let v: J = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v["result"]["tools"].as_array().unwrap().len(), 2);

    // call
    let call = Request::builder()
        .method("POST")
        .uri("/v1/rpc")
        .header("content-type","application/json")
        .body(Body::from(r##"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"palette_generator","arguments":{"base_color":"#FF0000","mode":"triadic"}}}"##)).unwrap();
    let resp = app.clone().oneshot(call).await.unwrap();
    let bytes = to_bytes(resp.into_body(), BODY_LIMIT).await.unwrap();
    let v: J = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v["result"]["palette"], serde_json::json!(["#FF0000", "#00FF00", "#0000FF"]));
}
