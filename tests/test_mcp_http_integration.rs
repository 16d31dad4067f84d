use std::sync::Arc;

use axum::{routing::any_service, Router};
use http_body_util::BodyExt; // for .collect
use hyper::{header, Request, StatusCode};
use serde_json::{json, Value};
use tokio::time::{timeout, Duration};
use tower::ServiceExt; // for .oneshot

use palette_mcp_gateway::infra::runtime::mcp_transport;
use palette_mcp_gateway::tools::{mcp_router, registry::build_registry};

static MCP_PROTOCOL_VERSION: &str = "0.5";

fn post(body: &Value, session: Option<&str>) -> Request<axum::body::Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json");
    builder = match session {
        Some(id) => builder.header("MCP-Session-Id", id),
        None => builder.header("MCP-Protocol-Version", MCP_PROTOCOL_VERSION),
    };
    builder.body(axum::body::Body::from(body.to_string())).unwrap()
}

async fn sse_json(res: hyper::Response<axum::body::Body>) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let s = String::from_utf8_lossy(&bytes);
    s.lines()
        .find_map(|line| line.strip_prefix("data: ").map(|d| d.to_string()))
        .and_then(|d| serde_json::from_str::<Value>(&d).ok())
        .expect("Did not find an rpcResponse in the event stream")
}

#[tokio::test]
async fn initialize_list_and_call_over_streamable_http() {
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let svc = mcp_transport::make_streamable_http_service(mcp_router::factory(build_registry()), session_mgr);
    let app = Router::new().route_service("/mcp", any_service(svc));

    // Initialize
    let init = json!({
        "jsonrpc":"2.0","id":1,"method":"initialize",
        "params":{ "protocolVersion":"2025-03-26","capabilities":{},"clientInfo":{"name":"test","version":"0.1"} }
    });
    let init_res = app.clone().oneshot(post(&init, None)).await.unwrap();
    assert!(init_res.status().is_success());
    let session_id = init_res
        .headers()
        .get("MCP-Session-Id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();

    // notifications/initialized
    let initialized = json!({"jsonrpc":"2.0","method":"notifications/initialized","params":{}});
    let res = app.clone().oneshot(post(&initialized, Some(&session_id))).await.unwrap();
    assert_eq!(res.status(), StatusCode::ACCEPTED);

    // tools/list
    let list = json!({"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}});
    let list_res = timeout(Duration::from_secs(20), app.clone().oneshot(post(&list, Some(&session_id))))
        .await
        .unwrap()
        .unwrap();
    assert!(list_res.status().is_success());
    let v = sse_json(list_res).await;
    let names: Vec<&str> = v["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    assert!(names.contains(&"palette_generator"), "{names:?}");
    assert!(names.contains(&"remote_hello"), "{names:?}");

    // tools/call
    let call = json!({
        "jsonrpc":"2.0","id":3,"method":"tools/call",
        "params": {"name":"palette_generator","arguments":{"base_color":"#FF0000","mode":"complementary"}}
    });
    let call_res = timeout(Duration::from_secs(20), app.clone().oneshot(post(&call, Some(&session_id))))
        .await
        .unwrap()
        .unwrap();
    assert!(call_res.status().is_success());
    let v = sse_json(call_res).await;
    assert_eq!(
        v["result"]["structuredContent"]["palette"],
        json!(["#FF0000", "#00FFFF"])
    );
}
