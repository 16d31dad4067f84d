use async_trait::async_trait;
use serde_json::json;

use crate::core::error::GatewayError;
use crate::core::tool::{Tool, ToolSpec};

pub const NAME: &str = "remote_hello";

#[derive(Clone, Default)]
pub struct HelloTool;

impl ToolSpec for HelloTool {
    fn name(&self) -> &'static str { NAME }
    fn description(&self) -> &'static str { "Return a friendly greeting" }
    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type":"object",
            "properties": { "name": { "type":"string" }, "user": { "type":"string" } },
            "required": []
        })
    }
}

#[async_trait]
impl Tool for HelloTool {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, GatewayError> {
        let name = ["name", "user"]
            .iter()
            .filter_map(|k| arguments.get(*k).and_then(|v| v.as_str()))
            .find(|s| !s.is_empty())
            .unwrap_or("mundo");
        Ok(json!({ "result": format!("Hola {name} desde Remote Hello") }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn greets_by_name_then_user_then_default() {
        let t = HelloTool;
        let out = t.call(&json!({"name":"Ana","user":"bob"})).await.unwrap();
        assert_eq!(out["result"], "Hola Ana desde Remote Hello");

        let out = t.call(&json!({"name":"","user":"bob"})).await.unwrap();
        assert_eq!(out["result"], "Hola bob desde Remote Hello");

        let out = t.call(&serde_json::Value::Null).await.unwrap();
        assert_eq!(out["result"], "Hola mundo desde Remote Hello");
    }
}
