use async_trait::async_trait;

use crate::core::error::GatewayError;

/// Minimal metadata every tool must expose.
pub trait ToolSpec {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_schema(&self) -> serde_json::Value;
}

/// Tool = Spec + call. `arguments` is the untyped payload from the caller.
#[async_trait]
pub trait Tool: ToolSpec + Send + Sync {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, GatewayError>;
}

/// Pull a required string field out of a tool payload.
pub fn required_str<'a>(
    arguments: &'a serde_json::Value,
    field: &'static str,
) -> Result<&'a str, GatewayError> {
    arguments
        .get(field)
        .and_then(|v| v.as_str())
        .ok_or(GatewayError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl ToolSpec for Echo {
        fn name(&self) -> &'static str {
            "test.echo"
        }
        fn description(&self) -> &'static str {
            "echo tool"
        }
        fn input_schema(&self) -> serde_json::Value {
            serde_json::json!({"type":"object"})
        }
    }

    #[async_trait]
    impl Tool for Echo {
        async fn call(&self, args: &serde_json::Value) -> Result<serde_json::Value, GatewayError> {
            Ok(args.clone())
        }
    }

    #[tokio::test]
    async fn it_runs_echo() {
        let t = Echo;
        let out = t.call(&serde_json::json!({"x":1})).await.unwrap();
        assert_eq!(out["x"], 1);
    }

    #[test]
    fn required_str_rejects_absent_and_non_string() {
        let args = serde_json::json!({"mode": 3, "base_color": "#fff"});
        assert_eq!(required_str(&args, "base_color").unwrap(), "#fff");
        assert!(matches!(required_str(&args, "mode"), Err(GatewayError::MissingField("mode"))));
        assert!(matches!(
            required_str(&serde_json::Value::Null, "mode"),
            Err(GatewayError::MissingField("mode"))
        ));
    }
}
