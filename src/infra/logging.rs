use std::time::Duration;

use crate::core::error::GatewayError;

pub fn init() {
    // Initialize tracing subscriber once, honoring RUST_LOG if set.
    // Default to info level; allow override via RUST_LOG (e.g., "debug").
    // Logs go to stderr so stdio mode keeps stdout for MCP frames.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Emit a metric through the `metrics` facade and mirror it as a log line.
/// Without an installed recorder the facade is a no-op.
pub fn log_metric(tool: &str, metric: &'static str, value: f64) {
    metrics::histogram!(metric, "tool" => tool.to_owned()).record(value);
    tracing::info!(tool = tool, metric = metric, value = value, "metric");
}

/// Count a finished tool call and record its latency.
pub fn record_tool_call(tool: &'static str, out: &Result<serde_json::Value, GatewayError>, elapsed: Duration) {
    let outcome = match out {
        Ok(_) => "ok",
        Err(e) if e.is_client_error() => "rejected",
        Err(_) => "error",
    };
    metrics::counter!("tool_calls_total", "tool" => tool, "outcome" => outcome).increment(1);
    log_metric(tool, "tool_call_latency_ms", elapsed.as_secs_f64() * 1000.0);
    if let Err(e) = out {
        tracing::warn!(tool, outcome, error = %e, "tool call failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }

    #[test]
    fn recording_without_recorder_is_noop() {
        record_tool_call("palette_generator", &Ok(serde_json::json!({})), Duration::from_millis(1));
        record_tool_call(
            "palette_generator",
            &Err(GatewayError::MissingField("mode")),
            Duration::from_millis(1),
        );
        log_metric("remote_hello", "tool_call_latency_ms", 0.5);
    }
}
