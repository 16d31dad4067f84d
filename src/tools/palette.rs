use async_trait::async_trait;
use serde_json::json;

use crate::core::error::GatewayError;
use crate::core::tool::{required_str, Tool, ToolSpec};
use crate::domain::color::is_hex_color;
use crate::domain::{generate_palette, Scheme};

pub const NAME: &str = "palette_generator";

#[derive(Clone, Default)]
pub struct PaletteTool;

impl ToolSpec for PaletteTool {
    fn name(&self) -> &'static str {
        NAME
    }
    fn description(&self) -> &'static str {
        "Generate a color-harmony palette from a base hex color; returns {\"palette\": [...]}"
    }
    fn input_schema(&self) -> serde_json::Value {
        let modes: Vec<&str> = Scheme::ALL.iter().map(|s| s.as_str()).collect();
        json!({
          "type":"object",
          "properties": {
            "base_color": { "type":"string", "description": "#RGB or #RRGGBB" },
            "mode": { "type":"string", "enum": modes }
          },
          "required": ["base_color", "mode"]
        })
    }
}

#[async_trait]
impl Tool for PaletteTool {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, GatewayError> {
        let base = required_str(arguments, "base_color")?;
        // Wire input must carry the `#`; the codec itself accepts either form.
        if !base.starts_with('#') || !is_hex_color(base) {
            return Err(GatewayError::InvalidFormat {
                field: "base_color",
                value: base.to_owned(),
            });
        }
        let mode = required_str(arguments, "mode")?;
        let palette = generate_palette(base, mode)?;
        tracing::debug!(base, mode, colors = palette.len(), "palette generated");
        Ok(json!({ "palette": palette }))
    }
}
