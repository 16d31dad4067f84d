use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::core::error::GatewayError;
use crate::core::tool::Tool;
use crate::infra::logging::record_tool_call;
use crate::tools::{hello::HelloTool, palette::PaletteTool};

#[derive(Clone, Default)]
pub struct ToolRegistry {
    by_name: Arc<HashMap<&'static str, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tools<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Tool>>,
    {
        let map: HashMap<&'static str, Arc<dyn Tool>> = iter.into_iter().map(|t| (t.name(), t)).collect();
        Self { by_name: Arc::new(map) }
    }

    /// Adds a tool. Clones taken earlier keep their own map.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        Arc::make_mut(&mut self.by_name).insert(tool.name(), tool);
    }

    /// Tool metadata sorted by name.
    pub fn list(&self) -> Vec<ToolMeta> {
        let mut metas: Vec<ToolMeta> = self
            .by_name
            .values()
            .map(|t| ToolMeta {
                name: t.name(),
                description: t.description(),
                input_schema: t.input_schema(),
            })
            .collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.list().into_iter().map(|m| m.name).collect()
    }

    pub async fn call(&self, name: &str, args: &serde_json::Value) -> Result<serde_json::Value, GatewayError> {
        let Some(t) = self.by_name.get(name) else {
            tracing::warn!(tool = name, "unknown tool");
            return Err(GatewayError::UnknownTool(name.to_owned()));
        };
        let start = Instant::now();
        let out = t.call(args).await;
        record_tool_call(t.name(), &out, start.elapsed());
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
}

/// Registry with every tool this gateway serves.
pub fn build_registry() -> ToolRegistry {
    ToolRegistry::with_tools([
        Arc::new(PaletteTool) as Arc<dyn Tool>,
        Arc::new(HelloTool) as Arc<dyn Tool>,
    ])
}
