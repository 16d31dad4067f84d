pub mod hello;
pub mod mcp_router;
pub mod palette;
pub mod registry;
