//! Palette MCP gateway: a color-harmony palette tool and a greeting tool
//! served over REST dispatch, a JSON-RPC shim and MCP (stdio or streamable
//! HTTP).

pub mod api;
pub mod cli;
pub mod clients;
pub mod core;
pub mod domain;
pub mod infra;
pub mod tools;
