//! Personal Diet Library
//!
//! Profile metrics, a food reference, intake logging and nutrition summaries,
//! shared by the interactive menu and the MCP server.

pub mod build_info;
pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod session;
pub mod tools;
