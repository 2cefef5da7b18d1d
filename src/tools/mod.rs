//! Diet Tools module
//!
//! Session operations with serializable responses, shared by the MCP server.

pub mod foods;
pub mod intake;
pub mod profile;
pub mod recommendations;
pub mod status;
