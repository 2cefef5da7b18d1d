//! Personal Diet MCP server
//!
//! Serves one in-memory session over MCP stdio.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};

use personal_diet::build_info;
use personal_diet::config::AppConfig;
use personal_diet::mcp::DietService;
use personal_diet::session::Session;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();

    // Logs go to stderr so stdout stays free for the protocol
    config.init_tracing()?;

    eprintln!("{}", build_info::startup_banner());
    eprintln!("Starting MCP server on stdio...");
    eprintln!("Goal delta: {} kcal", config.goal_delta);

    let service = DietService::new(Session::new(&config));

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
