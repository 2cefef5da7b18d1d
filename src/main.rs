//! Personal Diet
//!
//! Interactive console menu for profile metrics and daily food tracking.

use std::io::{self, Write};

use personal_diet::build_info;
use personal_diet::cli::Menu;
use personal_diet::config::AppConfig;
use personal_diet::session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();
    config.init_tracing()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}\n", build_info::startup_banner())?;

    let mut menu = Menu::new(Session::new(&config), stdin.lock(), stdout.lock());
    menu.run()?;

    tracing::debug!(
        "Exiting with {} intake entries",
        menu.session().ledger.len()
    );
    Ok(())
}
