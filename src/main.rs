// Entrypoint for the PharmaGo CLI.
// - Keeps `main` small: read config, set up logging, build the shop and
//   hand it to the UI.
// - Logs go to stderr so they never mix with the menus on stdout.

use anyhow::Context;
use pharmago_cli::{config::Config, shop::Shop, terminal::DialoguerTerminal, ui::main_menu};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let mut shop = Shop::from_config(&config).context("Failed to load the medicine catalog")?;
    let mut term = DialoguerTerminal::new(&config);

    // Blocks until the customer logs out or picks an invalid top menu option.
    main_menu(&mut term, &mut shop)?;
    Ok(())
}
