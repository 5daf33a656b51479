use anyhow::Context;
use clap::Parser;
use shoplist::cli::Cli;
use shoplist::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    if let Some(path) = shoplist::logging::init_tracing(cli.log.as_deref(), &config.logging) {
        tracing::info!(log_file = %path.display(), "logging initialized");
    }

    shoplist::ui::runtime::run(config).context("running shopping list UI")?;
    Ok(())
}
