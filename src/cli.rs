use clap::Parser;
use std::path::PathBuf;

/// Terminal shopping list.
#[derive(Debug, Parser)]
#[command(name = "shoplist", version)]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides SHOPLIST_LOG).
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}
