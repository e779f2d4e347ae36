use clap::Parser;

use crate::application::data::{ColorChoice, LogLevel};

/// Build and browse an in-memory folder tree from an interactive menu
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Name of the folder the tree starts from
    #[clap(long, default_value = "Start Folder")]
    pub root_name: String,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// When to color the menu header
    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorChoice,
}
