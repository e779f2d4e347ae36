use crate::application::data::ColorChoice;
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root_name: String,
    pub color: ColorChoice,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root_name: cli.root_name,
            color: cli.color,
        }
    }
}
