use std::io;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::session::Session;
use crate::shell::{Menu, ShellError};

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let colorize = app_config.color.should_colorize();
        colored::control::set_override(colorize);

        let session = Session::new(app_config.root_name);
        let mut menu = Menu::new(session, io::stdin().lock(), io::stdout().lock())
            .with_color(colorize);
        menu.run().context(ShellSnafu)?;

        let session = menu.into_session();
        info!(
            "Session ended with {} file(s) in {} folder(s)",
            session.total_files(),
            session.root().folder_count()
        );

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while running the menu"))]
    ShellError { source: ShellError },
}
