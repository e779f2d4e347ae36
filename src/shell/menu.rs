use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use colored::Colorize;
use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::session::Session;
use crate::shell::{MenuChoice, MenuChoiceError};

/// Line-oriented menu loop over a [`Session`].
///
/// Reads choices and names from `input`, one per line, and writes the menu,
/// prompts and results to `output`. Leaves on the exit entry or at end of
/// input.
pub struct Menu<R, W> {
    session: Session,
    input: R,
    output: W,
    colorize: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            colorize: false,
        }
    }

    pub fn with_color(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt(">>Input: ")? else {
                info!("Input closed, leaving menu");
                self.say("Exiting Menu.")?;
                return Ok(());
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(MenuChoiceError::NotANumber { .. }) => {
                    debug!("Rejected menu input '{}'", line);
                    self.say("Enter a valid input")?;
                    continue;
                }
                Err(MenuChoiceError::OutOfRange { choice }) => {
                    debug!("Rejected menu choice {}", choice);
                    self.say("Invalid choice, please try again.")?;
                    continue;
                }
            };

            debug!("Menu choice: {}", choice);
            if self.handle(choice)?.is_break() {
                return Ok(());
            }
        }
    }

    fn handle(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>, ShellError> {
        match choice {
            MenuChoice::AddFile => {
                let Some(file_name) = self.prompt("Enter file name: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                self.session.add_file(file_name.as_str());
                self.say(format!("Added file: {file_name}"))?;
            }
            MenuChoice::AddFolder => {
                let Some(folder_name) = self.prompt("Enter a folder name: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                self.session.add_subfolder(folder_name.as_str());
                self.say(format!("Added folder: {folder_name}"))?;
            }
            MenuChoice::SelectFolder => {
                let Some(folder_name) = self.prompt("Enter a folder name to select: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let message = match self.session.select_folder(&folder_name) {
                    Ok(selected) => format!("Selected folder: {}", selected.name()),
                    Err(error) => error.to_string(),
                };
                self.say(message)?;
            }
            MenuChoice::PrintFolder => {
                let current = self.session.current();
                let summary = format!(
                    "{} file(s) in {} folder(s)",
                    current.count_files(),
                    current.folder_count()
                );
                let rendered = self.session.render_current();
                write!(self.output, "{rendered}").context(WriteSnafu)?;
                self.say(summary)?;
            }
            MenuChoice::Exit => {
                self.say("Exiting Menu.")?;
                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn print_menu(&mut self) -> Result<(), ShellError> {
        let title = "===Menu===";
        let current = format!("==Current Folder: {} ==", self.session.current().name());
        let location = (!self.session.current_path().is_root())
            .then(|| format!("({})", self.session.breadcrumb()));

        self.say("")?;
        if self.colorize {
            self.say(title.bold())?;
            self.say(current.cyan())?;
            if let Some(location) = location {
                self.say(location.dimmed())?;
            }
        } else {
            self.say(title)?;
            self.say(current)?;
            if let Some(location) = location {
                self.say(location)?;
            }
        }

        for choice in MenuChoice::ALL {
            self.say(format!("{}) {}", choice.number(), choice))?;
        }

        Ok(())
    }

    /// Writes `message` without a newline and reads one trimmed line back.
    /// Returns `None` once the input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{message}").context(WriteSnafu)?;
        self.output.flush().context(WriteSnafu)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context(ReadSnafu)?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, line: impl Display) -> Result<(), ShellError> {
        writeln!(self.output, "{line}").context(WriteSnafu)
    }
}

#[derive(Debug, Snafu)]
pub enum ShellError {
    #[snafu(display("Failed to read from the input"))]
    ReadError { source: std::io::Error },
    #[snafu(display("Failed to write to the output"))]
    WriteError { source: std::io::Error },
}
