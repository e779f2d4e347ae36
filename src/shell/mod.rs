//! Interactive text menu driving a [`Session`](crate::session::Session).

mod menu;
mod menu_choice;

pub use menu::{Menu, ShellError};
pub use menu_choice::{MenuChoice, MenuChoiceError};
