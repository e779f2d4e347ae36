use std::num::ParseIntError;
use std::str::FromStr;

use derive_more::Display;
use snafu::{ResultExt, Snafu};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MenuChoice {
    #[display("Add File")]
    AddFile,
    #[display("Add Folder")]
    AddFolder,
    #[display("Select Folder")]
    SelectFolder,
    #[display("Print Folder")]
    PrintFolder,
    #[display("Exit")]
    Exit,
}

impl MenuChoice {
    /// All choices in the order they are listed in the menu.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddFile,
        MenuChoice::AddFolder,
        MenuChoice::SelectFolder,
        MenuChoice::PrintFolder,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> i64 {
        match self {
            MenuChoice::AddFile => 1,
            MenuChoice::AddFolder => 2,
            MenuChoice::SelectFolder => 3,
            MenuChoice::PrintFolder => 4,
            MenuChoice::Exit => 5,
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = MenuChoiceError;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.number() == choice)
            .ok_or(MenuChoiceError::OutOfRange { choice })
    }
}

impl FromStr for MenuChoice {
    type Err = MenuChoiceError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let choice = input
            .parse::<i64>()
            .context(NotANumberSnafu { input })?;
        choice.try_into()
    }
}

#[derive(Debug, Snafu)]
pub enum MenuChoiceError {
    #[snafu(display("'{}' is not a number", input))]
    NotANumber {
        input: String,
        source: ParseIntError,
    },
    #[snafu(display("There is no menu entry {}", choice))]
    OutOfRange { choice: i64 },
}
