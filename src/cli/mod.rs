pub mod command;
pub mod run;

use std::io::{self, Write};

use crate::domain::Contact;
use crate::errors::AppError;
use self::command::Command;

/// Blocking yes/no decision gating a destructive action.
///
/// Supplied by the shell so the store never depends on a dialog. `remove`
/// is only reached after `confirm` resolves affirmatively.
pub trait ConfirmDialog {
    fn confirm(&mut self, action: &str) -> Result<bool, AppError>;
}

/// Prompts on stdin, the terminal stand-in for a modal question box.
pub struct StdinConfirm;

impl ConfirmDialog for StdinConfirm {
    fn confirm(&mut self, action: &str) -> Result<bool, AppError> {
        println!("\nAre you sure you want to {}? (y/n)", action);
        print!("> ");
        io::stdout().flush()?;

        let consent = get_input_to_lower()?;
        Ok(consent == "y" || consent == "yes")
    }
}

/// Answers yes without prompting, for scripted runs.
pub struct AssumeYes;

impl ConfirmDialog for AssumeYes {
    fn confirm(&mut self, _action: &str) -> Result<bool, AppError> {
        Ok(true)
    }
}

// OUTPUT FUNCTIONS
pub fn parse_command_from_menu() -> Result<Command, AppError> {
    println!("\n");
    println!("1. Add Contact");
    println!("2. Remove Contact");
    println!("3. List Contacts");
    println!("4. Exit");
    print!("> ");
    io::stdout().flush()?;

    let action = get_input()?;

    match action.as_str() {
        "1" => Ok(Command::AddContact),
        "2" => Ok(Command::RemoveContact),
        "3" => Ok(Command::ListContacts),
        "4" => Ok(Command::Exit),
        _ => Err(AppError::ParseCommand(action)),
    }
}

pub fn prompt(message: &str) -> Result<String, AppError> {
    println!("\n{}", message);
    print!("> ");
    io::stdout().flush()?;

    get_input()
}

/// Renders the contact sequence as a two column table, one row per contact
/// in insertion order. Row numbers are the selectors `remove` expects.
pub fn render_table(contacts: &[Contact]) -> String {
    let mut table = format!("{:>3}  {:<20} {:<15}\n", "Row", "Name", "Phone");

    for (i, contact) in contacts.iter().enumerate() {
        table.push_str(&format!(
            "{i:>3}. {:<20} {:<15}\n",
            contact.name, contact.phone
        ));
    }
    table
}

// INPUT FUNCTIONS
pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;

    if read == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        )));
    }
    Ok(input.trim().to_string())
}

pub fn get_input_to_lower() -> Result<String, AppError> {
    Ok(get_input()?.to_lowercase())
}

/// Maps a raw selection string to a row position.
///
/// Blank or non-numeric input becomes the -1 no-selection sentinel; the
/// store rejects it with the usual status instead of the shell erroring.
pub fn parse_selection(input: &str) -> isize {
    input.trim().parse::<isize>().unwrap_or(-1)
}
