use clap::Parser;
use std::{env, io::ErrorKind};

use crate::cli::{
    self, AssumeYes, ConfirmDialog, StdinConfirm,
    command::{Cli, Command, parse_confirm_policy},
};
use crate::domain::{ContactEvents, ContactStore};
use crate::errors::AppError;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    unsafe {
        env::set_var("CONTACT_LIST_CONFIRM", &cli.confirm);
    }

    let policy = parse_confirm_policy();
    let mut dialog: Box<dyn ConfirmDialog> = if policy.is_assume_yes() {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    };

    let mut store = ContactStore::new();

    println!("\n--- Contact List ---");
    println!("Current confirm policy is: {}", policy.is_which());

    run_loop(&mut store, dialog.as_mut())
}

/// Dispatches menu commands to the store's event entry points.
///
/// Works against the traits only, so any front end providing the same two
/// capabilities could replace the terminal shell.
fn run_loop(
    events: &mut dyn ContactEvents,
    dialog: &mut dyn ConfirmDialog,
) -> Result<(), AppError> {
    'outerloop: loop {
        let command = match cli::parse_command_from_menu() {
            Ok(command) => command,
            Err(AppError::ParseCommand(action)) => {
                // User entered invalid command
                eprintln!("{}", AppError::ParseCommand(action));
                continue 'outerloop;
            }
            // Piped input ran out, same as choosing Exit
            Err(AppError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => {
                break 'outerloop;
            }
            Err(e) => return Err(e),
        };

        match command {
            Command::AddContact => {
                let name = cli::prompt("Enter contact name (* to go back):")?;
                if name == "*" {
                    continue 'outerloop;
                }

                let phone = cli::prompt("Enter phone number (* to go back):")?;
                if phone == "*" {
                    continue 'outerloop;
                }

                // Empty input is passed through; the store reports it
                let status = events.on_add_requested(&name, &phone);
                println!("\n{}", status);
            }
            Command::RemoveContact => {
                println!("\n{}", cli::render_table(events.contacts()));

                let selection = cli::prompt("Enter row number to remove (blank for none):")?;
                let position = cli::parse_selection(&selection);

                if position < 0 {
                    // Nothing selected, skip the confirmation
                    println!("\n{}", events.on_remove_requested(position));
                    continue 'outerloop;
                }

                if !dialog.confirm("remove this contact")? {
                    // Declined, list and status stay untouched
                    continue 'outerloop;
                }

                let status = events.on_remove_requested(position);
                println!("\n{}", status);
            }
            Command::ListContacts => {
                if events.contacts().is_empty() {
                    println!("\nNo contact in contact list!");
                    continue 'outerloop;
                }

                println!("\n{}", cli::render_table(events.contacts()));
            }
            Command::Exit => {
                println!("\nBye!");
                break 'outerloop;
            }
        }
    }

    Ok(())
}
