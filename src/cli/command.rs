use clap::Parser;
use dotenv::dotenv;
use std::env;

#[derive(Parser, Debug)]
#[command(name = "contact-list", version, about = "Simple Contact List")]
pub struct Cli {
    /// Removal confirmation policy (prompt, assume-yes) are available
    #[arg(long, env = "CONTACT_LIST_CONFIRM", default_value_t = String::from("prompt"))]
    pub confirm: String,
}

/// Menu commands understood by the interactive shell
pub enum Command {
    AddContact,
    RemoveContact,
    ListContacts,
    Exit,
}

#[derive(Debug)]
pub enum ConfirmPolicy {
    Prompt,
    AssumeYes,
}

impl ConfirmPolicy {
    pub fn is_prompt(&self) -> bool {
        matches!(self, ConfirmPolicy::Prompt)
    }

    pub fn is_assume_yes(&self) -> bool {
        matches!(self, ConfirmPolicy::AssumeYes)
    }

    pub fn is_which(&self) -> &str {
        match self {
            ConfirmPolicy::Prompt => "prompt",
            ConfirmPolicy::AssumeYes => "assume-yes",
        }
    }
}

pub fn parse_confirm_policy() -> ConfirmPolicy {
    dotenv().ok();

    let choice = env::var("CONTACT_LIST_CONFIRM").unwrap_or("prompt".to_string());
    match choice.to_lowercase().as_str() {
        "assume-yes" | "yes" | "y" => ConfirmPolicy::AssumeYes,
        _ => ConfirmPolicy::Prompt,
    }
}
