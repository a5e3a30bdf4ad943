use core::fmt;

use super::contact::Contact;

/// Outcome of the most recent store operation.
///
/// Every invalid input (empty fields, absent or out-of-range selection) is a
/// recoverable outcome carried here, never an error. The `Display` impl
/// produces the exact feedback line the shell shows the user.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum StatusMessage {
    Added(String),
    EmptyFields,
    Removed,
    NoSelection,
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusMessage::Added(name) => {
                write!(f, "Added contact: {}", name)
            }
            StatusMessage::EmptyFields => {
                write!(f, "Please enter a contact name and phone number.")
            }
            StatusMessage::Removed => {
                write!(f, "Contact removed.")
            }
            StatusMessage::NoSelection => {
                write!(f, "Please select a row to be removed.")
            }
        }
    }
}

/// Entry points a shell invokes in response to user actions.
///
/// Any front end can bind its native add/remove events to these two
/// handlers; the store stays free of dialog and rendering concerns.
pub trait ContactEvents {
    fn on_add_requested(&mut self, name: &str, phone: &str) -> StatusMessage;

    fn on_remove_requested(&mut self, position: isize) -> StatusMessage;

    fn contacts(&self) -> &[Contact];
}

/// Ordered, in-memory contact list.
///
/// Insertion order is preserved and duplicates are allowed. The list never
/// holds a contact with an empty name or phone; `add` enforces that.
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// Appends a contact built from the trimmed inputs.
    ///
    /// Both fields must be non-empty after trimming, otherwise the list is
    /// left untouched and `EmptyFields` is reported.
    pub fn add(&mut self, name: &str, phone: &str) -> StatusMessage {
        let name = name.trim();
        let phone = phone.trim();

        if name.is_empty() || phone.is_empty() {
            return StatusMessage::EmptyFields;
        }

        self.contacts.push(Contact::new(name, phone));
        StatusMessage::Added(name.to_string())
    }

    /// Removes the contact at `position`, shifting later rows down by one.
    ///
    /// A negative position is the "no selection" sentinel. Out-of-range
    /// positions leave the list untouched and report `NoSelection`.
    pub fn remove(&mut self, position: isize) -> StatusMessage {
        if position < 0 || position as usize >= self.contacts.len() {
            return StatusMessage::NoSelection;
        }

        self.contacts.remove(position as usize);
        StatusMessage::Removed
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactEvents for ContactStore {
    fn on_add_requested(&mut self, name: &str, phone: &str) -> StatusMessage {
        self.add(name, phone)
    }

    fn on_remove_requested(&mut self, position: isize) -> StatusMessage {
        self.remove(position)
    }

    fn contacts(&self) -> &[Contact] {
        self.contact_list()
    }
}
