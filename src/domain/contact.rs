/// A single entry in the contact list.
///
/// Contacts are immutable once added; there is no edit operation.
/// Duplicates are allowed, two contacts are equal when both fields match.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: &str, phone: &str) -> Self {
        Contact {
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn duplicate_contacts_are_equal() {
        let contact1 = Contact::new("Uche", "01234567890");
        let contact2 = Contact::new("Uche", "01234567890");

        assert_eq!(contact1, contact2);
    }

    #[test]
    fn contacts_differ_by_phone() {
        let contact1 = Contact::new("Uche", "01234567890");
        let contact2 = Contact::new("Uche", "09876543210");

        assert_ne!(contact1, contact2);
    }
}
