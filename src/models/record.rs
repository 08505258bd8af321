//! Record model: one contact with its phone numbers.

use crate::domain::{Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// A record owns exactly one [`Name`], fixed at construction, and an
/// ordered list of [`Phone`] values. Duplicate phones are allowed; order
/// is insertion order and is what [`fmt::Display`] renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn phone_count(&self) -> usize {
        self.phones.len()
    }

    /// Validate `phone` and append it.
    ///
    /// No de-duplication is performed: adding the same number twice
    /// yields two entries.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<&Phone, ValidationError> {
        let phone = Phone::new(phone)?;
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns the removed entry, or `None` if the record has no such number.
    pub fn remove_phone(&mut self, phone: &str) -> Option<Phone> {
        let index = self.position(phone)?;
        tracing::debug!(name = %self.name, phone = %phone, "Removing phone");
        Some(self.phones.remove(index))
    }

    /// Replace `old` with `new`, keeping its position.
    ///
    /// `new` is validated before anything is touched, so a failed edit
    /// leaves the record unchanged.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if `new` is not a valid phone number
    /// - `BookError::PhoneNotFound` if `old` is not on this record
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> BookResult<()> {
        let replacement = Phone::new(new)?;
        let index = self
            .position(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;

        tracing::debug!(
            name = %self.name,
            old = %old,
            new = %replacement,
            "Editing phone"
        );
        self.phones[index] = replacement;
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
