//! AddressBook: the keyed collection of contact records.

use super::record::Record;
use std::collections::HashMap;
use std::fmt;

/// A collection of [`Record`]s keyed by contact name.
///
/// Records are kept in insertion order. The key under which a record is
/// stored is always its own name; since a record's name cannot change,
/// handing out `&mut Record` through [`AddressBook::find_mut`] cannot break
/// that invariant.
///
/// Adding a record whose name is already present replaces the stored
/// record in place (last write wins, original position kept).
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut jane = Record::new("Jane").unwrap();
/// jane.add_phone("9876543210").unwrap();
/// book.add_record(jane);
///
/// assert!(book.find("Jane").is_some());
/// assert!(book.delete("Jane").is_some());
/// assert!(book.find("Jane").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// Returns the record previously stored under the same name, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str();

        if let Some(&slot) = self.index.get(key) {
            tracing::debug!(name = %key, "Replacing existing record");
            return Some(std::mem::replace(&mut self.records[slot], record));
        }

        tracing::debug!(name = %key, "Adding record");
        self.index.insert(key.to_string(), self.records.len());
        self.records.push(record);
        None
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        let found = self.index.get(name).map(|&slot| &self.records[slot]);
        tracing::trace!(name = %name, found = found.is_some(), "Record lookup");
        found
    }

    /// Look up a record by exact name for phone mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let slot = *self.index.get(name)?;
        Some(&mut self.records[slot])
    }

    /// Remove the record stored under `name`.
    ///
    /// Returns the removed record, or `None` if no such name exists.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let slot = self.index.remove(name)?;
        let removed = self.records.remove(slot);

        // Later records shifted down by one
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }

        tracing::debug!(name = %name, "Deleted record");
        Some(removed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.records.iter(),
        }
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.name().as_str())
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter()
    }
}

/// Iterator over the entries of an [`AddressBook`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|r| (r.name().as_str(), r))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a str, &'a Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(*phone).unwrap();
        }
        record
    }

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890", "5555555555"]));
        book.add_record(record("Jane", &["9876543210"]));
        book
    }

    #[test]
    fn test_add_and_find() {
        let book = sample_book();
        let john = book.find("John").unwrap();
        assert_eq!(john.name().as_str(), "John");
        assert_eq!(john.phone_count(), 2);
        assert!(book.find("NonExistent").is_none());
    }

    #[test]
    fn test_find_is_exact_match() {
        let book = sample_book();
        assert!(book.find("john").is_none());
        assert!(book.find("Jo").is_none());
        assert!(book.find("John ").is_none());
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = sample_book();
        book.add_record(record("Alice", &[]));

        let previous = book.add_record(record("John", &["1112223333"])).unwrap();
        assert_eq!(previous.phone_count(), 2);
        assert_eq!(book.len(), 3);
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["John", "Jane", "Alice"]);
        assert_eq!(
            book.find("John").unwrap().to_string(),
            "Contact name: John, phones: 1112223333"
        );
    }

    #[test]
    fn test_delete() {
        let mut book = sample_book();
        let removed = book.delete("Jane").unwrap();
        assert_eq!(removed.name().as_str(), "Jane");
        assert!(book.find("Jane").is_none());
        assert!(book.delete("Jane").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_delete_keeps_index_consistent() {
        let mut book = AddressBook::new();
        for name in ["A", "B", "C", "D"] {
            book.add_record(record(name, &[]));
        }

        book.delete("B");
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["A", "C", "D"]);
        for name in ["A", "C", "D"] {
            assert_eq!(book.find(name).unwrap().name().as_str(), name);
        }

        book.add_record(record("B", &[]));
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["A", "C", "D", "B"]);
        assert_eq!(book.find("D").unwrap().name().as_str(), "D");
    }

    #[test]
    fn test_find_mut_edits_stored_record() {
        let mut book = sample_book();
        book.find_mut("John")
            .unwrap()
            .edit_phone("1234567890", "1112223333")
            .unwrap();
        assert_eq!(
            book.find("John").unwrap().to_string(),
            "Contact name: John, phones: 1112223333; 5555555555"
        );
        assert!(book.find_mut("Nobody").is_none());
    }

    #[test]
    fn test_iteration_order() {
        let book = sample_book();
        let entries: Vec<_> = book.iter().map(|(name, r)| (name, r.phone_count())).collect();
        assert_eq!(entries, vec![("John", 2), ("Jane", 1)]);
        assert_eq!(book.iter().len(), 2);

        let mut count = 0;
        for (name, record) in &book {
            assert_eq!(name, record.name().as_str());
            count += 1;
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn test_from_iterator_last_write_wins() {
        let book: AddressBook = vec![
            record("John", &["1234567890"]),
            record("John", &["5555555555"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(book.len(), 1);
        assert!(book.find("John").unwrap().find_phone("5555555555").is_some());
    }

    #[test]
    fn test_display() {
        let book = sample_book();
        assert_eq!(
            book.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555\n\
             Contact name: Jane, phones: 9876543210"
        );
        assert_eq!(AddressBook::new().to_string(), "");
    }

    #[test]
    fn test_empty_book() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert!(!book.contains("John"));
        assert_eq!(book.iter().count(), 0);
    }
}
