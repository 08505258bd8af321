//! Address Book - an in-memory contact directory.
//!
//! Stores named records, each holding zero or more validated ten-digit phone
//! numbers, and supports lookup, insertion, and deletion of both records and
//! individual phone numbers.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`) and the `Field` trait
//! - **models**: The `Record` aggregate and the `AddressBook` collection
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut john = Record::new("John").unwrap();
//! john.add_phone("1234567890").unwrap();
//! john.add_phone("5555555555").unwrap();
//! john.edit_phone("1234567890", "1112223333").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(john);
//!
//! assert_eq!(
//!     book.find("John").unwrap().to_string(),
//!     "Contact name: John, phones: 1112223333; 5555555555"
//! );
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError, ConfigResult};
pub use models::{AddressBook, Record};
