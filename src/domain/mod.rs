//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the two kinds of contact
//! field: names and phone numbers. These value objects validate at
//! construction time so invalid data can never be represented.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::{Phone, PHONE_DIGITS};
