//! Domain value objects and types.
//!
//! This module contains the tri-state [`Flag`] used for the textual boolean
//! fields of a user, and the [`ValidationError`] returned when a user or
//! contact is missing required fields.

pub mod errors;
pub mod flag;

pub use errors::ValidationError;
pub use flag::{Flag, ParseFlagError};
