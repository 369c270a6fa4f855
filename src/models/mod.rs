//! Data models for the users API.
//!
//! This module contains the user entity with its SMS and email contact
//! details, and the contact target record used when creating or updating a
//! single notification target.

pub mod contact;
pub mod user;

pub use contact::Contact;
pub use user::{User, UserEmail, UserSms};
