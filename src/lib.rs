//! Pingdom Users - request types and validation for the Pingdom users API.
//!
//! This library holds the users and contact targets exchanged with the
//! `/users` endpoints, checks them for missing required fields, and turns them
//! into the parameters sent with create and update requests.
//!
//! # Architecture
//!
//! - **domain**: Tri-state flags and validation errors
//! - **models**: Users, their SMS/email details, and contact targets
//! - **params**: Ordered request parameters produced by the models
//! - **client**: Request dispatch through a caller-supplied HTTP transport
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use client::{ApiRequest, Method, Transport, UsersClient};
pub use config::Config;
pub use domain::{Flag, ValidationError};
pub use error::{ApiError, ConfigError};
pub use models::{Contact, User, UserEmail, UserSms};
pub use params::Params;
