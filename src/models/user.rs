//! User model representing an account holder and their notification targets.

use crate::domain::{Flag, ValidationError};
use crate::params::Params;
use serde::{Deserialize, Serialize};

/// SMS contact detail attached to a user (from API).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct UserSms {
    /// Server-assigned contact target ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Lowest alert severity routed to this number (e.g. "high", "low")
    pub severity: String,

    /// Dialing prefix, without the leading '+'
    pub country_code: String,

    /// Destination phone number
    pub number: String,

    /// SMS gateway identifier
    pub provider: String,
}

/// Email contact detail attached to a user (from API).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct UserEmail {
    /// Server-assigned contact target ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Lowest alert severity routed to this address
    pub severity: String,

    /// The email address
    pub address: String,
}

/// A user of the monitoring service.
///
/// Instances are either built by the caller for a create/update request or
/// decoded from a server response. The `sms` and `email` lists are only ever
/// populated from responses; contact targets are written through
/// [`Contact`](crate::models::Contact).
///
/// `paused` and `primary` must decode as a boolean, `"true"`/`"false"` in any
/// case, `""` or `null`. Any other flag text fails the whole `User` decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct User {
    /// Server-assigned user ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Whether alerting is paused for this user
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub paused: Flag,

    /// Display name (API field: name)
    #[serde(rename = "name", skip_serializing_if = "String::is_empty")]
    pub username: String,

    /// Whether this is the account's primary user
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub primary: Flag,

    /// SMS contact targets
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sms: Vec<UserSms>,

    /// Email contact targets
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email: Vec<UserEmail>,
}

impl User {
    /// Create a user with only a username set.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }

    /// Check that the user can be sent in a create or update request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyUsername` if the username is empty.
    pub fn valid_user(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }

        Ok(())
    }

    /// Parameters for a POST (create) request.
    ///
    /// Always contains `name`, even when empty; run [`User::valid_user`] first.
    pub fn post_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("name", self.username.as_str());
        params
    }

    /// Parameters for a PUT (update) request.
    ///
    /// Unset flags are left out so the server keeps their current values.
    pub fn put_params(&self) -> Params {
        let mut params = self.post_params();

        if let Some(primary) = self.primary.as_param() {
            params.insert("primary", primary);
        }

        if let Some(paused) = self.paused.as_param() {
            params.insert("paused", paused);
        }

        params
    }
}
