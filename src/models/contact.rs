//! Contact model representing a single notification target to create or update.

use crate::domain::ValidationError;
use crate::params::Params;
use serde::{Deserialize, Serialize};

/// A contact target: one email address or one phone number for a user.
///
/// All fields are optional on their own; an empty string means "not
/// provided". [`Contact::valid_contact`] checks how they fit together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Contact {
    /// Lowest alert severity routed to this target (API field: severitylevel)
    #[serde(rename = "severitylevel", skip_serializing_if = "String::is_empty")]
    pub severity: String,

    /// Dialing prefix for `number` (API field: countrycode)
    #[serde(rename = "countrycode", skip_serializing_if = "String::is_empty")]
    pub country_code: String,

    /// Phone number
    #[serde(skip_serializing_if = "String::is_empty")]
    pub number: String,

    /// SMS gateway identifier
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provider: String,

    /// Email address
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
}

impl Contact {
    /// Create an email contact target.
    pub fn email(address: impl Into<String>) -> Self {
        Self {
            email: address.into(),
            ..Default::default()
        }
    }

    /// Create a phone contact target.
    pub fn sms(country_code: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            number: number.into(),
            ..Default::default()
        }
    }

    /// Check that the contact can be sent in a create or update request.
    ///
    /// Rules are checked in order and the first one that fails is returned.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingTarget` if both email and number are empty
    /// - `ValidationError::MissingCountryCode` if a number has no country code
    /// - `ValidationError::ProviderWithoutNumber` if a provider is given
    ///   without both number and country code
    pub fn valid_contact(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() && self.number.is_empty() {
            return Err(ValidationError::MissingTarget);
        }

        if !self.number.is_empty() && self.country_code.is_empty() {
            return Err(ValidationError::MissingCountryCode);
        }

        if !self.provider.is_empty() && (self.number.is_empty() || self.country_code.is_empty())
        {
            return Err(ValidationError::ProviderWithoutNumber);
        }

        Ok(())
    }

    /// Parameters for a POST (create) request.
    ///
    /// Only non-empty fields are included.
    pub fn post_contact_params(&self) -> Params {
        let mut params = Params::new();
        params.insert_non_empty("email", &self.email);
        params.insert_non_empty("number", &self.number);
        params.insert_non_empty("countrycode", &self.country_code);
        params.insert_non_empty("severitylevel", &self.severity);
        params.insert_non_empty("provider", &self.provider);
        params
    }

    /// Parameters for a PUT (update) request.
    ///
    /// The update endpoint accepts the same fields as create and only
    /// overwrites the ones supplied.
    pub fn put_contact_params(&self) -> Params {
        self.post_contact_params()
    }
}
