//! Domain validation errors.

use std::fmt;

/// Errors returned by the user and contact validators.
///
/// Each variant corresponds to one required-field rule. Validators stop at the
/// first rule that fails, so callers only ever see one of these at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The user has no username.
    EmptyUsername,

    /// The contact has neither an email address nor a phone number.
    MissingTarget,

    /// The contact has a phone number but no country code.
    MissingCountryCode,

    /// The contact names an SMS provider without a full phone number.
    ProviderWithoutNumber,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(
                f,
                "Invalid value for `Username`.  Must contain non-empty string"
            ),
            Self::MissingTarget => write!(
                f,
                "you must provide either an Email or a Phone Number to create a contact target"
            ),
            Self::MissingCountryCode => write!(
                f,
                "you must provide a Country Code if providing a phone number"
            ),
            Self::ProviderWithoutNumber => write!(
                f,
                "you must provide CountryCode and Number if Provider is provided"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
