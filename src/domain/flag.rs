//! Flag value object.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A textual boolean that may also be left unset.
///
/// The users API takes `paused` and `primary` as `"true"`/`"false"` strings
/// and treats a missing parameter as "leave unchanged", so an unset flag is
/// never sent.
///
/// # Example
///
/// ```
/// use pingdom_users::domain::Flag;
///
/// let flag: Flag = "True".parse().unwrap();
/// assert_eq!(flag, Flag::True);
/// assert_eq!(flag.as_param(), Some("true"));
/// assert_eq!(Flag::Unset.as_param(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flag {
    /// Not provided; omitted from requests.
    #[default]
    Unset,

    /// Explicitly true.
    True,

    /// Explicitly false.
    False,
}

impl Flag {
    /// Whether the flag carries no value.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// The flag as a boolean, if set.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::True => Some(true),
            Self::False => Some(false),
        }
    }

    /// The wire text for this flag, or `None` when it should be omitted.
    pub fn as_param(&self) -> Option<&'static str> {
        self.as_bool().map(|b| if b { "true" } else { "false" })
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<Option<bool>> for Flag {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unset, Self::from)
    }
}

/// Error returned when text is not a recognised flag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFlagError(String);

impl fmt::Display for ParseFlagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid flag value: {:?} (expected true or false)", self.0)
    }
}

impl std::error::Error for ParseFlagError {}

impl FromStr for Flag {
    type Err = ParseFlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the exact empty string means unset; whitespace is not trimmed
        if s.is_empty() {
            Ok(Self::Unset)
        } else if s.eq_ignore_ascii_case("true") {
            Ok(Self::True)
        } else if s.eq_ignore_ascii_case("false") {
            Ok(Self::False)
        } else {
            Err(ParseFlagError(s.to_string()))
        }
    }
}

// Serde support - serialize as the wire text, unset as null
impl Serialize for Flag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_param() {
            Some(text) => serializer.serialize_str(text),
            None => serializer.serialize_none(),
        }
    }
}

struct FlagVisitor;

impl<'de> Visitor<'de> for FlagVisitor {
    type Value = Flag;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, \"true\"/\"false\", an empty string or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Flag, E> {
        Ok(Flag::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Flag, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_none<E: de::Error>(self) -> Result<Flag, E> {
        Ok(Flag::Unset)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Flag, E> {
        Ok(Flag::Unset)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Flag, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlagVisitor)
    }
}

// Serde support - accept booleans, textual booleans and null
impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlagVisitor)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param().unwrap_or(""))
    }
}
