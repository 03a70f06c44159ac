//! Definition name newtype
//!
//! The game identifies thing types and materials ("stuff") by string def
//! names. Comparison is exact and case-sensitive, and an empty name is a
//! legitimate value distinct from an absent one, so no normalization or
//! validation happens here.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A thing or stuff definition name, e.g. `"Apparel_Parka"` or `"Steel"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefName(String);

impl DefName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DefName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DefName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DefName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<DefName> for String {
    fn from(name: DefName) -> String {
        name.0
    }
}

impl Borrow<str> for DefName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DefName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DefName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
