//! Token references.
//!
//! A [`Reference`] is the key a token is stored and looked up under. It is
//! derived from the token's id alone, so callers can look a token up from a
//! bare id string without holding a token instance.
//!
//! In token documents a reference is written in alias form, `{color.primary}`.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque, comparable key derived from a token id.
///
/// Two references are equal iff they were derived from byte-equal ids.
/// Cloning is O(1).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Reference(Arc<str>);

impl Reference {
    /// Opening delimiter of the alias form.
    pub const OPEN: char = '{';
    /// Closing delimiter of the alias form.
    pub const CLOSE: char = '}';

    /// Derives the reference for a token id.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        Self(id.into())
    }

    /// Parses the alias form `{id}`.
    ///
    /// Returns `None` if the delimiters are missing or the id is empty.
    #[must_use]
    pub fn parse(alias: &str) -> Option<Self> {
        let id = alias
            .strip_prefix(Self::OPEN)?
            .strip_suffix(Self::CLOSE)?;
        if id.is_empty() {
            return None;
        }
        Some(Self::from_id(id))
    }

    /// Returns the id this reference was derived from.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }

    /// Returns true if `alias` is written in alias form.
    #[must_use]
    pub fn is_alias(alias: &str) -> bool {
        Self::parse(alias).is_some()
    }
}

/// Derives the reference for a token id.
///
/// Pure and total: the result depends on `id` alone.
#[must_use]
pub fn reference_for(id: &str) -> Reference {
    Reference::from_id(id)
}

impl Borrow<str> for Reference {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Reference {
    fn from(id: &str) -> Self {
        Self::from_id(id)
    }
}

impl From<String> for Reference {
    fn from(id: String) -> Self {
        Self(id.into())
    }
}

impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reference({self})")
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", Self::OPEN, self.0, Self::CLOSE)
    }
}
