//! Configuration for token sets.

use std::borrow::Cow;

/// What a [`TokenSet`](crate::TokenSet) does when a candidate's reference is
/// already present.
///
/// Neither policy changes the set's size or iteration order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Keep the stored token and drop the candidate (first write wins).
    #[default]
    KeepFirst,
    /// Replace the stored token with the candidate, keeping its position.
    ReplaceInPlace,
}

/// Configuration for a [`TokenSet`](crate::TokenSet).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetConfig {
    /// Human-readable name of the token variant the set accepts.
    ///
    /// Shows up in `InvalidTokenType` errors and trace events.
    pub label: Cow<'static, str>,

    /// Behavior when inserting a token whose reference is already stored.
    pub duplicates: DuplicatePolicy,
}

impl Default for SetConfig {
    fn default() -> Self {
        Self {
            label: Cow::Borrowed("token"),
            duplicates: DuplicatePolicy::KeepFirst,
        }
    }
}

impl SetConfig {
    /// Creates a configuration for sets of the named token variant.
    #[must_use]
    pub fn labeled(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder method to set the duplicate policy.
    #[must_use]
    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}
