//! Error types for udt.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// The main error type for udt operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid input error for data that should have been a list.
    #[must_use]
    pub fn invalid_input(actual: Type) -> Self {
        Self::new(ErrorKind::InvalidInput {
            expected: Type::List,
            actual,
        })
    }

    /// Creates an invalid token type error.
    #[must_use]
    pub fn invalid_token_type(id: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidTokenType {
            id: id.into(),
            expected: expected.into(),
        })
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingField {
            field: field.into(),
        })
    }

    /// Creates a field type mismatch error.
    #[must_use]
    pub fn field_type(field: impl Into<String>, expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::FieldType {
            field: field.into(),
            expected,
            actual,
        })
    }

    /// Returns true if this is an [`ErrorKind::InvalidInput`] error.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidInput { .. })
    }

    /// Returns true if this is an [`ErrorKind::InvalidTokenType`] error.
    #[must_use]
    pub const fn is_invalid_token_type(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidTokenType { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Pre-population data was not an ordered sequence.
    #[error("invalid input: expected {expected}, got {actual}")]
    InvalidInput {
        /// The expected type (always a list).
        expected: Type,
        /// The type actually supplied.
        actual: Type,
    },

    /// A token was rejected by a set's acceptance predicate.
    #[error("invalid token type: token {id:?} is not a {expected}")]
    InvalidTokenType {
        /// Id of the rejected token.
        id: String,
        /// Label of the token variant the set accepts.
        expected: String,
    },

    /// A required field is missing from a raw record.
    #[error("missing field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// A raw record field has the wrong type.
    #[error("field {field}: expected {expected}, got {actual}")]
    FieldType {
        /// The offending field name.
        field: String,
        /// The expected type.
        expected: Type,
        /// The type encountered.
        actual: Type,
    },

    /// A token id was empty.
    #[error("token id must not be empty")]
    EmptyId,
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Label of the component that raised the error (e.g. a set label).
    pub source: Option<String>,
    /// Position of the offending record in pre-population data.
    pub index: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the record index.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
            if self.index.is_some() {
                write!(f, " ")?;
            }
        }
        if let Some(index) = self.index {
            write!(f, "at record {index}")?;
        }
        Ok(())
    }
}
