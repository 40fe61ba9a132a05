//! Type descriptors for raw values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Describes the shape of a raw [`Value`](crate::Value).
///
/// Used when reporting malformed input and by token parsers to check
/// field types.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The nil type (only value: nil).
    Nil,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String type.
    String,
    /// Ordered sequence of values.
    List,
    /// String-keyed record of values.
    Record,
}

impl Type {
    /// Returns true if values of this type are ordered sequences.
    #[must_use]
    pub const fn is_sequence(self) -> bool {
        matches!(self, Self::List)
    }

    /// Checks if a value of type `actual` may fill a field of this type.
    ///
    /// `Float` fields also take `Int` values; everything else must match
    /// exactly.
    #[must_use]
    pub fn accepts(self, actual: Type) -> bool {
        matches!((self, actual), (Self::Float, Self::Int)) || self == actual
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::List => write!(f, "list"),
            Self::Record => write!(f, "record"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
