//! The token contract and a minimal concrete token.

use std::sync::Arc;

use udt_foundation::{Error, ErrorKind, RawRecord, Reference, Result, Type, Value, reference_for};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Anything that can be stored in a [`TokenSet`](crate::TokenSet).
///
/// A token exposes an identifying string. Its reference, and therefore its
/// identity inside a set, is derived from that string alone (see
/// [`TokenReference`]).
pub trait TokenLike {
    /// Returns the token's identifying string.
    fn id(&self) -> &str;
}

/// The reference of a token, derived from its id.
///
/// Implemented for every [`TokenLike`] and for nothing else, so a token
/// type cannot key itself differently from what [`reference_for`] returns
/// for its id.
pub trait TokenReference {
    /// Returns the reference derived from the token's id.
    fn reference(&self) -> Reference;
}

impl<T: TokenLike + ?Sized> TokenReference for T {
    fn reference(&self) -> Reference {
        reference_for(self.id())
    }
}

/// Conversion of a token back into raw data.
pub trait ToValue {
    /// Returns the raw form of this value.
    fn to_value(&self) -> Value;
}

/// A design token with an id, an optional description and opaque payload.
///
/// Every field other than `id` and `description` is kept verbatim in
/// [`extra`](Token::extra) and written back out by [`ToValue`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Value", into = "Value"))]
pub struct Token {
    id: Arc<str>,
    description: Option<Arc<str>>,
    extra: RawRecord,
}

impl Token {
    /// Field holding the token id.
    pub const ID: &'static str = "id";
    /// Field holding the optional description.
    pub const DESCRIPTION: &'static str = "description";

    /// Creates a token with the given id and no payload.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::EmptyId`] if `id` is empty.
    pub fn new(id: impl Into<Arc<str>>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::new(ErrorKind::EmptyId));
        }
        Ok(Self {
            id,
            description: None,
            extra: RawRecord::new(),
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<Arc<str>>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a payload field.
    ///
    /// `id` and `description` are reserved and cannot be set this way.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        let name = name.into();
        if &*name != Self::ID && &*name != Self::DESCRIPTION {
            self.extra = self.extra.insert(name, value.into());
        }
        self
    }

    /// Parses a token from a raw record.
    ///
    /// The record must carry a non-empty string `id`. A `description`, if
    /// present, must be a string. All other fields are kept as payload.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a record, if `id` is missing, empty
    /// or not a string, or if `description` is not a string.
    pub fn from_value(raw: &Value) -> Result<Self> {
        let record = raw
            .as_record()
            .ok_or_else(|| Error::field_type("<token>", Type::Record, raw.value_type()))?;

        let Some(id) = string_field(record, Self::ID)? else {
            return Err(Error::missing_field(Self::ID));
        };
        if id.is_empty() {
            return Err(Error::new(ErrorKind::EmptyId));
        }

        let description = string_field(record, Self::DESCRIPTION)?;

        let extra = record.remove(Self::ID).remove(Self::DESCRIPTION);

        Ok(Self {
            id,
            description,
            extra,
        })
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns a payload field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Returns all payload fields.
    #[must_use]
    pub fn extra(&self) -> &RawRecord {
        &self.extra
    }
}

/// Looks up `field` and checks that it holds `expected`.
///
/// An absent or nil field is `None`.
fn typed_field<'a>(
    record: &'a RawRecord,
    field: &str,
    expected: Type,
) -> Result<Option<&'a Value>> {
    match record.get(field) {
        None | Some(Value::Nil) => Ok(None),
        Some(value) if expected.accepts(value.value_type()) => Ok(Some(value)),
        Some(other) => Err(Error::field_type(field, expected, other.value_type())),
    }
}

fn string_field(record: &RawRecord, field: &str) -> Result<Option<Arc<str>>> {
    Ok(match typed_field(record, field, Type::String)? {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    })
}

impl TokenLike for Token {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ToValue for Token {
    fn to_value(&self) -> Value {
        let mut record = self
            .extra
            .insert(Self::ID.into(), Value::String(self.id.clone()));
        if let Some(description) = &self.description {
            record = record.insert(Self::DESCRIPTION.into(), Value::String(description.clone()));
        }
        Value::Record(record)
    }
}

impl TryFrom<Value> for Token {
    type Error = Error;

    fn try_from(raw: Value) -> Result<Self> {
        Self::from_value(&raw)
    }
}

impl From<Token> for Value {
    fn from(token: Token) -> Self {
        token.to_value()
    }
}

impl<T: TokenLike + ?Sized> TokenLike for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: ToValue + ?Sized> ToValue for Arc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}
