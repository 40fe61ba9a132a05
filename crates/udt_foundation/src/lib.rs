//! Raw values, references, and error types for udt.
//!
//! This crate provides:
//! - [`Value`] - Raw untyped data, the input to token parsers
//! - [`Reference`] - Keys derived from token ids
//! - [`Type`] - Type descriptors for raw values
//! - [`Error`] - Error types with context
//! - Persistent collections ([`UdtVec`], [`UdtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod reference;
pub mod types;
pub mod value;

pub use collections::{UdtMap, UdtVec};
pub use error::{Error, ErrorContext, ErrorKind};
pub use reference::{Reference, reference_for};
pub use types::Type;
pub use value::{RawList, RawRecord, Value};

/// Result type alias using udt's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
