//! Token contract and ordered, validated token sets for udt.
//!
//! This crate provides:
//! - [`TokenLike`] / [`ToValue`] - What a token must offer to be stored
//! - [`TokenReference`] - A token's reference, always derived from its id
//! - [`Token`] - A minimal concrete token
//! - [`TokenSet`] - Insertion-ordered, reference-keyed, validated set
//! - [`SetConfig`] - Labels and duplicate handling for sets
//!
//! # Example
//!
//! ```
//! use udt_foundation::{Value, reference_for};
//! use udt_tokens::{Token, TokenLike, TokenSet};
//!
//! let raw = Value::list([
//!     Value::record([("id", "color.primary")]),
//!     Value::record([("id", "color.secondary")]),
//! ]);
//! let set = TokenSet::from_raw(|_: &Token| true, Token::from_value, &raw).unwrap();
//!
//! assert_eq!(set.len(), 2);
//! let primary = set.find_by_reference(&reference_for("color.primary")).unwrap();
//! assert_eq!(primary.id(), "color.primary");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod token;
pub mod token_set;

pub use config::{DuplicatePolicy, SetConfig};
pub use token::{ToValue, Token, TokenLike, TokenReference};
pub use token_set::{ParseFn, Predicate, TokenSet, Values};
