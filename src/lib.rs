//! udt - design token modeling
//!
//! This crate re-exports all layers of the udt system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: udt_tokens     — TokenLike contract, Token, TokenSet
//! Layer 0: udt_foundation — Raw values, references, errors
//! ```

pub use udt_foundation as foundation;
pub use udt_tokens as tokens;
