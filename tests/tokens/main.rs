//! Integration tests for Layer 1: Tokens
//!
//! Tests for the token contract and ordered, validated token sets.

mod custom_types;
mod token_set;
