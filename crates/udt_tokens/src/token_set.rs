//! Ordered, validated, reference-keyed token sets.
//!
//! A [`TokenSet`] holds at most one token per [`Reference`], remembers the
//! order in which references were first inserted, and only ever stores
//! tokens its acceptance predicate allows.
//!
//! # Storage
//!
//! Tokens live in an `im::OrdMap` keyed by a monotonically increasing
//! insertion sequence number, with an `im::HashMap` from reference to
//! sequence number alongside. Removing a token drops its sequence number
//! without renumbering the rest, so relative order survives removal and
//! iteration is a walk of the ordered map. Both maps share structure on
//! clone, which makes [`TokenSet::snapshot`] O(1).

use std::fmt;
use std::sync::Arc;

use tracing::trace;
use udt_foundation::{Error, ErrorContext, Reference, Result, Value};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::config::{DuplicatePolicy, SetConfig};
use crate::token::{ToValue, Token, TokenLike, TokenReference};

const TARGET: &str = "udt::token_set";

/// Decides whether a candidate is a token of the variant a set accepts.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Converts one raw record into a token.
pub type ParseFn<T> = Arc<dyn Fn(&Value) -> Result<T> + Send + Sync>;

/// An insertion-ordered set of tokens, unique by reference.
///
/// Invariants, upheld across every operation including failed ones:
/// - at most one stored token per reference
/// - iteration order is the order references were first inserted
/// - every stored token satisfies the acceptance predicate
/// - [`len`](TokenSet::len) equals the number of stored references
///
/// The set is not internally synchronized. Share it across threads behind
/// a lock, or confine it to one owner.
pub struct TokenSet<T>
where
    T: TokenLike + Clone,
{
    accepts: Predicate<T>,
    parse: ParseFn<T>,
    config: SetConfig,
    /// Reference -> insertion sequence number.
    index: im::HashMap<Reference, u64>,
    /// Insertion sequence number -> token.
    entries: im::OrdMap<u64, T>,
    next_seq: u64,
}

impl<T: TokenLike + Clone> TokenSet<T> {
    /// Creates an empty set with the default configuration.
    ///
    /// `accepts` decides which candidates may be inserted; `parse` turns a
    /// raw record into a token when the set is built from raw data.
    pub fn new<A, P>(accepts: A, parse: P) -> Self
    where
        A: Fn(&T) -> bool + Send + Sync + 'static,
        P: Fn(&Value) -> Result<T> + Send + Sync + 'static,
    {
        Self::with_config(accepts, parse, SetConfig::default())
    }

    /// Creates an empty set with the given configuration.
    pub fn with_config<A, P>(accepts: A, parse: P, config: SetConfig) -> Self
    where
        A: Fn(&T) -> bool + Send + Sync + 'static,
        P: Fn(&Value) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            accepts: Arc::new(accepts),
            parse: Arc::new(parse),
            config,
            index: im::HashMap::new(),
            entries: im::OrdMap::new(),
            next_seq: 0,
        }
    }

    /// Builds a set from a raw list of records.
    ///
    /// See [`TokenSet::from_raw_with_config`].
    ///
    /// # Errors
    ///
    /// As for [`TokenSet::from_raw_with_config`].
    pub fn from_raw<A, P>(accepts: A, parse: P, raw: &Value) -> Result<Self>
    where
        A: Fn(&T) -> bool + Send + Sync + 'static,
        P: Fn(&Value) -> Result<T> + Send + Sync + 'static,
    {
        Self::from_raw_with_config(accepts, parse, raw, SetConfig::default())
    }

    /// Builds a set from a raw list of records with the given configuration.
    ///
    /// `parse` is called exactly once per record, in list order, and each
    /// parsed token is inserted exactly as [`insert`](TokenSet::insert)
    /// would. Either every record is taken in or no set is returned.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `raw` is not a list; no record is parsed.
    /// - `InvalidTokenType` if a parsed token fails the predicate. The error
    ///   context carries the record's index.
    /// - Any error returned by `parse`, unchanged.
    pub fn from_raw_with_config<A, P>(
        accepts: A,
        parse: P,
        raw: &Value,
        config: SetConfig,
    ) -> Result<Self>
    where
        A: Fn(&T) -> bool + Send + Sync + 'static,
        P: Fn(&Value) -> Result<T> + Send + Sync + 'static,
    {
        let Some(records) = raw.as_list() else {
            return Err(Error::invalid_input(raw.value_type())
                .with_context(ErrorContext::new().with_source(config.label.clone())));
        };

        let label = config.label.clone();
        let mut set = Self::with_config(accepts, parse, config);
        for (index, record) in records.iter().enumerate() {
            let token = (set.parse)(record)?;
            set.insert(token).map_err(|err| {
                err.with_context(
                    ErrorContext::new()
                        .with_source(label.clone())
                        .with_index(index),
                )
            })?;
        }

        trace!(
            target: TARGET,
            label = %set.config.label,
            records = records.len(),
            size = set.len(),
            "built token set from raw records"
        );
        Ok(set)
    }

    /// Returns the set's configuration.
    #[must_use]
    pub fn config(&self) -> &SetConfig {
        &self.config
    }

    /// Returns the label of the token variant this set accepts.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.config.label
    }

    /// Returns true if `candidate` would pass this set's predicate.
    #[must_use]
    pub fn accepts(&self, candidate: &T) -> bool {
        (self.accepts)(candidate)
    }

    /// Parses one raw record with this set's parse function.
    ///
    /// The token is not inserted.
    ///
    /// # Errors
    ///
    /// Any error returned by the parse function.
    pub fn parse(&self, raw: &Value) -> Result<T> {
        (self.parse)(raw)
    }

    /// Inserts a token, returning the set for chaining.
    ///
    /// If a token with the same reference is already stored, size and
    /// order are unchanged; whether the stored token is kept or replaced
    /// follows the configured [`DuplicatePolicy`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidTokenType` if `candidate` fails the predicate. The
    /// set is left untouched.
    pub fn insert(&mut self, candidate: T) -> Result<&mut Self> {
        if !(self.accepts)(&candidate) {
            return Err(Error::invalid_token_type(
                candidate.id(),
                self.config.label.clone(),
            )
            .with_context(ErrorContext::new().with_source(self.config.label.clone())));
        }

        let reference = candidate.reference();
        let existing = self.index.get(&reference).copied();
        if let Some(seq) = existing {
            match self.config.duplicates {
                DuplicatePolicy::KeepFirst => {
                    trace!(target: TARGET, id = candidate.id(), "duplicate token ignored");
                }
                DuplicatePolicy::ReplaceInPlace => {
                    trace!(target: TARGET, id = candidate.id(), "duplicate token replaced");
                    self.entries.insert(seq, candidate);
                }
            }
            return Ok(self);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        trace!(target: TARGET, id = candidate.id(), seq, "token inserted");
        self.index.insert(reference, seq);
        self.entries.insert(seq, candidate);
        Ok(self)
    }

    /// Inserts candidates in order, stopping at the first rejection.
    ///
    /// Candidates inserted before the rejected one stay in the set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTokenType` for the first candidate that fails the
    /// predicate.
    pub fn try_extend<I>(&mut self, candidates: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
    {
        for candidate in candidates {
            self.insert(candidate)?;
        }
        Ok(self)
    }

    /// Returns true if a token with the candidate's reference is stored.
    #[must_use]
    pub fn contains(&self, candidate: &T) -> bool {
        self.contains_reference(&candidate.reference())
    }

    /// Returns true if a token is stored under `reference`.
    #[must_use]
    pub fn contains_reference(&self, reference: &Reference) -> bool {
        self.index.contains_key(reference)
    }

    /// Removes the token with the candidate's reference.
    ///
    /// Returns whether a token was removed. The relative order of the
    /// remaining tokens is unchanged.
    pub fn remove(&mut self, candidate: &T) -> bool {
        self.remove_reference(&candidate.reference()).is_some()
    }

    /// Removes and returns the token stored under `reference`.
    pub fn remove_reference(&mut self, reference: &Reference) -> Option<T> {
        let seq = self.index.remove(reference)?;
        trace!(target: TARGET, id = reference.id(), seq, "token removed");
        self.entries.remove(&seq)
    }

    /// Removes every token.
    pub fn clear(&mut self) {
        trace!(target: TARGET, label = %self.config.label, size = self.len(), "token set cleared");
        self.index = im::HashMap::new();
        self.entries = im::OrdMap::new();
        self.next_seq = 0;
    }

    /// Returns the number of stored tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no tokens are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the token stored under `reference`.
    #[must_use]
    pub fn find_by_reference(&self, reference: &Reference) -> Option<&T> {
        self.index.get(reference).and_then(|seq| self.entries.get(seq))
    }

    /// Looks up the token with the given id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        // Keys are `reference_for(id)`, which borrows as `id`.
        self.index.get(id).and_then(|seq| self.entries.get(seq))
    }

    /// Returns an iterator over the tokens in insertion order.
    ///
    /// Every call starts a fresh traversal.
    #[must_use]
    pub fn values(&self) -> Values<'_, T> {
        Values {
            inner: self.entries.values(),
            remaining: self.entries.len(),
        }
    }

    /// Returns an iterator over the tokens in insertion order.
    ///
    /// Same as [`values`](TokenSet::values).
    #[must_use]
    pub fn iter(&self) -> Values<'_, T> {
        self.values()
    }

    /// Returns an iterator over the stored references in insertion order.
    pub fn references(&self) -> impl Iterator<Item = Reference> + '_ {
        self.values().map(TokenReference::reference)
    }

    /// Returns an independent copy of the set.
    ///
    /// O(1): the copy shares structure with `self`, and mutating either one
    /// never affects the other.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Returns the stored tokens, in insertion order, ready for a serializer.
    #[must_use]
    pub fn to_serializable(&self) -> Vec<&T> {
        self.values().collect()
    }
}

impl<T: TokenLike + ToValue + Clone> TokenSet<T> {
    /// Returns the raw form of the set: a list of each token's raw form, in
    /// insertion order.
    ///
    /// Passing the result back to [`TokenSet::from_raw`] with a matching
    /// parser rebuilds an equal set.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::List(self.values().map(ToValue::to_value).collect())
    }
}

impl TokenSet<Token> {
    /// Creates an empty set that accepts any [`Token`] and parses records
    /// with [`Token::from_value`].
    #[must_use]
    pub fn basic() -> Self {
        Self::new(|_: &Token| true, Token::from_value)
    }
}

impl<T: TokenLike + Clone> Clone for TokenSet<T> {
    fn clone(&self) -> Self {
        Self {
            accepts: Arc::clone(&self.accepts),
            parse: Arc::clone(&self.parse),
            config: self.config.clone(),
            index: self.index.clone(),
            entries: self.entries.clone(),
            next_seq: self.next_seq,
        }
    }
}

impl<T: TokenLike + Clone + fmt::Debug> fmt::Debug for TokenSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenSet<{}> ", self.config.label)?;
        f.debug_list().entries(self.values()).finish()
    }
}

/// Two sets are equal if they hold equal tokens in the same order.
///
/// Predicates, parsers and configuration are not compared.
impl<T: TokenLike + Clone + PartialEq> PartialEq for TokenSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.values().eq(other.values())
    }
}

#[cfg(feature = "serde")]
impl<T: TokenLike + Clone + Serialize> Serialize for TokenSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values())
    }
}

impl<'a, T: TokenLike + Clone> IntoIterator for &'a TokenSet<T> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the tokens of a [`TokenSet`] in insertion order.
pub struct Values<'a, T> {
    inner: im::ordmap::Values<'a, u64, T>,
    remaining: usize,
}

impl<'a, T: Clone> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Values<'_, T> {}
