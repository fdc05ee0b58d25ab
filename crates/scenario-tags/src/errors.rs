//! Error types raised while building a tag expression.

use thiserror::Error;

/// Errors surfaced while compiling tag expressions.
///
/// # Examples
/// ```
/// use scenario_tags::{TagExprError, TagExpression};
/// let Err(err) = TagExpression::new(["@db:3", "@db:4"]) else {
///     panic!("conflicting limits must be rejected");
/// };
/// assert_eq!(err.to_string(), "conflicting limits for tag `db`: 3 and 4");
/// assert!(matches!(err, TagExprError::LimitConflict { existing: 3, requested: 4, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagExprError {
    /// The same bare tag name was declared with two different limits.
    #[error("conflicting limits for tag `{tag}`: {existing} and {requested}")]
    LimitConflict {
        /// Bare tag name, without negation or a leading `@`.
        tag: String,
        /// Limit recorded first.
        existing: u32,
        /// Limit that disagreed with the recorded one.
        requested: u32,
    },
}
