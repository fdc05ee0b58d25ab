//! Compiled tag expressions and their evaluation.
//!
//! An expression is a conjunction of OR-clauses. Every input string passed to
//! [`TagExpression::new`] contributes one clause, so
//! `["@smoke,@fast", "~@slow"]` reads as `(@smoke or @fast) and not @slow`.
//! No other nesting is supported.
//!
//! Limits written as `@tag:N` are collected while parsing and exposed through
//! [`TagExpression::limits`]. They do not influence matching.

use std::fmt;

use log::trace;

use crate::errors::TagExprError;
use crate::limits::TagLimits;
use crate::literal::{Tag, TagClause, presence_set};
use crate::parser::parse_clause;

/// Parsed AND-of-ORs tag filter together with its declared limits.
///
/// The value is immutable once built and can be shared freely between
/// threads.
///
/// # Examples
/// ```
/// use scenario_tags::TagExpression;
///
/// let expr = TagExpression::new(["@smoke,@fast", "~@slow"])?;
/// assert!(expr.evaluate(["@smoke"]));
/// assert!(!expr.evaluate(["@fast", "@slow"]));
/// assert!(!expr.evaluate(["@wip"]));
/// # Ok::<(), scenario_tags::TagExprError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagExpression {
    clauses: Vec<TagClause>,
    limits: TagLimits,
}

impl TagExpression {
    /// Compile a list of expression strings into one filter.
    ///
    /// Each string is a comma-separated list of `["~"] tag [":" limit]`
    /// tokens forming one OR-clause; the clauses are joined with AND. Strings
    /// that hold no named tokens (empty, blank, or only commas) are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TagExprError::LimitConflict`] when one tag name is given two
    /// different limits anywhere in the input.
    pub fn new<I, S>(expressions: I) -> Result<Self, TagExprError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut clauses = Vec::new();
        let mut limits = TagLimits::default();
        for expression in expressions {
            if let Some(clause) = parse_clause(expression.as_ref(), &mut limits)? {
                clauses.push(clause);
            }
        }
        Ok(Self { clauses, limits })
    }

    /// Check whether `tags` satisfy every clause.
    ///
    /// An expression without clauses accepts any tag set. Duplicate tags are
    /// irrelevant, and `@name` and `name` are treated as the same tag.
    #[must_use]
    pub fn evaluate<I>(&self, tags: I) -> bool
    where
        I: IntoIterator,
        I::Item: Tag,
    {
        if self.clauses.iter().all(TagClause::is_empty) {
            return true;
        }
        let present = presence_set(tags);
        let matched = self.clauses.iter().all(|clause| clause.matches(&present));
        trace!("tag expression `{self}` against {present:?}: {matched}");
        matched
    }

    /// Whether no clause was ever added.
    ///
    /// Distinguishes "no filter supplied" from a filter that happens to match
    /// everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Limits declared through `tag:N` suffixes.
    #[must_use]
    pub fn limits(&self) -> &TagLimits {
        &self.limits
    }

    /// Clauses in the order their source strings were supplied.
    #[must_use]
    pub fn clauses(&self) -> &[TagClause] {
        &self.clauses
    }
}

impl fmt::Display for TagExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, clause) in self.clauses.iter().enumerate() {
            if idx > 0 {
                f.write_str(" && ")?;
            }
            if clause.literals().len() > 1 {
                write!(f, "({clause})")?;
            } else {
                write!(f, "{clause}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
