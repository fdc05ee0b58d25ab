//! Literals, OR-clauses, and the tag abstraction they are matched against.
//!
//! Tag names are compared after removing a single leading `@`, so `@smoke`
//! in an expression matches both `@smoke` as typed on a command line and
//! `smoke` as stored by the gherkin parser.

use std::collections::HashSet;
use std::fmt;

/// Anything that carries a tag name.
///
/// Evaluation only ever reads the name; richer tag types (for instance ones
/// that also track a source location) implement this to take part in
/// filtering.
///
/// # Examples
/// ```
/// use scenario_tags::Tag;
///
/// struct Located {
///     name: String,
///     line: usize,
/// }
///
/// impl Tag for Located {
///     fn name(&self) -> &str {
///         &self.name
///     }
/// }
///
/// let tag = Located { name: "@smoke".into(), line: 3 };
/// assert_eq!(tag.name(), "@smoke");
/// # let _ = tag.line;
/// ```
pub trait Tag {
    /// Name of the tag, with or without a leading `@`.
    fn name(&self) -> &str;
}

impl Tag for str {
    fn name(&self) -> &str {
        self
    }
}

impl Tag for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl<T: Tag + ?Sized> Tag for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Strip one leading `@` so both spellings of a tag compare equal.
pub(crate) fn bare(name: &str) -> &str {
    name.strip_prefix('@').unwrap_or(name)
}

/// Set of bare tag names present on a scenario.
pub(crate) type PresenceSet = HashSet<String>;

pub(crate) fn presence_set<I>(tags: I) -> PresenceSet
where
    I: IntoIterator,
    I::Item: Tag,
{
    tags.into_iter()
        .map(|tag| bare(tag.name()).to_owned())
        .collect()
}

/// A single tag name, optionally negated with `~`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagLiteral {
    name: String,
    negated: bool,
}

impl TagLiteral {
    pub(crate) fn new(name: impl Into<String>, negated: bool) -> Self {
        Self {
            name: name.into(),
            negated,
        }
    }

    /// Tag name as written, without the `~` marker.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag name without a leading `@`; the key used for matching and limits.
    #[must_use]
    pub fn bare_name(&self) -> &str {
        bare(&self.name)
    }

    /// Whether the literal was written with a leading `~`.
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub(crate) fn matches(&self, present: &PresenceSet) -> bool {
        present.contains(self.bare_name()) != self.negated
    }
}

impl fmt::Display for TagLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("~")?;
        }
        f.write_str(&self.name)
    }
}

/// OR-group of literals, holding when any literal holds.
///
/// Literals are kept in insertion order; exact duplicates are collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagClause {
    literals: Vec<TagLiteral>,
}

impl TagClause {
    pub(crate) fn push(&mut self, literal: TagLiteral) {
        if !self.literals.contains(&literal) {
            self.literals.push(literal);
        }
    }

    /// Literals in the order they are tested.
    #[must_use]
    pub fn literals(&self) -> &[TagLiteral] {
        &self.literals
    }

    /// Whether the clause holds no literals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub(crate) fn matches(&self, present: &PresenceSet) -> bool {
        self.literals.iter().any(|literal| literal.matches(present))
    }
}

impl fmt::Display for TagClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, literal) in self.literals.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{literal}")?;
        }
        Ok(())
    }
}
