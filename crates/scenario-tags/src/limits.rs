//! Per-tag limits declared through the `tag:N` suffix.

use std::collections::BTreeMap;

use crate::errors::TagExprError;
use crate::literal::bare;

/// Read-only mapping from bare tag name to its declared limit.
///
/// Names are stored without a leading `@`. Lookups accept either spelling.
///
/// # Examples
/// ```
/// use scenario_tags::TagExpression;
/// let expr = TagExpression::new(["@db:2,@fast", "~@slow:1"])?;
/// let limits = expr.limits();
/// assert_eq!(limits.get("@db"), Some(2));
/// assert_eq!(limits.get("slow"), Some(1));
/// assert_eq!(limits.get("fast"), None);
/// # Ok::<(), scenario_tags::TagExprError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagLimits {
    entries: BTreeMap<String, u32>,
}

impl TagLimits {
    /// Record `limit` for `name`, keeping any equal value already present.
    ///
    /// # Errors
    ///
    /// Returns [`TagExprError::LimitConflict`] when a different limit was
    /// already recorded for the same bare name.
    pub(crate) fn record(&mut self, name: &str, limit: u32) -> Result<(), TagExprError> {
        let key = bare(name);
        match self.entries.get(key) {
            None => {
                self.entries.insert(key.to_owned(), limit);
                Ok(())
            }
            Some(&existing) if existing == limit => Ok(()),
            Some(&existing) => Err(TagExprError::LimitConflict {
                tag: key.to_owned(),
                existing,
                requested: limit,
            }),
        }
    }

    /// Limit declared for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.get(bare(name)).copied()
    }

    /// Whether a limit was declared for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(bare(name))
    }

    /// Number of limited tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no limits were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Limits ordered by tag name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries
            .iter()
            .map(|(name, limit)| (name.as_str(), *limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_equal_limit_is_accepted() {
        let mut limits = TagLimits::default();
        assert!(limits.record("@a", 3).is_ok());
        assert!(limits.record("a", 3).is_ok());
        assert_eq!(limits.len(), 1);
        assert_eq!(limits.get("a"), Some(3));
    }

    #[test]
    fn conflicting_limit_keeps_first_value() {
        let mut limits = TagLimits::default();
        assert!(limits.record("@a", 3).is_ok());
        assert_eq!(
            limits.record("@a", 4),
            Err(TagExprError::LimitConflict {
                tag: "a".into(),
                existing: 3,
                requested: 4,
            })
        );
        assert_eq!(limits.get("@a"), Some(3));
    }

    #[test]
    fn iterates_in_name_order() {
        let mut limits = TagLimits::default();
        for (name, limit) in [("@z", 1), ("@b", 0), ("@m", 7)] {
            assert!(limits.record(name, limit).is_ok());
        }
        let collected: Vec<_> = limits.iter().collect();
        assert_eq!(collected, vec![("b", 0), ("m", 7), ("z", 1)]);
    }
}
