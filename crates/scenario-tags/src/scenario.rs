//! Filtering parsed gherkin scenarios by their inherited tags.

use gherkin::{Feature, Rule, Scenario};

use crate::expression::TagExpression;

/// Tags a scenario inherits: feature tags, then rule tags, then its own.
///
/// The gherkin parser stores tags without the leading `@`; the iterator
/// yields them unchanged.
pub fn inherited_tags<'a>(
    feature: &'a Feature,
    rule: Option<&'a Rule>,
    scenario: &'a Scenario,
) -> impl Iterator<Item = &'a str> {
    feature
        .tags
        .iter()
        .chain(rule.into_iter().flat_map(|r| r.tags.iter()))
        .chain(scenario.tags.iter())
        .map(String::as_str)
}

impl TagExpression {
    /// Evaluate the expression against a scenario's inherited tags.
    ///
    /// # Examples
    /// ```
    /// use gherkin::{Feature, GherkinEnv};
    /// use scenario_tags::TagExpression;
    ///
    /// let feature = Feature::parse(
    ///     "@web\nFeature: Login\n  @slow\n  Scenario: remember me\n    Given a user\n",
    ///     GherkinEnv::default(),
    /// )?;
    /// let scenario = &feature.scenarios[0];
    /// let expr = TagExpression::new(["@web", "~@slow"])?;
    /// assert!(!expr.matches_scenario(&feature, None, scenario));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn matches_scenario(
        &self,
        feature: &Feature,
        rule: Option<&Rule>,
        scenario: &Scenario,
    ) -> bool {
        self.evaluate(inherited_tags(feature, rule, scenario))
    }
}
