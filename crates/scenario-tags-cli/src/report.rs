//! Evaluates the configured expressions and writes the result.

use std::io::Write;

use scenario_tags::TagExpression;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::CliError;

/// Which parts of the report to print.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Print declared limits as `name=limit` lines after the verdict.
    pub show_limits: bool,
}

/// Compile the configured expressions and check `tags` against them.
///
/// Writes `match` or `no match` followed by any requested limits, and
/// returns whether the tags matched.
///
/// # Errors
///
/// Returns [`CliError::Expression`] when the expressions declare conflicting
/// limits and [`CliError::Io`] when the report cannot be written.
pub fn run<W: Write>(
    config: &CliConfig,
    tags: &[String],
    options: ReportOptions,
    out: &mut W,
) -> Result<bool, CliError> {
    let expr = TagExpression::new(&config.expressions)?;
    if expr.is_empty() {
        info!("no tag expressions supplied; every tag set matches");
    } else {
        debug!(expression = %expr, "compiled tag expression");
    }

    let matched = expr.evaluate(tags);
    writeln!(out, "{}", if matched { "match" } else { "no match" })?;
    if options.show_limits {
        for (name, limit) in expr.limits().iter() {
            writeln!(out, "{name}={limit}")?;
        }
    }
    out.flush()?;
    Ok(matched)
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests write to in-memory buffers")]
mod tests {
    use super::*;
    use rstest::rstest;

    fn report(expressions: &[&str], tags: &[&str], show_limits: bool) -> (bool, String) {
        let config = CliConfig {
            expressions: expressions.iter().map(|&e| e.to_owned()).collect(),
            ..CliConfig::default()
        };
        let tags: Vec<String> = tags.iter().map(|&t| t.to_owned()).collect();
        let mut out = Vec::new();
        let matched = run(&config, &tags, ReportOptions { show_limits }, &mut out)
            .expect("report succeeds");
        (matched, String::from_utf8(out).expect("utf8 output"))
    }

    #[rstest]
    #[case(&[], &["@a"], true, "match\n")]
    #[case(&["@a"], &["@a"], true, "match\n")]
    #[case(&["@a"], &["@b"], false, "no match\n")]
    #[case(&["@a,@b", "~@c"], &["@b", "@c"], false, "no match\n")]
    fn writes_verdict(
        #[case] expressions: &[&str],
        #[case] tags: &[&str],
        #[case] expected: bool,
        #[case] output: &str,
    ) {
        let (matched, text) = report(expressions, tags, false);
        assert_eq!(matched, expected);
        assert_eq!(text, output);
    }

    #[test]
    fn lists_limits_in_name_order() {
        let (_, text) = report(&["@web:3,@db:1", "~@slow:0"], &["@db"], true);
        assert_eq!(text, "match\ndb=1\nslow=0\nweb=3\n");
    }

    #[test]
    fn surfaces_limit_conflicts() {
        let config = CliConfig {
            expressions: vec!["@a:1".into(), "@a:2".into()],
            ..CliConfig::default()
        };
        let mut out = Vec::new();
        let result = run(&config, &[], ReportOptions::default(), &mut out);
        assert!(matches!(result, Err(CliError::Expression(_))));
        assert!(out.is_empty());
    }
}
