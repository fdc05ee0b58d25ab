//! Configuration parsed from environment variables.
//!
//! Every setting can be supplied through a `SCENARIO_TAGS_` environment
//! variable and overridden on the command line.

use std::env;
use std::str::FromStr;

use crate::error::CliError;

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "SCENARIO_TAGS_LOG_LEVEL";

/// Environment variable holding `;`-separated tag expressions.
pub const EXPRESSIONS_ENV: &str = "SCENARIO_TAGS_EXPRESSIONS";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so ignored limit suffixes are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes per-evaluation traces.
    Trace,
    /// Parsed clauses and skipped inputs.
    Debug,
    /// Standard informational messages.
    Info,
    /// Ignored or suspicious input.
    #[default]
    Warn,
    /// Failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Settings for one invocation.
///
/// # Environment Variables
///
/// - `SCENARIO_TAGS_LOG_LEVEL`: trace, debug, info, warn, or error
/// - `SCENARIO_TAGS_EXPRESSIONS`: tag expressions separated by `;`, used when
///   no `--tags` flag is given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level for the stderr subscriber.
    pub log_level: LogLevel,
    /// Raw tag expressions, one OR-clause each.
    pub expressions: Vec<String>,
}

fn split_expressions(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|expression| !expression.is_empty())
        .map(str::to_owned)
        .collect()
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup(LOG_LEVEL_ENV)
            .map(|val| val.parse::<LogLevel>())
            .transpose()?
            .unwrap_or_default();

        let expressions = lookup(EXPRESSIONS_ENV)
            .map(|val| split_expressions(&val))
            .unwrap_or_default();

        Ok(Self {
            log_level,
            expressions,
        })
    }

    /// Apply command-line overrides on top of the environment.
    ///
    /// Expressions given on the command line replace the environment list
    /// entirely rather than extending it.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>, expressions: Vec<String>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if !expressions.is_empty() {
            self.expressions = expressions;
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("DEBUG", LogLevel::Debug)]
    #[case("Info", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case("error", LogLevel::Error)]
    fn log_level_parses_valid_values(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "loud".parse::<LogLevel>();
        assert!(result.unwrap_err().to_string().contains("unknown log level"));
    }

    #[rstest]
    #[case("@a;~@b:2", &["@a", "~@b:2"])]
    #[case(" @a , @b ; ; @c ", &["@a , @b", "@c"])]
    #[case("", &[])]
    fn splits_expression_list(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(split_expressions(input), expected);
    }

    #[test]
    fn apply_overrides_prefers_command_line() {
        let config = CliConfig {
            log_level: LogLevel::Info,
            expressions: vec!["@env".into()],
        };
        let config = config.apply_overrides(Some(LogLevel::Trace), vec!["@cli".into()]);
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.expressions, vec!["@cli".to_string()]);

        let config = config.apply_overrides(None, Vec::new());
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.expressions, vec!["@cli".to_string()]);
    }

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn reads_both_variables() {
        let vars = [(LOG_LEVEL_ENV, "debug"), (EXPRESSIONS_ENV, "@a;@b")];
        let config = CliConfig::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.expressions, vec!["@a".to_string(), "@b".to_string()]);
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn rejects_unknown_level() {
        let vars = [(LOG_LEVEL_ENV, "chatty")];
        let result = CliConfig::from_lookup(lookup_from(&vars));
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }
}
