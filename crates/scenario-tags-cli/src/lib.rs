//! Command-line front end for `scenario-tags` expressions.
//!
//! The binary compiles repeated `--tags` expressions, checks a tag set
//! against them, and reports the verdict plus any declared limits.
//!
//! # Configuration
//!
//! - `SCENARIO_TAGS_LOG_LEVEL`: log verbosity (trace, debug, info, warn,
//!   error)
//! - `SCENARIO_TAGS_EXPRESSIONS`: `;`-separated expressions used when no
//!   `--tags` flag is given

pub mod config;
pub mod error;
pub mod logging;
pub mod report;
