//! Tag-expression filtering for BDD scenarios.
//!
//! A filter is built from a list of strings such as
//! `["@smoke,@fast", "~@slow:2"]`. Each string is an OR-clause of possibly
//! negated tags; the clauses are combined with AND. A `:N` suffix declares a
//! limit for the bare tag name, which callers enforcing per-tag scenario
//! counts read back through [`TagExpression::limits`].
//!
//! ```
//! use scenario_tags::TagExpression;
//!
//! let expr = TagExpression::new(["@smoke,@fast", "~@slow:2"])?;
//! assert!(expr.evaluate(["@fast", "@db"]));
//! assert!(!expr.evaluate(["@fast", "@slow"]));
//! assert_eq!(expr.limits().get("slow"), Some(2));
//! assert_eq!(expr.to_string(), "(@smoke,@fast) && ~@slow");
//! # Ok::<(), scenario_tags::TagExprError>(())
//! ```

mod errors;
mod expression;
mod limits;
mod literal;
mod parser;
mod scenario;

pub use errors::TagExprError;
pub use expression::TagExpression;
pub use limits::TagLimits;
pub use literal::{Tag, TagClause, TagLiteral};
pub use scenario::inherited_tags;
