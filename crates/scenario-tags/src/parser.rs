//! Tokeniser for a single comma-separated OR-clause.
//!
//! Each token follows `["~"] name [":" limit]`. Negative tokens are placed
//! ahead of positive ones so the rendered clause is stable regardless of how
//! the user ordered them. Limits are recorded against the bare tag name even
//! when the token itself is negated.

use log::{debug, warn};

use crate::errors::TagExprError;
use crate::limits::TagLimits;
use crate::literal::{TagClause, TagLiteral};

/// A token split into its literal and optional limit.
#[derive(Debug, PartialEq, Eq)]
struct Token<'a> {
    literal: TagLiteral,
    limit: Option<u32>,
    raw: &'a str,
}

fn split_token(raw: &str) -> Token<'_> {
    let (head, suffix) = raw
        .split_once(':')
        .map_or((raw, None), |(head, suffix)| (head, Some(suffix)));
    let (name, negated) = head
        .strip_prefix('~')
        .map_or((head, false), |name| (name, true));
    let limit = suffix.and_then(|text| {
        text.trim()
            .parse::<u32>()
            .inspect_err(|_| {
                warn!("ignoring limit `{text}` on tag token `{raw}`: not a non-negative integer");
            })
            .ok()
    });
    Token {
        literal: TagLiteral::new(name, negated),
        limit,
        raw,
    }
}

/// Parse one expression string into a clause, recording limits as it goes.
///
/// Returns `Ok(None)` when the input holds no tokens at all (empty, blank,
/// or only separators), so such inputs add nothing to the expression.
pub(crate) fn parse_clause(
    input: &str,
    limits: &mut TagLimits,
) -> Result<Option<TagClause>, TagExprError> {
    let (negative, positive): (Vec<&str>, Vec<&str>) = input
        .trim()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .partition(|token| token.starts_with('~'));

    if negative.is_empty() && positive.is_empty() {
        debug!("skipping tag expression without tokens: {input:?}");
        return Ok(None);
    }

    let mut clause = TagClause::default();
    for raw in negative.into_iter().chain(positive) {
        let token = split_token(raw);
        if token.literal.name().is_empty() {
            debug!("skipping tag token without a name: {:?}", token.raw);
            if let Some(limit) = token.limit {
                warn!("ignoring limit {limit} on nameless tag token {:?}", token.raw);
            }
            continue;
        }
        if let Some(limit) = token.limit {
            limits.record(token.literal.name(), limit)?;
        }
        clause.push(token.literal);
    }

    if clause.is_empty() {
        debug!("skipping tag expression whose tokens carry no names: {input:?}");
        return Ok(None);
    }
    debug!("parsed tag clause `{clause}` from {input:?}");
    Ok(Some(clause))
}
