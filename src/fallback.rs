//! Deterministic local fallback parser.
//!
//! Resolves an instruction without any remote call: an ordered keyword table
//! picks the operation, then the first two numeric tokens become the
//! operands. Malformed input yields one of two typed failures, never a panic.

use thiserror::Error;

use crate::ops::{Operation, ResolvedOperation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("no operation keyword found")]
    NoOperation,
    #[error("fewer than two numeric operands")]
    InsufficientOperands,
}

/// Keyword table in priority order; the first entry whose keyword occurs as a
/// substring of the lowered text wins.
const KEYWORDS: &[(&str, Operation)] = &[
    ("add", Operation::Add),
    ("sum", Operation::Add),
    ("subtract", Operation::Subtract),
    ("difference", Operation::Subtract),
    ("multiply", Operation::Multiply),
    ("product", Operation::Multiply),
    ("divide", Operation::Divide),
    ("quotient", Operation::Divide),
];

/// Parse a (normalized) instruction into an operation and two operands, taken
/// in order of appearance.
pub fn parse(text: &str) -> Result<ResolvedOperation, ParseFailure> {
    let lowered = text.to_lowercase();

    let op = KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, op)| *op)
        .ok_or(ParseFailure::NoOperation)?;

    let mut numbers = lowered
        .split_whitespace()
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite());

    let a = numbers.next().ok_or(ParseFailure::InsufficientOperands)?;
    let b = numbers.next().ok_or(ParseFailure::InsufficientOperands)?;

    Ok(ResolvedOperation::new(op, a, b))
}
