//! The four arithmetic operations and their result formatting.
//!
//! Division by zero is a defined outcome, not an error: `apply` reports it as
//! a distinct `Evaluation` variant and `describe` renders the sentinel
//! message, so the condition travels through the pipeline like any result.

use std::fmt;
use std::str::FromStr;

/// Sentinel text reported when Divide is attempted with a zero divisor.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Error: Division by zero";

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// The closed set of supported operations. Adding or removing one is a
/// compile-time-checked change: every dispatch below matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Wire name, as declared to the remote model.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    pub const fn all() -> &'static [Operation] {
        &[
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ]
    }

    pub fn apply(&self, a: f64, b: f64) -> Evaluation {
        match self {
            Operation::Add => Evaluation::Value(a + b),
            Operation::Subtract => Evaluation::Value(a - b),
            Operation::Multiply => Evaluation::Value(a * b),
            Operation::Divide => {
                if b == 0.0 {
                    Evaluation::DivisionByZero
                } else {
                    Evaluation::Value(a / b)
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            _ => Err(format!("unknown operation: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Outcome of applying an operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Value(f64),
    DivisionByZero,
}

impl Evaluation {
    pub fn value(self) -> Option<f64> {
        match self {
            Evaluation::Value(v) => Some(v),
            Evaluation::DivisionByZero => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ResolvedOperation
// ---------------------------------------------------------------------------

/// An operation bound to exactly two finite operands, in `a`, `b` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOperation {
    pub op: Operation,
    pub a: f64,
    pub b: f64,
}

impl ResolvedOperation {
    pub fn new(op: Operation, a: f64, b: f64) -> Self {
        Self { op, a, b }
    }

    pub fn evaluate(&self) -> Evaluation {
        self.op.apply(self.a, self.b)
    }

    /// Render the result sentence for this operation, or the division-by-zero
    /// sentinel (returned unformatted).
    pub fn describe(&self) -> String {
        let value = match self.evaluate() {
            Evaluation::Value(v) => v,
            Evaluation::DivisionByZero => return DIVISION_BY_ZERO_MESSAGE.to_string(),
        };

        let (a, b, result) = (
            format_number(self.a),
            format_number(self.b),
            format_number(value),
        );
        match self.op {
            Operation::Add => format!("The sum of {a} and {b} is {result}."),
            Operation::Subtract => format!("The difference between {a} and {b} is {result}."),
            Operation::Multiply => format!("The product of {a} and {b} is {result}."),
            Operation::Divide => format!("The result of dividing {a} by {b} is {result}."),
        }
    }
}

/// Shortest-decimal rendering that always keeps a fractional part for whole
/// numbers: 5 prints as "5.0", 2.5 as "2.5".
fn format_number(value: f64) -> String {
    format!("{value:?}")
}
