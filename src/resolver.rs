//! The command-resolution pipeline.
//!
//! Orchestrates one instruction end to end: normalize once, try the remote
//! tool-call client, fall back to the local parser on any remote failure,
//! format the result, then append a history record. Unresolvable
//! instructions yield a generic message and leave no record. Each layer runs
//! at most once per instruction; there are no retries.

use std::sync::Arc;

use crate::db::queries::{self, HistoryRow};
use crate::db::{Database, DbError};
use crate::fallback;
use crate::model::GroqClient;
use crate::normalize;
use crate::ops::ResolvedOperation;

/// Message shown when neither resolution layer could interpret the input.
pub const UNRESOLVED_MESSAGE: &str =
    "Fallback: Unable to process the calculation. Please check your input.";

/// Terminal outcome of one resolution.
#[derive(Debug)]
pub enum Resolution {
    /// The instruction was interpreted and the result recorded.
    Calculated(HistoryRow),
    /// Neither layer could interpret the instruction; nothing was recorded.
    Unresolved,
}

impl Resolution {
    /// User-facing text for this outcome.
    pub fn message(&self) -> &str {
        match self {
            Resolution::Calculated(record) => &record.result,
            Resolution::Unresolved => UNRESOLVED_MESSAGE,
        }
    }
}

pub struct CommandResolver {
    remote: Option<GroqClient>,
    db: Arc<Database>,
}

impl CommandResolver {
    /// Build a resolver. `remote` is optional: without it, resolution goes
    /// straight to the local parser.
    pub fn new(remote: Option<GroqClient>, db: Arc<Database>) -> Self {
        Self { remote, db }
    }

    /// Resolve one instruction end to end. Storage faults are the only
    /// errors that propagate; every resolution failure is absorbed into the
    /// unresolved outcome.
    pub async fn resolve(&self, instruction: &str) -> Result<Resolution, DbError> {
        let normalized = normalize::normalize(instruction);
        tracing::debug!("normalized instruction: {:?}", normalized);

        let resolved = match self.attempt_remote(&normalized).await {
            Some(op) => Some(op),
            None => self.attempt_local(&normalized),
        };

        let Some(op) = resolved else {
            return Ok(Resolution::Unresolved);
        };

        // Division by zero formats as its sentinel and is recorded like any
        // other result.
        let result = op.describe();
        let record = queries::append_history(&self.db, instruction, &result)?;
        tracing::debug!("recorded history entry {}", record.id);
        Ok(Resolution::Calculated(record))
    }

    async fn attempt_remote(&self, normalized: &str) -> Option<ResolvedOperation> {
        let client = self.remote.as_ref()?;
        match client.resolve(normalized).await {
            Ok(op) => {
                tracing::debug!("remote selected {}({}, {})", op.op, op.a, op.b);
                Some(op)
            }
            Err(failure) => {
                tracing::warn!("remote resolution failed, falling back: {failure}");
                None
            }
        }
    }

    fn attempt_local(&self, normalized: &str) -> Option<ResolvedOperation> {
        match fallback::parse(normalized) {
            Ok(op) => Some(op),
            Err(failure) => {
                tracing::debug!("local parse failed: {failure}");
                None
            }
        }
    }
}
