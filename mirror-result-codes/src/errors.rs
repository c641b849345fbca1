//! Error types for mirror-result-codes.
//!
//! One enum covers every failure the crate can report. `DriftDetected`
//! carries each offending entry so the fix can be made directly in
//! `table::TRANSACTION_RESULTS`.

use std::fmt;

use crate::table::ResultCode;

/// Unified error type for all mirror-result-codes operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResultCodeError {
    /// Lookup of a code that is not in the table.
    #[error("Unknown result code: {0}")]
    UnknownCode(ResultCode),

    /// The same code appears twice in a table source list.
    #[error("Duplicate result code: {0}")]
    DuplicateCode(ResultCode),

    /// The local table disagrees with the upstream enumeration.
    #[error("Drift detected against {version}: {} code(s) out of sync", .drifts.len())]
    DriftDetected {
        /// Upstream version label the check ran against.
        version: String,
        /// Every offending entry, ascending by code.
        drifts: Vec<Drift>,
    },

    /// A snapshot could not be read or parsed.
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

/// One entry of drift between the local table and the upstream
/// enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drift {
    /// Local name differs from the upstream name.
    Mismatch {
        /// Offending code.
        code: ResultCode,
        /// Upstream name.
        expected: String,
        /// Local name.
        actual: String,
    },
    /// Upstream code has no local entry.
    Missing {
        /// Offending code.
        code: ResultCode,
        /// Upstream name.
        expected: String,
    },
}

impl Drift {
    /// The offending result code.
    pub fn code(&self) -> ResultCode {
        match self {
            Drift::Mismatch { code, .. } | Drift::Missing { code, .. } => *code,
        }
    }

    /// The upstream (expected) name.
    pub fn expected(&self) -> &str {
        match self {
            Drift::Mismatch { expected, .. } | Drift::Missing { expected, .. } => expected,
        }
    }

    /// The local name, or `None` when the code is missing locally.
    pub fn actual(&self) -> Option<&str> {
        match self {
            Drift::Mismatch { actual, .. } => Some(actual),
            Drift::Missing { .. } => None,
        }
    }
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drift::Mismatch {
                code,
                expected,
                actual,
            } => write!(f, "code {code}: expected {expected:?}, found {actual:?}"),
            Drift::Missing { code, expected } => {
                write!(f, "code {code}: expected {expected:?}, missing from local table")
            }
        }
    }
}
