//! Drift detection — local table vs. external enumeration.
//!
//! One linear pass over the upstream pairs. The check is one-directional:
//! every upstream code must be present locally with the same name, but
//! local-only codes (retired upstream, still needed for history) never
//! fail it. Drift is always an error; it is not retried or downgraded.

use crate::enumeration::ExternalEnumeration;
use crate::errors::{Drift, ResultCodeError};
use crate::table::{ResultCode, ResultCodeTable};

/// Outcome of one verifier pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftReport {
    /// Upstream version label.
    pub version: String,
    /// Number of upstream pairs compared.
    pub checked: usize,
    /// Offending entries, ascending by code.
    pub drifts: Vec<Drift>,
    /// Local codes with no upstream counterpart (informational).
    pub local_only: Vec<ResultCode>,
}

impl DriftReport {
    pub fn is_clean(&self) -> bool {
        self.drifts.is_empty()
    }

    /// Clean report as `Ok`, otherwise [`ResultCodeError::DriftDetected`].
    pub fn into_result(self) -> Result<Self, ResultCodeError> {
        if self.is_clean() {
            Ok(self)
        } else {
            Err(ResultCodeError::DriftDetected {
                version: self.version,
                drifts: self.drifts,
            })
        }
    }
}

/// Compare `table` against `external` and collect every drift.
pub fn check_drift<E>(table: &ResultCodeTable, external: &E) -> DriftReport
where
    E: ExternalEnumeration + ?Sized,
{
    let mut pairs = external.pairs();
    pairs.sort_unstable_by_key(|&(code, _)| code);

    let mut drifts = Vec::new();
    for &(code, expected) in &pairs {
        match table.get(code) {
            Some(actual) if actual == expected => {}
            Some(actual) => drifts.push(Drift::Mismatch {
                code,
                expected: expected.to_owned(),
                actual: actual.to_owned(),
            }),
            None => drifts.push(Drift::Missing {
                code,
                expected: expected.to_owned(),
            }),
        }
    }

    let local_only: Vec<ResultCode> = table
        .iter()
        .map(|(code, _)| code)
        .filter(|code| pairs.binary_search_by_key(code, |&(c, _)| c).is_err())
        .collect();

    for drift in &drifts {
        tracing::warn!(version = external.version(), "result code drift: {drift}");
    }
    tracing::debug!(
        version = external.version(),
        checked = pairs.len(),
        drifts = drifts.len(),
        local_only = local_only.len(),
        "result code table checked"
    );

    DriftReport {
        version: external.version().to_owned(),
        checked: pairs.len(),
        drifts,
        local_only,
    }
}

/// Fail with [`ResultCodeError::DriftDetected`] unless every upstream
/// pair is matched exactly by `table`.
pub fn verify<E>(table: &ResultCodeTable, external: &E) -> Result<DriftReport, ResultCodeError>
where
    E: ExternalEnumeration + ?Sized,
{
    check_drift(table, external).into_result()
}
