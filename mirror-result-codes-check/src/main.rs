//! Drift check for CI.
//!
//! Usage: `mirror-result-codes-check [SNAPSHOT_JSON]`
//!
//! Compares the local result code table against a `ResponseCodeEnum`
//! snapshot (argument, or `RESULT_CODES_SNAPSHOT`) or, with neither, the
//! enumeration generated from the vendored proto. Log level comes from
//! `RUST_LOG`.
//!
//! Exit codes: 0 in sync, 1 drift, 2 bad input.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use mirror_result_codes::snapshot::EnumerationSnapshot;
use mirror_result_codes::{
    transaction_results, verify, ExternalEnumeration, ProtoResponseCodes, ResultCodeError,
};
use tracing_subscriber::EnvFilter;

const SNAPSHOT_ENV: &str = "RESULT_CODES_SNAPSHOT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    InSync,
    Drift,
    BadInput,
}

impl Outcome {
    fn code(self) -> u8 {
        match self {
            Outcome::InSync => 0,
            Outcome::Drift => 1,
            Outcome::BadInput => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

/// The argument wins over the environment variable.
fn snapshot_path(arg: Option<OsString>, env: Option<OsString>) -> Option<PathBuf> {
    arg.or(env).map(PathBuf::from)
}

fn load_upstream(path: Option<PathBuf>) -> Result<Box<dyn ExternalEnumeration>, ResultCodeError> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading enumeration snapshot");
            Ok(Box::new(EnumerationSnapshot::from_path(&path)?))
        }
        None => Ok(Box::new(ProtoResponseCodes)),
    }
}

fn run(path: Option<PathBuf>) -> Outcome {
    let upstream = match load_upstream(path) {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::error!("{e}");
            return Outcome::BadInput;
        }
    };

    match verify(transaction_results(), upstream.as_ref()) {
        Ok(report) => {
            tracing::info!(
                version = %report.version,
                checked = report.checked,
                local_only = report.local_only.len(),
                "result code table in sync"
            );
            Outcome::InSync
        }
        // Each drift was already logged at warn by the verifier.
        Err(ResultCodeError::DriftDetected { version, drifts }) => {
            tracing::error!(
                %version,
                drifts = drifts.len(),
                "result code table out of sync; update TRANSACTION_RESULTS"
            );
            Outcome::Drift
        }
        Err(e) => {
            tracing::error!("{e}");
            Outcome::BadInput
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = snapshot_path(
        std::env::args_os().nth(1),
        std::env::var_os(SNAPSHOT_ENV),
    );
    run(path).into()
}
