//! Conformance harness — result code table vs. upstream enumeration.
//!
//! Invariant coverage:
//! - Completeness: every upstream (code, name) is in the local table
//! - Uniqueness: no repeated codes in the local table
//! - Stability: repeated lookups agree
//! - Asymmetry: local-only codes never fail the verifier
//! - Drift reporting: mismatched and missing codes are named
//!
//! Snapshot checks need `--features snapshot`.

mod drift_scenarios;
mod enumeration_sync;

#[cfg(feature = "snapshot")]
mod snapshot_sync;
