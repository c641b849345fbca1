//! Mirror result codes — canonical transaction result names.
//!
//! This crate owns the mapping from numeric transaction/precheck result
//! codes to the names reported by the mirror node (e.g. `22 -> "SUCCESS"`).
//! The names are defined upstream by the `ResponseCodeEnum` protobuf
//! enum; the local table MUST reproduce them byte-for-byte. The
//! [`verify`] module detects drift between the two.
//!
//! # Module Map
//!
//! | Module | Role | Status |
//! |--------|------|--------|
//! | [`constants`] | Tracked upstream version, well-known codes | Complete |
//! | [`errors`] | Unified error type, drift entries | Complete |
//! | [`table`] | Static source list + `ResultCodeTable` | Complete |
//! | [`proto`] | `ResponseCodeEnum`, generated from the vendored proto | Complete |
//! | [`enumeration`] | `ExternalEnumeration` capability + adapters | Complete |
//! | [`verify`] | Drift check, one-directional | Complete |
//! | [`status`] | Operation status (success flag per code) | Complete |
//! | [`snapshot`] | JSON snapshot of an upstream enumeration | Complete (feature) |
//!
//! # Sync Strategy
//!
//! The upstream `response_code.proto` is the single source of truth; it
//! is vendored under `proto/` and compiled by `build.rs`. When a newer
//! release is dropped in and gains a code, add the same `(code, name)` to [`table::TRANSACTION_RESULTS`].
//! Retired upstream codes may stay in the local table for historical
//! records; the verifier never fails on local-only entries.

/// Upstream version label and well-known codes.
pub mod constants;

/// Error types for mirror-result-codes.
pub mod errors;

/// The result code table and its static source list.
pub mod table;

/// Upstream protobuf enumeration (`ResponseCodeEnum`).
pub mod proto;

/// External enumeration capability — "iterate all (code, name) pairs".
pub mod enumeration;

/// Consistency verifier.
pub mod verify;

/// Operation status derived from result codes.
pub mod status;

/// JSON snapshot of an upstream enumeration.
/// Requires the `snapshot` feature: `cargo test --features snapshot`.
#[cfg(feature = "snapshot")]
pub mod snapshot;

pub use enumeration::{ExternalEnumeration, ProtoResponseCodes};
pub use errors::{Drift, ResultCodeError};
pub use table::{transaction_results, Name, ResultCode, ResultCodeTable};
pub use verify::{check_drift, verify, DriftReport};
