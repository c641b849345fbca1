//! Conformance: committed `ResponseCodeEnum` snapshot.
//!
//! `tests/fixtures/response_codes.snapshot.json` is an export of the
//! upstream enumeration at the tracked version.

use std::path::PathBuf;

use mirror_result_codes::constants::TRACKED_ENUMERATION_VERSION;
use mirror_result_codes::snapshot::EnumerationSnapshot;
use mirror_result_codes::{transaction_results, verify, ProtoResponseCodes};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("response_codes.snapshot.json")
}

fn load_fixture() -> EnumerationSnapshot {
    let path = fixture_path();
    EnumerationSnapshot::from_path(&path)
        .unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e))
}

#[test]
fn conformance_snapshot_matches_tracked_version() {
    assert_eq!(load_fixture().version, TRACKED_ENUMERATION_VERSION);
}

#[test]
fn conformance_table_in_sync_with_snapshot() {
    let snapshot = load_fixture();
    let report = verify(transaction_results(), &snapshot).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(report.checked, snapshot.codes.len());
}

/// The committed export and the hand-written enum describe the same
/// enumeration.
#[test]
fn conformance_snapshot_matches_proto() {
    assert_eq!(load_fixture(), EnumerationSnapshot::capture(&ProtoResponseCodes));
}

/// A snapshot with a renamed code is caught.
#[test]
fn conformance_renamed_upstream_code_detected() {
    let mut snapshot = load_fixture();
    snapshot
        .codes
        .insert(11, "DUPLICATE_TRANSACTION_ID".to_string());
    let err = verify(transaction_results(), &snapshot).unwrap_err();
    assert!(
        err.to_string().starts_with("Drift detected against hapi-0.12.0: 1 code(s)"),
        "got: {err}"
    );
}
