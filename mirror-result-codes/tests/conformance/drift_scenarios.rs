//! Conformance: verifier behaviour on small hand-built tables.

use std::collections::BTreeMap;

use mirror_result_codes::{
    check_drift, verify, Drift, ResultCode, ResultCodeError, ResultCodeTable,
};

fn upstream(pairs: &[(ResultCode, &str)]) -> BTreeMap<ResultCode, String> {
    pairs
        .iter()
        .map(|&(code, name)| (code, name.to_string()))
        .collect()
}

/// Local table may carry extra (retired) codes.
#[test]
fn conformance_extra_local_codes_pass() {
    let table = ResultCodeTable::from_entries(&[
        (0, "OK"),
        (1, "INVALID_TRANSACTION"),
        (2, "PAYER_ACCOUNT_NOT_FOUND"),
        (50, "DEPRECATED_CODE"),
    ])
    .unwrap();
    let external = upstream(&[
        (0, "OK"),
        (1, "INVALID_TRANSACTION"),
        (2, "PAYER_ACCOUNT_NOT_FOUND"),
    ]);

    let report = verify(&table, &external).unwrap();
    assert_eq!(report.checked, 3);
    assert_eq!(report.local_only, vec![50]);
}

/// A legacy code with no upstream entry never fails the check.
#[test]
fn conformance_legacy_code_tolerated() {
    let table = ResultCodeTable::from_entries(&[(0, "OK"), (999, "LEGACY_CODE")]).unwrap();
    assert!(verify(&table, &upstream(&[(0, "OK")])).is_ok());
}

/// Renamed local entry fails with code, expected and actual.
#[test]
fn conformance_mismatched_name_fails() {
    let table = ResultCodeTable::from_entries(&[(0, "OK"), (1, "INVALID_TX")]).unwrap();
    let external = upstream(&[(0, "OK"), (1, "INVALID_TRANSACTION")]);

    match verify(&table, &external) {
        Err(ResultCodeError::DriftDetected { drifts, .. }) => {
            assert_eq!(
                drifts,
                vec![Drift::Mismatch {
                    code: 1,
                    expected: "INVALID_TRANSACTION".into(),
                    actual: "INVALID_TX".into(),
                }]
            );
        }
        other => panic!("expected DriftDetected, got: {other:?}"),
    }
}

/// Upstream code absent locally fails as missing.
#[test]
fn conformance_missing_code_fails() {
    let table = ResultCodeTable::from_entries(&[(0, "OK")]).unwrap();
    let external = upstream(&[(0, "OK"), (7, "DUPLICATE_TRANSACTION")]);

    let err = verify(&table, &external).unwrap_err();
    match &err {
        ResultCodeError::DriftDetected { drifts, .. } => {
            assert_eq!(drifts.len(), 1);
            assert_eq!(drifts[0].code(), 7);
            assert_eq!(drifts[0].expected(), "DUPLICATE_TRANSACTION");
            assert_eq!(drifts[0].actual(), None);
        }
        other => panic!("expected DriftDetected, got: {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Drift detected against unversioned: 1 code(s) out of sync"
    );
}

/// All drifts are reported, not just the first.
#[test]
fn conformance_all_drifts_reported() {
    let table = ResultCodeTable::from_entries(&[(0, "OK"), (1, "INVALID_TX")]).unwrap();
    let external = upstream(&[
        (0, "OK"),
        (1, "INVALID_TRANSACTION"),
        (7, "DUPLICATE_TRANSACTION"),
    ]);

    let report = check_drift(&table, &external);
    assert!(!report.is_clean());
    let rendered: Vec<String> = report.drifts.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            r#"code 1: expected "INVALID_TRANSACTION", found "INVALID_TX""#.to_string(),
            r#"code 7: expected "DUPLICATE_TRANSACTION", missing from local table"#.to_string(),
        ]
    );
}

/// Lookup of an absent code is an explicit error.
#[test]
fn conformance_unknown_code_is_error() {
    let table = ResultCodeTable::from_entries(&[(0, "OK")]).unwrap();
    assert_eq!(table.lookup(1), Err(ResultCodeError::UnknownCode(1)));
}
