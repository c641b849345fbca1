//! Conformance: local table in sync with `ResponseCodeEnum`.
//!
//! This is the check that keeps `TRANSACTION_RESULTS` honest. When it
//! fails, update the table entry named in the failure message.

use mirror_result_codes::constants::TRACKED_ENUMERATION_VERSION;
use mirror_result_codes::proto::{ResponseCodeEnum, RESPONSE_CODES};
use mirror_result_codes::table::TRANSACTION_RESULTS;
use mirror_result_codes::{transaction_results, verify, ExternalEnumeration, ProtoResponseCodes};

/// Every upstream code maps to the same name locally.
#[test]
fn conformance_response_code_up_to_date() {
    let table = transaction_results();
    for (code, name) in ProtoResponseCodes.pairs() {
        assert_eq!(
            table.lookup(code),
            Ok(name),
            "TRANSACTION_RESULTS drift from ResponseCodeEnum at code {code}"
        );
    }
}

/// The verifier agrees with the per-code assertions above.
#[test]
fn conformance_verifier_passes_on_tracked_version() {
    let report = verify(transaction_results(), &ProtoResponseCodes)
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(report.version, TRACKED_ENUMERATION_VERSION);
    assert_eq!(report.checked, RESPONSE_CODES.len());
}

/// At the tracked version the table is exactly the upstream set.
#[test]
fn conformance_no_local_only_codes_at_tracked_version() {
    let report = verify(transaction_results(), &ProtoResponseCodes).unwrap();
    assert!(
        report.local_only.is_empty(),
        "local-only codes: {:?}",
        report.local_only
    );
    assert_eq!(transaction_results().len(), RESPONSE_CODES.len());
}

/// Reverse lookup agrees with the upstream name parser.
#[test]
fn conformance_reverse_lookup_matches_upstream() {
    let table = transaction_results();
    for (code, name) in TRANSACTION_RESULTS {
        assert_eq!(table.code_of(name), Some(code));
        assert_eq!(
            ResponseCodeEnum::from_str_name(name).map(i32::from),
            Some(code),
            "{name} unknown upstream"
        );
    }
}

/// All local codes must be unique.
#[test]
fn conformance_table_codes_unique() {
    let mut seen = std::collections::HashSet::new();
    for (code, _) in &TRANSACTION_RESULTS {
        assert!(seen.insert(code), "duplicate result code: {code}");
    }
}

/// Lookups are stable for the process lifetime, across threads.
#[test]
fn conformance_lookup_stable_across_threads() {
    let expected: Vec<_> = TRANSACTION_RESULTS
        .iter()
        .map(|(code, _)| transaction_results().lookup(*code))
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                TRANSACTION_RESULTS
                    .iter()
                    .map(|(code, _)| transaction_results().lookup(*code))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
