//! Result code table — static source list and O(1) lookup.
//!
//! [`TRANSACTION_RESULTS`] is the hand-maintained source list. It is
//! turned into a [`ResultCodeTable`] exactly once, on first use of
//! [`transaction_results`], and is never written to afterwards.
//!
//! ## Invariants
//! - Codes are unique. Checked at compile time for the source list and
//!   at construction for tables built with [`ResultCodeTable::from_entries`].
//! - Names are reproduced byte-for-byte from `ResponseCodeEnum`. No case
//!   folding, no trimming.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::errors::ResultCodeError;

/// Transaction or precheck outcome. Protobuf enum values are `int32`.
pub type ResultCode = i32;

/// Canonical result name, e.g. `"SUCCESS"`.
pub type Name = &'static str;

/// Canonical result code names — 144 codes, ascending.
///
/// Every `(code, name)` pair MUST match `ResponseCodeEnum` at
/// [`TRACKED_ENUMERATION_VERSION`](crate::constants::TRACKED_ENUMERATION_VERSION).
/// Codes retired upstream stay here so historical transactions keep
/// their names.
pub const TRANSACTION_RESULTS: [(ResultCode, Name); 144] = [
    (0, "OK"),
    (1, "INVALID_TRANSACTION"),
    (2, "PAYER_ACCOUNT_NOT_FOUND"),
    (3, "INVALID_NODE_ACCOUNT"),
    (4, "TRANSACTION_EXPIRED"),
    (5, "INVALID_TRANSACTION_START"),
    (6, "INVALID_TRANSACTION_DURATION"),
    (7, "INVALID_SIGNATURE"),
    (8, "MEMO_TOO_LONG"),
    (9, "INSUFFICIENT_TX_FEE"),
    (10, "INSUFFICIENT_PAYER_BALANCE"),
    (11, "DUPLICATE_TRANSACTION"),
    (12, "BUSY"),
    (13, "NOT_SUPPORTED"),
    (14, "INVALID_FILE_ID"),
    (15, "INVALID_ACCOUNT_ID"),
    (16, "INVALID_CONTRACT_ID"),
    (17, "INVALID_TRANSACTION_ID"),
    (18, "RECEIPT_NOT_FOUND"),
    (19, "RECORD_NOT_FOUND"),
    (20, "INVALID_SOLIDITY_ID"),
    (21, "UNKNOWN"),
    (22, "SUCCESS"),
    (23, "FAIL_INVALID"),
    (24, "FAIL_FEE"),
    (25, "FAIL_BALANCE"),
    (26, "KEY_REQUIRED"),
    (27, "BAD_ENCODING"),
    (28, "INSUFFICIENT_ACCOUNT_BALANCE"),
    (29, "INVALID_SOLIDITY_ADDRESS"),
    (30, "INSUFFICIENT_GAS"),
    (31, "CONTRACT_SIZE_LIMIT_EXCEEDED"),
    (32, "LOCAL_CALL_MODIFICATION_EXCEPTION"),
    (33, "CONTRACT_REVERT_EXECUTED"),
    (34, "CONTRACT_EXECUTION_EXCEPTION"),
    (35, "INVALID_RECEIVING_NODE_ACCOUNT"),
    (36, "MISSING_QUERY_HEADER"),
    (37, "ACCOUNT_UPDATE_FAILED"),
    (38, "INVALID_KEY_ENCODING"),
    (39, "NULL_SOLIDITY_ADDRESS"),
    (40, "CONTRACT_UPDATE_FAILED"),
    (41, "INVALID_QUERY_HEADER"),
    (42, "INVALID_FEE_SUBMITTED"),
    (43, "INVALID_PAYER_SIGNATURE"),
    (44, "KEY_NOT_PROVIDED"),
    (45, "INVALID_EXPIRATION_TIME"),
    (46, "NO_WACL_KEY"),
    (47, "FILE_CONTENT_EMPTY"),
    (48, "INVALID_ACCOUNT_AMOUNTS"),
    (49, "EMPTY_TRANSACTION_BODY"),
    (50, "INVALID_TRANSACTION_BODY"),
    (51, "INVALID_SIGNATURE_TYPE_MISMATCHING_KEY"),
    (52, "INVALID_SIGNATURE_COUNT_MISMATCHING_KEY"),
    (53, "EMPTY_LIVE_HASH_BODY"),
    (54, "EMPTY_LIVE_HASH"),
    (55, "EMPTY_LIVE_HASH_KEYS"),
    (56, "INVALID_LIVE_HASH_SIZE"),
    (57, "EMPTY_QUERY_BODY"),
    (58, "EMPTY_LIVE_HASH_QUERY"),
    (59, "LIVE_HASH_NOT_FOUND"),
    (60, "ACCOUNT_ID_DOES_NOT_EXIST"),
    (61, "LIVE_HASH_ALREADY_EXISTS"),
    (62, "INVALID_FILE_WACL"),
    (63, "SERIALIZATION_FAILED"),
    (64, "TRANSACTION_OVERSIZE"),
    (65, "TRANSACTION_TOO_MANY_LAYERS"),
    (66, "CONTRACT_DELETED"),
    (67, "PLATFORM_NOT_ACTIVE"),
    (68, "KEY_PREFIX_MISMATCH"),
    (69, "PLATFORM_TRANSACTION_NOT_CREATED"),
    (70, "INVALID_RENEWAL_PERIOD"),
    (71, "INVALID_PAYER_ACCOUNT_ID"),
    (72, "ACCOUNT_DELETED"),
    (73, "FILE_DELETED"),
    (74, "ACCOUNT_REPEATED_IN_ACCOUNT_AMOUNTS"),
    (75, "SETTING_NEGATIVE_ACCOUNT_BALANCE"),
    (76, "OBTAINER_REQUIRED"),
    (77, "OBTAINER_SAME_CONTRACT_ID"),
    (78, "OBTAINER_DOES_NOT_EXIST"),
    (79, "MODIFYING_IMMUTABLE_CONTRACT"),
    (80, "FILE_SYSTEM_EXCEPTION"),
    (81, "AUTORENEW_DURATION_NOT_IN_RANGE"),
    (82, "ERROR_DECODING_BYTESTRING"),
    (83, "CONTRACT_FILE_EMPTY"),
    (84, "CONTRACT_BYTECODE_EMPTY"),
    (85, "INVALID_INITIAL_BALANCE"),
    (86, "INVALID_RECEIVE_RECORD_THRESHOLD"),
    (87, "INVALID_SEND_RECORD_THRESHOLD"),
    (88, "ACCOUNT_IS_NOT_GENESIS_ACCOUNT"),
    (89, "PAYER_ACCOUNT_UNAUTHORIZED"),
    (90, "INVALID_FREEZE_TRANSACTION_BODY"),
    (91, "FREEZE_TRANSACTION_BODY_NOT_FOUND"),
    (92, "TRANSFER_LIST_SIZE_LIMIT_EXCEEDED"),
    (93, "RESULT_SIZE_LIMIT_EXCEEDED"),
    (94, "NOT_SPECIAL_ACCOUNT"),
    (95, "CONTRACT_NEGATIVE_GAS"),
    (96, "CONTRACT_NEGATIVE_VALUE"),
    (97, "INVALID_FEE_FILE"),
    (98, "INVALID_EXCHANGE_RATE_FILE"),
    (99, "INSUFFICIENT_LOCAL_CALL_GAS"),
    (100, "ENTITY_NOT_ALLOWED_TO_DELETE"),
    (101, "AUTHORIZATION_FAILED"),
    (102, "FILE_UPLOADED_PROTO_INVALID"),
    (103, "FILE_UPLOADED_PROTO_NOT_SAVED_TO_DISK"),
    (104, "FEE_SCHEDULE_FILE_PART_UPLOADED"),
    (105, "EXCHANGE_RATE_CHANGE_LIMIT_EXCEEDED"),
    (106, "MAX_CONTRACT_STORAGE_EXCEEDED"),
    (107, "TRANSFER_ACCOUNT_SAME_AS_DELETE_ACCOUNT"),
    (108, "TOTAL_LEDGER_BALANCE_INVALID"),
    (110, "EXPIRATION_REDUCTION_NOT_ALLOWED"),
    (111, "MAX_GAS_LIMIT_EXCEEDED"),
    (112, "MAX_FILE_SIZE_EXCEEDED"),
    (113, "RECEIVER_SIG_REQUIRED"),
    (150, "INVALID_TOPIC_ID"),
    (155, "INVALID_ADMIN_KEY"),
    (156, "INVALID_SUBMIT_KEY"),
    (157, "UNAUTHORIZED"),
    (158, "INVALID_TOPIC_MESSAGE"),
    (159, "INVALID_AUTORENEW_ACCOUNT"),
    (160, "AUTORENEW_ACCOUNT_NOT_ALLOWED"),
    (162, "TOPIC_EXPIRED"),
    (163, "INVALID_CHUNK_NUMBER"),
    (164, "INVALID_CHUNK_TRANSACTION_ID"),
    (165, "ACCOUNT_FROZEN_FOR_TOKEN"),
    (166, "TOKENS_PER_ACCOUNT_LIMIT_EXCEEDED"),
    (167, "INVALID_TOKEN_ID"),
    (168, "INVALID_TOKEN_DECIMALS"),
    (169, "INVALID_TOKEN_INITIAL_SUPPLY"),
    (170, "INVALID_TREASURY_ACCOUNT_FOR_TOKEN"),
    (171, "INVALID_TOKEN_SYMBOL"),
    (172, "TOKEN_HAS_NO_FREEZE_KEY"),
    (173, "TRANSFERS_NOT_ZERO_SUM_FOR_TOKEN"),
    (174, "MISSING_TOKEN_SYMBOL"),
    (175, "TOKEN_SYMBOL_TOO_LONG"),
    (176, "ACCOUNT_KYC_NOT_GRANTED_FOR_TOKEN"),
    (177, "TOKEN_HAS_NO_KYC_KEY"),
    (178, "INSUFFICIENT_TOKEN_BALANCE"),
    (179, "TOKEN_WAS_DELETED"),
    (180, "TOKEN_HAS_NO_SUPPLY_KEY"),
    (181, "TOKEN_HAS_NO_WIPE_KEY"),
    (182, "INVALID_TOKEN_MINT_AMOUNT"),
    (183, "INVALID_TOKEN_BURN_AMOUNT"),
    (184, "TOKEN_NOT_ASSOCIATED_TO_ACCOUNT"),
    (185, "CANNOT_WIPE_TOKEN_TREASURY_ACCOUNT"),
];

const fn has_duplicate_codes(entries: &[(ResultCode, Name)]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        let mut j = i + 1;
        while j < entries.len() {
            if entries[i].0 == entries[j].0 {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

const _: () = assert!(
    !has_duplicate_codes(&TRANSACTION_RESULTS),
    "duplicate code in TRANSACTION_RESULTS"
);

static TRANSACTION_RESULTS_TABLE: Lazy<ResultCodeTable> = Lazy::new(|| {
    let table = ResultCodeTable::build(&TRANSACTION_RESULTS);
    tracing::debug!(codes = table.len(), "result code table initialized");
    table
});

/// The process-wide table built from [`TRANSACTION_RESULTS`].
///
/// Built on first call; every later call returns the same instance.
pub fn transaction_results() -> &'static ResultCodeTable {
    &TRANSACTION_RESULTS_TABLE
}

/// Read-only mapping from [`ResultCode`] to [`Name`].
#[derive(Debug, Clone)]
pub struct ResultCodeTable {
    by_code: HashMap<ResultCode, Name>,
    by_name: HashMap<Name, ResultCode>,
    /// Ascending by code.
    entries: Vec<(ResultCode, Name)>,
}

impl ResultCodeTable {
    /// Build a table from a source list, rejecting repeated codes.
    pub fn from_entries(entries: &[(ResultCode, Name)]) -> Result<Self, ResultCodeError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for &(code, _) in entries {
            if !seen.insert(code) {
                return Err(ResultCodeError::DuplicateCode(code));
            }
        }
        Ok(Self::build(entries))
    }

    // Callers guarantee unique codes.
    fn build(entries: &[(ResultCode, Name)]) -> Self {
        let mut sorted = entries.to_vec();
        sorted.sort_unstable_by_key(|&(code, _)| code);
        Self {
            by_code: sorted.iter().copied().collect(),
            by_name: sorted.iter().map(|&(code, name)| (name, code)).collect(),
            entries: sorted,
        }
    }

    /// Canonical name for `code`.
    ///
    /// Returns [`ResultCodeError::UnknownCode`] when the code is not in
    /// the table. Callers that want a sentinel should use [`get`](Self::get).
    pub fn lookup(&self, code: ResultCode) -> Result<Name, ResultCodeError> {
        self.get(code).ok_or(ResultCodeError::UnknownCode(code))
    }

    /// Canonical name for `code`, or `None`.
    pub fn get(&self, code: ResultCode) -> Option<Name> {
        self.by_code.get(&code).copied()
    }

    /// Reverse lookup. Exact, case-sensitive match.
    pub fn code_of(&self, name: &str) -> Option<ResultCode> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, code: ResultCode) -> bool {
        self.by_code.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, ascending by code.
    pub fn iter(&self) -> impl Iterator<Item = (ResultCode, Name)> + '_ {
        self.entries.iter().copied()
    }
}
