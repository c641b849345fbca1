//! Operation status — which result names count as a successful operation.
//!
//! Only `SUCCESS` is successful. Every other code, including `OK`
//! (precheck passed, not yet applied), reports a failed operation.

use crate::constants::SUCCESS;
use crate::table::{Name, ResultCode, ResultCodeTable};

/// A result name and whether operations carrying it succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationStatus {
    /// Result name, e.g. `"SUCCESS"`.
    pub status: Name,
    /// `true` only for `SUCCESS`.
    pub successful: bool,
}

pub fn is_success(code: ResultCode) -> bool {
    code == SUCCESS
}

/// One status per table entry, ascending by code.
pub fn operation_statuses(table: &ResultCodeTable) -> Vec<OperationStatus> {
    table
        .iter()
        .map(|(code, status)| OperationStatus {
            status,
            successful: is_success(code),
        })
        .collect()
}
