//! External enumeration — the authoritative side of the drift check.
//!
//! The verifier only needs "iterate all (code, name) pairs", so it is
//! written against [`ExternalEnumeration`] and not against any one
//! schema mechanism. Implementations guarantee no duplicate codes; the
//! verifier does not re-validate that.

use std::collections::BTreeMap;

use crate::constants::TRACKED_ENUMERATION_VERSION;
use crate::proto::RESPONSE_CODES;
use crate::table::ResultCode;

/// Read-only, versioned source of `(code, name)` pairs.
pub trait ExternalEnumeration {
    /// Version label of the upstream definition, used in drift reports.
    fn version(&self) -> &str;

    /// Every `(code, name)` pair the upstream definition publishes.
    fn pairs(&self) -> Vec<(ResultCode, &str)>;
}

/// The build-time generated `ResponseCodeEnum` as an external enumeration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoResponseCodes;

impl ExternalEnumeration for ProtoResponseCodes {
    fn version(&self) -> &str {
        TRACKED_ENUMERATION_VERSION
    }

    fn pairs(&self) -> Vec<(ResultCode, &str)> {
        RESPONSE_CODES.to_vec()
    }
}

/// Ad-hoc enumerations, mostly for fixtures. Reported as `"unversioned"`.
impl ExternalEnumeration for BTreeMap<ResultCode, String> {
    fn version(&self) -> &str {
        "unversioned"
    }

    fn pairs(&self) -> Vec<(ResultCode, &str)> {
        self.iter()
            .map(|(code, name)| (*code, name.as_str()))
            .collect()
    }
}
