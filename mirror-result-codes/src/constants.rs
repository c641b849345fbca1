//! Tracked upstream version and well-known result codes.
//!
//! Every code here MUST match `ResponseCodeEnum` in the tracked
//! `response_code.proto`. Drift is caught by the conformance tests.

use crate::table::ResultCode;

/// Upstream protobuf version the local table was last synced against.
pub const TRACKED_ENUMERATION_VERSION: &str = "hapi-0.12.0";

/// SHA-256 of the vendored `proto/response_code.proto`. Changing the
/// file requires updating this pin (and usually the version above).
pub const PROTO_SHA256: &str = "55f4b68f18eacb98075968d84163e269e8c48379872738573f2f6700239bbb61";

/// Fully qualified name of the upstream enumeration.
pub const TRACKED_ENUMERATION: &str = "proto.ResponseCodeEnum";

/// Transaction reached consensus and was applied.
pub const SUCCESS: ResultCode = 22;

/// Precheck passed; the node accepted the transaction for submission.
pub const OK: ResultCode = 0;

/// Upstream's own "unknown" bucket. This is a real code, not a
/// lookup-miss sentinel.
pub const UNKNOWN: ResultCode = 21;
