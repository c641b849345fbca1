//! Upstream `ResponseCodeEnum`, generated at build time.
//!
//! Source: the vendored `proto/response_code.proto`, compiled with
//! prost-build. Its checksum is pinned in
//! [`PROTO_SHA256`](crate::constants::PROTO_SHA256); replace the file
//! with a newer upstream release to re-run the drift check against it.
//! Never edit it to make the local table pass.

include!(concat!(env!("OUT_DIR"), "/proto.rs"));
include!(concat!(env!("OUT_DIR"), "/response_codes.rs"));
