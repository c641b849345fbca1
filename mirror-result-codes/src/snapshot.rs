//! JSON snapshot of an upstream enumeration.
//!
//! Lets CI check the local table against a newer `ResponseCodeEnum`
//! export before the vendored proto behind [`proto`](crate::proto) is
//! replaced. Format:
//!
//! ```json
//! { "version": "hapi-0.12.0", "codes": { "0": "OK", "22": "SUCCESS" } }
//! ```
//!
//! Keys are decimal codes. A repeated key is rejected at parse time;
//! keeping either value would hide the other from the drift check.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::enumeration::ExternalEnumeration;
use crate::errors::ResultCodeError;
use crate::table::ResultCode;

/// Upstream enumeration captured at one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationSnapshot {
    /// Upstream version label, reported in drift errors.
    pub version: String,
    /// Upstream `(code, name)` pairs.
    #[serde(deserialize_with = "unique_codes")]
    pub codes: BTreeMap<ResultCode, String>,
}

fn unique_codes<'de, D>(deserializer: D) -> Result<BTreeMap<ResultCode, String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueCodes;

    impl<'de> Visitor<'de> for UniqueCodes {
        type Value = BTreeMap<ResultCode, String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of result code to name with no repeated codes")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut codes = BTreeMap::new();
            while let Some((code, name)) = access.next_entry::<ResultCode, String>()? {
                if codes.insert(code, name).is_some() {
                    return Err(de::Error::custom(format!("repeated result code {code}")));
                }
            }
            Ok(codes)
        }
    }

    deserializer.deserialize_map(UniqueCodes)
}

impl EnumerationSnapshot {
    pub fn from_json(json: &str) -> Result<Self, ResultCodeError> {
        serde_json::from_str(json).map_err(|e| ResultCodeError::Snapshot(e.to_string()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ResultCodeError> {
        serde_json::from_reader(reader).map_err(|e| ResultCodeError::Snapshot(e.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Self, ResultCodeError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| ResultCodeError::Snapshot(format!("{}: {e}", path.display())))?;
        Self::from_json(&data)
    }

    /// Capture any enumeration, e.g. to export the built-in protobuf one.
    pub fn capture<E: ExternalEnumeration + ?Sized>(external: &E) -> Self {
        Self {
            version: external.version().to_owned(),
            codes: external
                .pairs()
                .into_iter()
                .map(|(code, name)| (code, name.to_owned()))
                .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ResultCodeError> {
        serde_json::to_string_pretty(self).map_err(|e| ResultCodeError::Snapshot(e.to_string()))
    }
}

impl ExternalEnumeration for EnumerationSnapshot {
    fn version(&self) -> &str {
        &self.version
    }

    fn pairs(&self) -> Vec<(ResultCode, &str)> {
        self.codes.pairs()
    }
}
