use compact_str::CompactString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ParseError, Result},
    yaml,
};

pub type Str = CompactString;

/// Arbitrary metadata; unknown keys (labels, annotations, timestamps, ...) keep their YAML type.
pub type Metadata = IndexMap<Str, serde_yaml::Value>;

/// Secret payload, plaintext or base64 depending on which way the manifest is going.
pub type Data = IndexMap<Str, String>;

/// A parsed Kubernetes Secret manifest.
///
/// Every field is optional at this level so that a manifest missing several of them still
/// parses and can be reported on as a whole by the [`Validator`](crate::Validator).
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretDocument {
    #[serde(default, skip_serializing_if = "Str::is_empty")]
    pub api_version: Str,
    #[serde(
        default,
        deserialize_with = "crate::serde_ex::scalar_map::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Data>,
    #[serde(default, skip_serializing_if = "Str::is_empty")]
    pub kind: Str,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, rename = "type", skip_serializing_if = "Str::is_empty")]
    pub ty: Str,
}

impl SecretDocument {
    pub fn from_slice(input: &[u8]) -> Result<Self, ParseError> {
        yaml::from_slice(input)
    }

    pub fn to_yaml(&self) -> Result<String> {
        yaml::to_string(self)
    }
}
