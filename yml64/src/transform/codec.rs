use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::{
    error::CodecError,
    secret::{Data, SecretDocument, Str},
};

use super::Transformer;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Encode,
    Decode,
}

/// Rewrites every `data` value to or from standard, padded base64.
#[derive(Debug, Copy, Clone)]
pub struct CodecTransformer(pub Direction);

impl CodecTransformer {
    pub fn apply(&self, data: &mut Data) -> Result<(), CodecError> {
        match self.0 {
            Direction::Encode => {
                for (key, value) in data.iter_mut() {
                    tracing::trace!(%key, "encoding");
                    *value = encode(value);
                }
            }
            Direction::Decode => {
                // Nothing is written back until every value has decoded.
                let decoded = data
                    .iter()
                    .map(|(key, value)| {
                        tracing::trace!(%key, "decoding");
                        decode(value).map_err(|err| err.at(key))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                for (value, plain) in data.values_mut().zip(decoded) {
                    *value = plain;
                }
            }
        }

        Ok(())
    }
}

impl Transformer for CodecTransformer {
    type Error = CodecError;

    #[tracing::instrument(skip_all, fields(direction = ?self.0))]
    fn transform(&self, doc: &mut SecretDocument) -> Result<(), Self::Error> {
        match doc.data.as_mut() {
            Some(data) => self.apply(data),
            None => Ok(()),
        }
    }
}

fn encode(value: &str) -> String {
    STANDARD.encode(value.as_bytes())
}

enum DecodeFailure {
    Base64(base64::DecodeError),
    Utf8(std::string::FromUtf8Error),
}

impl DecodeFailure {
    fn at(self, key: &Str) -> CodecError {
        let key = key.clone();
        match self {
            DecodeFailure::Base64(source) => CodecError::InvalidBase64 { key, source },
            DecodeFailure::Utf8(source) => CodecError::InvalidUtf8 { key, source },
        }
    }
}

// Line breaks inside an encoded value are ignored, as wrapped base64 is still base64.
fn decode(value: &str) -> Result<String, DecodeFailure> {
    let decoded = if value.contains(['\n', '\r']) {
        STANDARD.decode(value.replace(['\n', '\r'], ""))
    } else {
        STANDARD.decode(value)
    };
    let bytes = decoded.map_err(DecodeFailure::Base64)?;

    String::from_utf8(bytes).map_err(DecodeFailure::Utf8)
}
