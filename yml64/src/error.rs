use std::{fmt, string::FromUtf8Error};

use thiserror::Error;

use crate::{secret::Str, validate::Field};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// Serializing an already validated in-memory document should not fail.
    #[error("failed to serialize secret manifest")]
    Serialize(#[source] serde_yaml::Error),
}

impl From<std::convert::Infallible> for Error {
    fn from(err: std::convert::Infallible) -> Self {
        match err {}
    }
}

/// The input is not well-formed YAML, or its shape cannot be a Secret manifest.
#[derive(Debug, Error)]
#[error("failed to parse secret manifest: {0}")]
pub struct ParseError(#[from] pub(crate) serde_yaml::Error);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid kube secret: missing keys: [")?;
        for (i, field) in self.missing.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        write!(f, "]")
    }
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("data key `{key}` is not valid base64")]
    InvalidBase64 {
        key: Str,
        #[source]
        source: base64::DecodeError,
    },
    #[error("data key `{key}` does not decode to valid UTF-8")]
    InvalidUtf8 {
        key: Str,
        #[source]
        source: FromUtf8Error,
    },
}

impl CodecError {
    pub fn key(&self) -> &Str {
        match self {
            CodecError::InvalidBase64 { key, .. } | CodecError::InvalidUtf8 { key, .. } => key,
        }
    }
}
