use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, ParseError};

pub fn from_str<T>(s: &str) -> Result<T, ParseError>
where
    T: DeserializeOwned,
{
    serde_yaml::from_str(s).map_err(Into::into)
}

pub fn from_slice<T>(s: &[u8]) -> Result<T, ParseError>
where
    T: DeserializeOwned,
{
    serde_yaml::from_slice(s).map_err(Into::into)
}

pub fn to_string<T>(value: &T) -> Result<String, Error>
where
    T: Serialize,
{
    serde_yaml::to_string(value).map_err(Error::Serialize)
}
