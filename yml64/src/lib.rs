//! Base64-encode or decode the `data` of a Kubernetes Secret manifest, optionally trimming
//! its metadata down to `name` and `namespace`.

pub mod error;
pub mod io;
pub mod pipeline;
pub mod secret;
mod serde_ex;
pub mod transform;
pub mod validate;
pub mod yaml;

pub use self::error::{CodecError, Error, ParseError, Result, ValidationError};
pub use self::pipeline::{Options, Pipeline};
pub use self::secret::{Data, Metadata, SecretDocument, Str};
pub use self::transform::{CodecTransformer, Direction, MetadataFilter, Transformer, Whitelist};
pub use self::validate::{Field, RuleSet, Validator};

/// Runs the default pipeline over one manifest in the given direction.
pub fn process(input: &[u8], direction: Direction, keep_all_metadata: bool) -> Result<Vec<u8>> {
    Pipeline::default().process(
        input,
        Options {
            direction,
            keep_all_metadata,
        },
    )
}

/// Runs the default pipeline over one manifest, base64-encoding its data.
pub fn encode(input: &[u8], keep_all_metadata: bool) -> Result<Vec<u8>> {
    process(input, Direction::Encode, keep_all_metadata)
}

/// Runs the default pipeline over one manifest, base64-decoding its data.
pub fn decode(input: &[u8], keep_all_metadata: bool) -> Result<Vec<u8>> {
    process(input, Direction::Decode, keep_all_metadata)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "apiVersion: v1
data:
  USER: admin
kind: Secret
metadata:
  name: x
  namespace: y
  uid: z
type: Opaque
";

    #[test]
    fn test_encode_decode_scenario() -> anyhow::Result<()> {
        let encoded = encode(INPUT.as_bytes(), false)?;
        let doc = SecretDocument::from_slice(&encoded)?;
        assert_eq!(doc.data.as_ref().unwrap()["USER"], "YWRtaW4=");

        let decoded = decode(&encoded, false)?;
        let doc = SecretDocument::from_slice(&decoded)?;
        assert_eq!(doc.data.as_ref().unwrap()["USER"], "admin");
        Ok(())
    }

    #[test]
    fn test_keep_all_metadata_scenario() -> anyhow::Result<()> {
        let output = encode(INPUT.as_bytes(), true)?;
        let metadata = SecretDocument::from_slice(&output)?.metadata.unwrap();
        assert_eq!(metadata.keys().collect::<Vec<_>>(), ["name", "namespace", "uid"]);
        Ok(())
    }

    #[test]
    fn test_decode_invalid_value_scenario() {
        let input = INPUT.replace("admin", "not-base64-!!");
        match decode(input.as_bytes(), false) {
            Err(Error::Codec(err)) => assert_eq!(err.key(), "USER"),
            other => panic!("expected codec error, got {other:?}"),
        }
    }
}
