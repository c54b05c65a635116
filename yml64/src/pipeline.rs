use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    secret::SecretDocument,
    transform::{CodecTransformer, Direction, MetadataFilter, Transformer, Whitelist},
    validate::Validator,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    #[serde(default)]
    pub direction: Direction,
    /// Keep every metadata key instead of only the whitelisted ones.
    #[serde(default)]
    pub keep_all_metadata: bool,
}

/// parse -> validate -> filter metadata -> encode/decode data -> serialize
///
/// Each step short-circuits, so a failure never produces partial output.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    validator: Validator,
    filter: MetadataFilter,
}

impl Pipeline {
    pub fn new(validator: Validator, whitelist: Whitelist) -> Self {
        Self {
            validator,
            filter: MetadataFilter::new(whitelist),
        }
    }

    #[tracing::instrument(skip_all, fields(direction = ?options.direction, keep_all_metadata = options.keep_all_metadata))]
    pub fn process(&self, input: &[u8], options: Options) -> Result<Vec<u8>> {
        let mut doc = SecretDocument::from_slice(input)?;
        self.run(&mut doc, options)?;
        Ok(doc.to_yaml()?.into_bytes())
    }

    /// Validates and transforms an already parsed document in place.
    pub fn run(&self, doc: &mut SecretDocument, options: Options) -> Result<()> {
        self.validator.validate(doc)?;

        if options.keep_all_metadata {
            tracing::debug!("keeping all metadata");
        } else {
            self.filter.transform(doc)?;
        }

        CodecTransformer(options.direction).transform(doc)?;
        Ok(())
    }
}
