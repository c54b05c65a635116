use std::convert::Infallible;

use crate::secret::{Metadata, SecretDocument, Str};

use super::Transformer;

/// Metadata keys that survive filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whitelist {
    keys: Box<[Str]>,
}

impl Whitelist {
    pub fn new(keys: impl IntoIterator<Item = impl Into<Str>>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }
}

impl Default for Whitelist {
    fn default() -> Self {
        Self::new(["name", "namespace"])
    }
}

/// Drops every metadata key that is not whitelisted.
#[derive(Debug, Clone, Default)]
pub struct MetadataFilter {
    whitelist: Whitelist,
}

impl MetadataFilter {
    pub fn new(whitelist: Whitelist) -> Self {
        Self { whitelist }
    }

    pub fn filter(&self, metadata: &mut Metadata) {
        metadata.retain(|key, _| {
            let keep = self.whitelist.contains(key);
            if !keep {
                tracing::debug!(%key, "removing metadata key");
            }
            keep
        });
    }
}

impl Transformer for MetadataFilter {
    type Error = Infallible;

    #[tracing::instrument(skip_all)]
    fn transform(&self, doc: &mut SecretDocument) -> Result<(), Self::Error> {
        if let Some(metadata) = doc.metadata.as_mut() {
            self.filter(metadata);
        }
        Ok(())
    }
}
