mod codec;
mod metadata;

pub use self::codec::{CodecTransformer, Direction};
pub use self::metadata::{MetadataFilter, Whitelist};

use crate::secret::SecretDocument;

/// An in-place rewrite of one part of a secret.
pub trait Transformer {
    type Error;

    fn transform(&self, doc: &mut SecretDocument) -> Result<(), Self::Error>;
}
