use std::fmt;

use crate::{error::ValidationError, secret::SecretDocument};

/// A top-level field of a Secret manifest, named as it appears in YAML.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    ApiVersion,
    Data,
    Kind,
    Metadata,
    Type,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::ApiVersion,
        Field::Data,
        Field::Kind,
        Field::Metadata,
        Field::Type,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::ApiVersion => "apiVersion",
            Field::Data => "data",
            Field::Kind => "kind",
            Field::Metadata => "metadata",
            Field::Type => "type",
        }
    }

    /// Strings must be non-empty. Mappings must be present, but may be empty.
    fn is_present(self, doc: &SecretDocument) -> bool {
        match self {
            Field::ApiVersion => !doc.api_version.is_empty(),
            Field::Data => doc.data.is_some(),
            Field::Kind => !doc.kind.is_empty(),
            Field::Metadata => doc.metadata.is_some(),
            Field::Type => !doc.ty.is_empty(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of fields a document must carry to be accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    required: Vec<Field>,
}

impl RuleSet {
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        let mut required = Vec::new();
        for field in fields {
            if !required.contains(&field) {
                required.push(field);
            }
        }
        Self { required }
    }

    pub fn required(&self) -> &[Field] {
        &self.required
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(Field::ALL)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: RuleSet,
}

impl Validator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Checks every required field and reports all of the missing ones at once.
    #[tracing::instrument(skip_all)]
    pub fn validate(&self, doc: &SecretDocument) -> Result<(), ValidationError> {
        let missing = self
            .rules
            .required
            .iter()
            .copied()
            .filter(|field| !field.is_present(doc))
            .collect::<Vec<_>>();

        if missing.is_empty() {
            return Ok(());
        }

        tracing::debug!(?missing, "secret failed validation");
        Err(ValidationError { missing })
    }
}
