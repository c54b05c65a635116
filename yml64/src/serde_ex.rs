/// `data` values are strings, but YAML happily writes `PORT: 5432` or `DEBUG: true`.
/// Scalars are read back exactly as written (`1.10` stays `1.10`, `0x1F` stays `0x1F`) and a
/// null value (`KEY:` or `KEY: ~`) reads as an empty string. Sequences and mappings are rejected.
pub mod scalar_map {
    use std::fmt;

    use indexmap::IndexMap;
    use serde::{Deserialize, Deserializer, de};

    use crate::secret::Str;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<IndexMap<Str, String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<IndexMap<Str, Option<ScalarText>>>::deserialize(deserializer)?;
        Ok(raw.map(|map| {
            map.into_iter()
                .map(|(key, value)| (key, value.map(|v| v.0).unwrap_or_default()))
                .collect()
        }))
    }

    /// The source text of a scalar, without resolving it to a number or bool.
    struct ScalarText(String);

    impl<'de> Deserialize<'de> for ScalarText {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_str(ScalarTextVisitor)
        }
    }

    struct ScalarTextVisitor;

    impl de::Visitor<'_> for ScalarTextVisitor {
        type Value = ScalarText;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a scalar value")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(ScalarText(v.to_owned()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(ScalarText(v))
        }
    }

}
