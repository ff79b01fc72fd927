//! Serde adapters shared by the model types.

/// Serialize a value as a JSON-encoded string field.
///
/// The Saved Objects API expects `panelsJSON`, `optionsJSON`, and
/// `controlGroupInput.panelsJSON` as JSON strings nested inside the outer
/// document rather than as native objects. This adapter keeps the in-memory
/// representation typed while emitting the double-encoded wire form.
pub mod json_string {
    use serde::de::{DeserializeOwned, Error as DeError};
    use serde::ser::Error as SerError;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        let encoded = serde_json::to_string(value).map_err(S::Error::custom)?;
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        serde_json::from_str(&encoded).map_err(D::Error::custom)
    }
}
