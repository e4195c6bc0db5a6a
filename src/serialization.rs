//! Serialization of fitted model parameters.
//!
//! Fitted components expose plain parameter structs (categories, coefficients)
//! rather than their runtime lookup tables. Those structs are written with
//! `bincode` for the model artifact and with `serde_json` for interchange with
//! other tools.

use std::error::Error;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A trait for parameter representations that can be serialized to and from bytes.
///
/// Implementors should contain only plain data (e.g., `Vec<f64>`, `Vec<String>`),
/// not derived lookup structures.
pub trait SerializableParams: Sized {
    /// The error type returned during (de)serialization.
    type Error: Error + Send + Sync + 'static;

    /// Serialize the parameters into a byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error>;

    /// Deserialize the parameters from a byte buffer.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error>;
}

impl<T> SerializableParams for T
where
    T: Serialize + DeserializeOwned,
{
    type Error = bincode::Error;

    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error> {
        bincode::serialize(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        bincode::deserialize(bytes)
    }
}

/// Human-readable JSON form of the same parameter structs.
pub trait JsonParams: Sized {
    /// Render as pretty-printed JSON.
    fn to_json(&self) -> Result<String, serde_json::Error>;

    /// Parse from JSON text.
    fn from_json(text: &str) -> Result<Self, serde_json::Error>;
}

impl<T> JsonParams for T
where
    T: Serialize + DeserializeOwned,
{
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
