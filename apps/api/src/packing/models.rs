use serde::{Deserialize, Deserializer};

/// Body of a solve request. Missing or `null` fields fall back to zero/empty so
/// they are reported by validation instead of failing to decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolveRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub packs: Vec<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,
}

impl SolveRequest {
    /// Decodes a raw body regardless of its declared content type.
    /// A bare `null` body decodes to an empty request.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<Option<Self>>(body).map(Option::unwrap_or_default)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A request that passed boundary validation, converted to solver units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveInput {
    pub catalog: Vec<usize>,
    pub order: usize,
}
