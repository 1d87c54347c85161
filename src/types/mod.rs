// src/types/mod.rs
//! Records exchanged with the recruiting backend.

pub mod candidate;
pub mod response;
pub mod screening;

pub use candidate::{Candidate, CandidateSummary, Education, ProfileLink};
pub use response::{ScreeningEvaluation, SearchRequest, SearchResponse, ScreeningStarted};
pub use screening::{AnswerSet, Screening};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Identifiers arrive as JSON strings or integers depending on the backend table.
pub(crate) fn flexible_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Drops blank optional strings so templates only see usable values.
pub(crate) fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
