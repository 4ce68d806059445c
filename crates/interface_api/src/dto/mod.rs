//! Request/response data transfer objects
//!
//! Two distinct wire shapes coexist on purpose: the public endpoints speak
//! English field names (`name`/`location`/`date`) and the internal
//! endpoints Portuguese ones (`nome`/`local_encontrado`/`data_encontrado`),
//! because that is what the two existing front-ends already send and
//! neither should break.

pub mod claims;
pub mod items;

use serde::{Deserialize, Deserializer};

/// Coerces an arbitrary JSON value into a bool: only a literal JSON `true`
/// counts, anything else becomes `false`.
///
/// The approval flag has always behaved this way for sloppy clients that
/// send `"true"`, `1`, or `null`.
pub(crate) fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(matches!(value, serde_json::Value::Bool(true)))
}

/// Like [`loose_bool`] but keeps track of whether the field was present at
/// all, for partial updates.
pub(crate) fn loose_bool_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(Some(matches!(value, serde_json::Value::Bool(true))))
}
