//! HAL-style collection envelope: `{"_embedded": {"<collection>": [...]}}`.

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Value};

use crate::error::Result;

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "_embedded", default)]
    embedded: Option<Map<String, Value>>,
}

/// Unwraps `_embedded.<collection>` into an ordered list.
///
/// HAL omits `_embedded` entirely for an empty collection, so a missing
/// envelope or a missing key yields an empty list. A body that is not a JSON
/// object, or entries that do not match `T`, are serialization errors.
pub fn unwrap_collection<T>(body: &str, collection: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let envelope: Envelope = serde_json::from_str(body)?;
    match envelope.embedded.and_then(|mut map| map.remove(collection)) {
        Some(items) => Ok(serde_json::from_value(items)?),
        None => Ok(Vec::new()),
    }
}
