use serde::de::DeserializeOwned;
use serde_json::Value;

/// Pull the first embedded JSON object out of a model reply.
///
/// Models are asked to return only JSON but routinely wrap it in commentary
/// or code fences. This takes the span from the first `{` to the last `}`
/// and tries to parse it; anything that fails to parse yields `None` rather
/// than an error. The span is not brace-balanced, so a reply whose prose
/// contains stray braces fails closed instead of producing a partial parse.
pub fn extract_json(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    match serde_json::from_str(&text[start..=end]) {
        Ok(value @ Value::Object(_)) => Some(value),
        _ => None,
    }
}

/// Typed extraction: locate the JSON object, then deserialize it.
pub fn extract<T: DeserializeOwned>(text: &str) -> Option<T> {
    extract_json(text).and_then(|value| serde_json::from_value(value).ok())
}
