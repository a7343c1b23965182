//! Turning a `POST /api/modules` body into store entries.

use serde_json::Value;

use crate::errors::ServiceError;
use crate::modules::domain::{decode_modules, ModuleMap};

/// Parse a request body as a `{slug: module}` object.
///
/// Any number of top-level keys is accepted; they are all merged in one write.
pub fn decode_payload(body: &[u8]) -> Result<ModuleMap, ServiceError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| ServiceError::Parse(e.to_string()))?;
    match value {
        Value::Object(object) => Ok(object.into_iter().collect()),
        other => Err(ServiceError::Parse(format!(
            "expected a JSON object keyed by slug, got {}",
            json_kind(&other)
        ))),
    }
}

/// Server-side checks for strict intake: every entry must be a valid module
/// stored under its own slug.
pub fn validate_entries(entries: &ModuleMap) -> Result<(), ServiceError> {
    if entries.is_empty() {
        return Err(ServiceError::Validation("payload contains no modules".into()));
    }
    for (key, module) in decode_modules(entries)? {
        if let Err(ServiceError::Validation(msg)) = module.validate() {
            return Err(ServiceError::Validation(format!("{key}: {msg}")));
        }
        if module.slug != key {
            return Err(ServiceError::Validation(format!(
                "{key}: key does not match module slug {:?}",
                module.slug
            )));
        }
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
