//! Block options.
//!
//! Options travel through the tree as loose JSON objects so that parents can
//! push values down into children. Each block type resolves them into a typed
//! record (defaults filled in, unknown keys and wrong types rejected) when the
//! block is created.

use serde::de::{DeserializeOwned, Error as _};
use serde::Serialize;
use serde_json::Value;

use crate::errors::BlockError;

/// Named option values attached to a block.
pub type OptionMap = serde_json::Map<String, Value>;

/// Resolve raw options into a typed record.
pub fn resolve<T: DeserializeOwned>(block: &str, options: &OptionMap) -> Result<T, BlockError> {
    serde_json::from_value(Value::Object(options.clone())).map_err(|source| {
        BlockError::InvalidOptions {
            block: block.to_string(),
            source,
        }
    })
}

/// Resolve raw options and write them back as a complete map.
///
/// Every option the record knows about is present in the result, with
/// `null` standing for "not defined".
pub fn resolve_map<T>(block: &str, options: &OptionMap) -> Result<OptionMap, BlockError>
where
    T: DeserializeOwned + Serialize,
{
    let typed: T = resolve(block, options)?;
    to_option_map(block, &typed)
}

/// Serialize a typed record into an option map.
pub fn to_option_map<T: Serialize>(block: &str, record: &T) -> Result<OptionMap, BlockError> {
    let invalid = |source| BlockError::InvalidOptions {
        block: block.to_string(),
        source,
    };
    match serde_json::to_value(record).map_err(invalid)? {
        Value::Object(map) => Ok(map),
        other => Err(invalid(serde_json::Error::custom(format!(
            "expected an options object, found {other}"
        )))),
    }
}

/// Build an `InvalidOptions` error from a message.
pub fn invalid_option(block: &str, message: impl std::fmt::Display) -> BlockError {
    BlockError::InvalidOptions {
        block: block.to_string(),
        source: serde_json::Error::custom(message),
    }
}

/// Whether an option is present with a non-null value.
pub fn is_defined(options: &OptionMap, key: &str) -> bool {
    options.get(key).is_some_and(|v| !v.is_null())
}

/// Empty values: `null`, `""`, `[]` and `{}`.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Scalars are booleans, numbers and strings.
pub fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Number(_) | Value::String(_))
}
