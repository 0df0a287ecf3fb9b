//! Unwrapping of D-Bus variants into plain JSON values.

use serde_json::{Map, Value as Json};
use zvariant::Value;

/// Strips the variant envelope from `value`, recursively.
///
/// Numbers, booleans and strings map onto their JSON counterparts. Object
/// paths and signatures become strings, arrays and structures become JSON
/// arrays and dicts become JSON objects. File descriptors have no JSON form
/// and are rendered as `null`.
pub(crate) fn to_json(value: &Value<'_>) -> Json {
    match value {
        Value::U8(v) => Json::from(*v),
        Value::Bool(v) => Json::from(*v),
        Value::I16(v) => Json::from(*v),
        Value::U16(v) => Json::from(*v),
        Value::I32(v) => Json::from(*v),
        Value::U32(v) => Json::from(*v),
        Value::I64(v) => Json::from(*v),
        Value::U64(v) => Json::from(*v),
        Value::F64(v) => Json::from(*v),
        Value::Str(s) => Json::from(s.as_str()),
        Value::Signature(s) => Json::from(s.to_string()),
        Value::ObjectPath(p) => Json::from(p.as_str()),
        Value::Value(inner) => to_json(inner),
        Value::Array(array) => Json::Array(array.iter().map(to_json).collect()),
        Value::Structure(structure) => {
            Json::Array(structure.fields().iter().map(to_json).collect())
        }
        Value::Dict(dict) => {
            let mut map = Map::new();
            for (key, val) in dict.iter() {
                map.insert(key_to_string(key), to_json(val));
            }
            Json::Object(map)
        }
        #[allow(unreachable_patterns)]
        _ => Json::Null,
    }
}

/// JSON object keys must be text; non-string dict keys use their JSON form.
fn key_to_string(key: &Value<'_>) -> String {
    match to_json(key) {
        Json::String(s) => s,
        other => other.to_string(),
    }
}
