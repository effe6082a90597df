use analysis_model::{JsonSignal, JsonStructureInfo};
use serde_json::Value;

/// Strict parse of the trimmed text. `None` is the normal negative signal
/// for non-JSON input, never an error.
pub fn detect_json(text: &str) -> Option<JsonSignal> {
    let value: Value = serde_json::from_str(text.trim()).ok()?;
    Some(JsonSignal::found(summarize(&value)))
}

fn summarize(value: &Value) -> JsonStructureInfo {
    match value {
        Value::Object(map) => JsonStructureInfo::Object {
            keys: map.keys().cloned().collect(),
            nested_objects: map
                .values()
                .filter(|v| v.is_object() || v.is_array())
                .count(),
            total_fields: map.len(),
        },
        Value::Array(items) => {
            // Distinct type names over the first 5 elements, first-seen order.
            let mut item_types: Vec<String> = Vec::new();
            for item in items.iter().take(5) {
                let name = type_name(item);
                if !item_types.iter().any(|t| t == name) {
                    item_types.push(name.to_string());
                }
            }
            JsonStructureInfo::Array { length: items.len(), item_types }
        }
        other => JsonStructureInfo::Primitive { value_type: type_name(other).to_string() },
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_summary_counts_nested_containers() {
        let signal = detect_json(r#"{"a": 1, "b": [1, 2, 3]}"#).expect("valid JSON object");
        assert!(signal.is_json);
        assert_eq!(signal.confidence, 0.95);
        match signal.info.expect("summary present") {
            JsonStructureInfo::Object { keys, nested_objects, total_fields } => {
                assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
                assert_eq!(nested_objects, 1);
                assert_eq!(total_fields, 2);
            }
            other => panic!("expected object summary, got {other:?}"),
        }
    }

    #[test]
    fn array_summary_samples_first_five_item_types() {
        let signal = detect_json(r#"[1, "x", true, null, 2.5, {"deep": 1}]"#)
            .expect("valid JSON array");
        match signal.info.expect("summary present") {
            JsonStructureInfo::Array { length, item_types } => {
                assert_eq!(length, 6);
                // The object at index 5 is beyond the 5-element sample.
                assert_eq!(item_types, vec!["number", "string", "boolean", "null"]);
            }
            other => panic!("expected array summary, got {other:?}"),
        }
    }

    #[test]
    fn invalid_json_is_a_negative_signal() {
        assert!(detect_json("not json at all").is_none());
        assert!(detect_json("{\"unterminated\": ").is_none());
    }
}
