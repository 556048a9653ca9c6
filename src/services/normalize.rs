use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a loosely-typed "list of strings" field into an actual list.
///
/// Store rows encode these fields inconsistently: sometimes a real array,
/// sometimes a JSON array serialized into a string, sometimes a bare
/// string. The output is always a list of strings.
pub fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(scalar_to_string).collect(),
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => items.iter().map(scalar_to_string).collect(),
            _ => vec![raw.clone()],
        },
        Value::Null => Vec::new(),
        other => vec![scalar_to_string(other)],
    }
}

/// Coerce a numeric field that may arrive as a number, a numeric string,
/// or garbage. Unparseable and missing values become 0.
pub fn number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(string_list(&value))
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_passes_through_unchanged() {
        let input = json!(["June", "July"]);
        assert_eq!(string_list(&input), vec!["June", "July"]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = string_list(&json!("[\"March\", \"April\"]"));
        let twice = string_list(&json!(once.clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn json_encoded_array_is_parsed() {
        let input = json!("[\"Beach\", \"Sightseeing\"]");
        assert_eq!(string_list(&input), vec!["Beach", "Sightseeing"]);
    }

    #[test]
    fn bare_string_is_wrapped() {
        let input = json!("October to February");
        assert_eq!(string_list(&input), vec!["October to February"]);
    }

    #[test]
    fn json_scalar_string_is_wrapped_not_unwrapped() {
        // "42" parses as JSON but is not an array, so the raw string wins.
        let input = json!("42");
        assert_eq!(string_list(&input), vec!["42"]);
    }

    #[test]
    fn null_becomes_empty_list() {
        assert!(string_list(&Value::Null).is_empty());
    }

    #[test]
    fn other_scalars_are_stringified() {
        assert_eq!(string_list(&json!(7)), vec!["7"]);
        assert_eq!(string_list(&json!([1, "two"])), vec!["1", "two"]);
    }

    #[test]
    fn numbers_coerce_leniently() {
        assert_eq!(number(&json!(4.5)), 4.5);
        assert_eq!(number(&json!(12)), 12.0);
        assert_eq!(number(&json!("350")), 350.0);
        assert_eq!(number(&json!("  4.2 ")), 4.2);
        assert_eq!(number(&json!("n/a")), 0.0);
        assert_eq!(number(&Value::Null), 0.0);
        assert_eq!(number(&json!({"unexpected": true})), 0.0);
    }
}
