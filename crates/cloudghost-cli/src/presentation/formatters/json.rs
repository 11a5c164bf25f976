use serde_json::Value;
use std::fmt;

/// Two-space indented JSON, the layout every listing command prints
pub fn pretty(value: &Value) -> Result<String, fmt::Error> {
    serde_json::to_string_pretty(value).map_err(|_| fmt::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_sorts_keys_and_indents() {
        let value = json!({"value": [], "count": 1});
        assert_eq!(pretty(&value).unwrap(), "{\n  \"count\": 1,\n  \"value\": []\n}");
    }
}
