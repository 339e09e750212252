use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

static NETWORK_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/network_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid network schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile network schema")
});

/// Validate a whole network document against the network schema
pub fn validate_network_file(network: &Value) -> Result<()> {
    match NETWORK_SCHEMA.validate(network) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Network file validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_rejects_negative_airport_id() {
        let v = json!({"airports": {"DSM": -1}, "routes": []});
        let err = validate_network_file(&v).unwrap_err().to_string();
        assert!(err.contains("Network file validation failed"));
    }

    #[test]
    fn schema_rejects_three_element_route() {
        let v = json!({"airports": {"A": 0}, "routes": [["A", "A", "A"]]});
        assert!(validate_network_file(&v).is_err());
    }
}
