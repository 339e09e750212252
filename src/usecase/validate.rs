use crate::infrastructure::schema_validator::validate_network_file;
use crate::infrastructure::serde_json_adapter::NetworkFileDto;
use anyhow::{anyhow, Result};
use std::collections::BTreeMap;

pub fn validate_network(dto: &NetworkFileDto) -> Result<()> {
    let network_value = serde_json::to_value(dto)?;
    validate_network_file(&network_value)?;

    // Ids must be exactly 0..N, each used once.
    let n = dto.airports.len();
    let mut owner: BTreeMap<usize, &str> = BTreeMap::new();
    for (code, &id) in dto.airports.iter() {
        if id >= n {
            return Err(anyhow!(
                "airport id out of range: {code}={id} (expected 0..{n})"
            ));
        }
        if let Some(existing) = owner.insert(id, code.as_str()) {
            return Err(anyhow!(
                "airport id reused: {id} (saw for {existing} and {code})"
            ));
        }
    }

    for (i, (from, to)) in dto.routes.iter().enumerate() {
        for code in [from, to] {
            if !dto.airports.contains_key(code) {
                return Err(anyhow!("route #{i} references unknown airport: {code}"));
            }
        }
    }

    Ok(())
}
