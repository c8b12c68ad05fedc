use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;

use super::model::Entity;

pub fn load_entities(path: &Path) -> Result<Vec<Entity>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read entity file {}", path.display()))?;
    parse_entities(&raw).with_context(|| format!("failed to parse entity file {}", path.display()))
}

pub(super) fn parse_entities(raw: &str) -> Result<Vec<Entity>> {
    let parsed: Value = serde_json::from_str(raw).context("invalid JSON")?;

    let list = match &parsed {
        Value::Array(_) => &parsed,
        Value::Object(object) => object
            .get("entities")
            .or_else(|| object.get("people"))
            .ok_or_else(|| anyhow!("expected an `entities` or `people` array"))?,
        _ => return Err(anyhow!("expected a JSON array of entities")),
    };

    let entities = Vec::<Entity>::deserialize(list).context("invalid entity record")?;
    for (index, entity) in entities.iter().enumerate() {
        if !entity.value.is_finite() {
            return Err(anyhow!("entity {index} has a non-finite value"));
        }
    }
    Ok(entities)
}
