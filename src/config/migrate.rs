use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys renamed between portal revisions: (old, new).
const RENAMED_KEYS: &[(&str, &str)] = &[
    ("password", "portal_password"),
    ("admin_pw", "admin_password"),
    ("product_csv", "catalog_file"),
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_yaml::from_str(&content)?;
    match value {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

/// List the configuration keys missing from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Rename legacy keys and add missing ones with their default values.
///   Returns:
///   Ok(true)  → config updated
///   Ok(false) → no change needed
pub fn run_config_migration(path: &Path) -> AppResult<bool> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;
    let mut changed = false;

    for (old, new) in RENAMED_KEYS {
        let old_key = Value::String(old.to_string());
        let new_key = Value::String(new.to_string());
        if let Some(v) = current.remove(&old_key) {
            if !current.contains_key(&new_key) {
                current.insert(new_key, v);
            }
            info(format!("Renamed config key '{}' → '{}'", old, new));
            changed = true;
        }
    }

    for (k, v) in defaults {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                info(format!("Added missing config key '{}'", name));
            }
            current.insert(k, v);
            changed = true;
        }
    }

    if changed {
        let yaml = serde_yaml::to_string(&Value::Mapping(current))?;
        fs::write(path, yaml)?;
        success(format!("Configuration migrated: {}", path.display()));
    }

    Ok(changed)
}
