use crate::error::{Result, SimError};
use crate::types::config::SimConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "star-sim.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".star-sim/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/star-sim/config.toml";

pub fn load_config(root: &Path) -> Result<Option<SimConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges global, directory and local layers; later layers win key by key.
/// Without a `star-sim.toml` in `root` there is no config at all.
pub fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<SimConfig>> {
    if !root.exists() {
        return Err(SimError::PathNotFound(root.display().to_string()));
    }
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: SimConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| SimError::ConfigParse(e.to_string()))?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| SimError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_dir_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_rejects_missing_directory() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_config_with_global(&dir.path().join("absent"), None)
            .expect_err("missing directory should fail");
        assert!(matches!(err, SimError::PathNotFound(_)));
    }

    #[test]
    fn load_config_reports_malformed_toml() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[scoring\nbase_score = ")
            .expect("config should write");
        let err = load_config_with_global(dir.path(), None).expect_err("parse should fail");
        assert!(err.to_string().contains("config parse error"));
    }

    #[test]
    fn load_config_merges_global_dir_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[scoring]
base_score = 3.0

[logging]
level = "info"

[advisory]
"Getting Needed Care" = "Global advice."
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[recommendations]
threshold = 3.5
limit = 4

[advisory]
"Getting Needed Care" = "Directory advice."

[values]
"Customer Service Rating" = 5.0
"#,
        )
        .expect("dir config should write");

        fs::create_dir_all(root.path().join(".star-sim")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[recommendations]
limit = 2
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.base_score(), 3.0);
        assert_eq!(cfg.log_level(), "info");
        let policy = cfg.recommend_policy();
        assert_eq!(policy.threshold, 3.5);
        assert_eq!(policy.limit, 2);
        assert_eq!(
            cfg.advisory.get("Getting Needed Care").map(String::as_str),
            Some("Directory advice.")
        );
        assert_eq!(cfg.values.get("Customer Service Rating"), Some(&5.0));
    }
}
