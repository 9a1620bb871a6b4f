use crate::error::{Result, WorkstyleError};
use crate::types::config::WorkstyleConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "workstyle.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".workstyle/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/workstyle/config.toml";

/// Loads the merged config for `root`, or for an explicit `--config` file.
/// Returns `None` when no layer exists.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<WorkstyleConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<Option<WorkstyleConfig>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(WorkstyleError::ConfigParse(format!(
                "config file not found: {}",
                path.display()
            )));
        }
    }

    let project_path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(DEFAULT_CONFIG_FILE));
    let local_path = root.join(DEFAULT_LOCAL_FILE);

    let mut merged = Value::Table(Map::new());
    let mut found = false;
    for path in [global_path, Some(project_path.as_path()), Some(local_path.as_path())]
        .into_iter()
        .flatten()
    {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    if !found {
        return Ok(None);
    }

    let cfg: WorkstyleConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| WorkstyleError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| WorkstyleError::ConfigParse(format!("{}: {}", path.display(), e)))
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
    use crate::types::config::AnswerPolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_uses_global_layer_alone() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        fs::write(&global_path, "[report]\nformat = \"json\"\n").expect("global should write");

        let cfg = load_config_with_global(root.path(), None, Some(&global_path))
            .expect("load should succeed")
            .expect("global config should be used");
        assert_eq!(cfg.report_format(), Some("json"));
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[report]
format = "json"

[log]
level = "info"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[answers]
policy = "strict"
allow_unknown_keys = false

[report]
format = "md"
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".workstyle")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[answers]
policy = "lenient"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None, Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.answer_policy(), AnswerPolicy::Lenient);
        assert!(!cfg.allow_unknown_keys());
        assert_eq!(cfg.report_format(), Some("md"));
        assert_eq!(cfg.log_level(), "info");
    }

    #[test]
    fn explicit_config_replaces_project_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[report]\nformat = \"md\"\n",
        )
        .expect("project config should write");
        let explicit = root.path().join("other.toml");
        fs::write(&explicit, "[report]\nformat = \"json\"\n").expect("explicit should write");

        let cfg = load_config_with_global(root.path(), Some(&explicit), None)
            .expect("load should succeed")
            .expect("explicit config should exist");
        assert_eq!(cfg.report_format(), Some("json"));
    }

    #[test]
    fn explicit_config_must_exist() {
        let root = TempDir::new().expect("root temp dir should be created");
        let err = load_config_with_global(root.path(), Some(&root.path().join("nope.toml")), None)
            .expect_err("missing explicit config should fail");
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_config_rejects_invalid_merged_values() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[answers]\npolicy = \"sometimes\"\n",
        )
        .expect("project config should write");

        let err = load_config_with_global(root.path(), None, None).expect_err("should fail");
        assert!(err.to_string().contains("unsupported answers.policy"));
    }
}
