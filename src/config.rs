use crate::error::{Result, SurveyError};
use crate::types::config::SurveyConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "sdg-radar.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".sdg-radar/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/sdg-radar/config.toml";

/// Loads the layered config for `root`: global, then `sdg-radar.toml`, then
/// the local override. `None` when no layer exists.
pub fn load_config(root: &Path) -> Result<Option<SurveyConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<SurveyConfig>> {
    let layers = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .filter(|path| path.exists())
        .collect::<Vec<_>>();
    if layers.is_empty() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    for path in &layers {
        merge_toml(&mut merged, read_toml_value(path)?);
        tracing::debug!(path = %path.display(), "merged config layer");
    }

    let cfg: SurveyConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| SurveyError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| SurveyError::ConfigParse(format!("{}: {}", path.display(), e)))
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
    use crate::scoring::RatingPolicy;
    use crate::types::config::ChartFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_without_any_layer() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing_global = dir.path().join("absent.toml");
        let cfg = load_config_with_global(dir.path(), Some(&missing_global))
            .expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_uses_global_layer_alone() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        fs::write(&global_path, "[scoring]\nout_of_range = \"clamp\"\n")
            .expect("global config should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("global config should apply");
        assert_eq!(cfg.rating_policy(), RatingPolicy::Clamp);
    }

    #[test]
    fn load_config_uses_local_override_without_repo_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::create_dir_all(root.path().join(".sdg-radar")).expect("local dir should create");
        fs::write(root.path().join(DEFAULT_LOCAL_FILE), "[chart]\nformat = \"svg\"\n")
            .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None)
            .expect("load should succeed")
            .expect("local config should apply");
        assert_eq!(cfg.chart_settings().format, ChartFormat::Svg);
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[scoring]
out_of_range = "pass"

[chart]
dpi = 72
size = 600
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[scoring]
out_of_range = "clamp"

[chart]
size = 900
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".sdg-radar")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[chart]
format = "svg"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.rating_policy(), RatingPolicy::Clamp);
        let settings = cfg.chart_settings();
        assert_eq!(settings.dpi, 72);
        assert_eq!(settings.size, 900);
        assert_eq!(settings.format, ChartFormat::Svg);
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[chart]\nfill_alpha = 2.0\n",
        )
        .expect("repo config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(err.to_string().contains("chart.fill_alpha"));
    }

    #[test]
    fn load_config_reports_path_on_syntax_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[chart\n").expect("config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
