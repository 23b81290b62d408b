use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::Cli;

#[derive(Debug, Serialize, Deserialize)]
pub struct LarderConfig {
    pub store: StoreSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: String,
}

/// Where the inventory snapshot lives, by precedence: `--data-file`
/// (or `LARDER_DATA_FILE`), then the config file, then the XDG default.
pub fn resolve_data_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(ref path) = cli.data_file {
        return Ok(path.clone());
    }

    let config_path = match cli.config {
        Some(ref path) => path.clone(),
        None => default_config_path()?,
    };
    if config_path.exists() {
        let config = read_config(&config_path)?;
        return Ok(PathBuf::from(config.store.path));
    }

    default_data_path()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("inventory.json"))
}

pub fn read_config(path: &Path) -> anyhow::Result<LarderConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("larder"));
        }
    }
    Ok(home_dir()?.join(".config").join("larder"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("larder"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("larder"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [store]
            path = "/tmp/inventory.json"
        "#;
        let config: LarderConfig = toml::from_str(toml).expect("parse config");
        assert_eq!(config.store.path, "/tmp/inventory.json");
    }

    #[test]
    fn test_xdg_paths_use_env() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        std::env::set_var("XDG_CONFIG_HOME", "/tmp/larder-config-test");
        std::env::set_var("XDG_DATA_HOME", "/tmp/larder-data-test");

        let config_dir = xdg_config_dir().expect("config dir");
        let data_dir = xdg_data_dir().expect("data dir");

        assert_eq!(
            config_dir,
            PathBuf::from("/tmp/larder-config-test").join("larder")
        );
        assert_eq!(
            data_dir,
            PathBuf::from("/tmp/larder-data-test").join("larder")
        );

        std::env::remove_var("XDG_CONFIG_HOME");
        std::env::remove_var("XDG_DATA_HOME");
    }

    #[test]
    fn test_resolve_prefers_explicit_data_file() {
        let cli = Cli {
            data_file: Some(PathBuf::from("/tmp/explicit.json")),
            config: Some(PathBuf::from("/nonexistent/config.toml")),
            no_color: true,
        };
        let path = resolve_data_path(&cli).expect("resolve");
        assert_eq!(path, PathBuf::from("/tmp/explicit.json"));
    }

    #[test]
    fn test_resolve_reads_config_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[store]\npath = \"/tmp/from-config.json\"\n")
            .expect("write config");

        let cli = Cli {
            data_file: None,
            config: Some(config_path),
            no_color: true,
        };
        let path = resolve_data_path(&cli).expect("resolve");
        assert_eq!(path, PathBuf::from("/tmp/from-config.json"));
    }
}
