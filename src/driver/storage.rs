// src/driver/storage.rs

use std::{fs, io, path::Path};

use lxx_wordclock_common::{PanelVariant, StorageError, SystemConfig, SystemResult};
use lxx_wordclock_core::ConfigManager;

/// 面板版本覆盖变量，取值与配置相同（`1`、`2`、`2B`）
pub const PANEL_VERSION_ENV: &str = "WAVESHARE_EPD75_VERSION";

/// 读取 JSON 配置文件，未指定路径时使用默认配置
pub fn load_config(path: Option<&Path>) -> SystemResult<SystemConfig> {
    let mut manager = ConfigManager::new();
    if let Some(path) = path {
        log::info!("Reading config file: {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| {
            log::error!("Failed to read {}: {}", path.display(), e);
            match e.kind() {
                io::ErrorKind::NotFound => StorageError::NotFound,
                _ => StorageError::ReadFailed,
            }
        })?;
        manager.load_json(&text)?;
    }

    let mut config = manager.into_config();
    apply_panel_override(&mut config, std::env::var(PANEL_VERSION_ENV).ok().as_deref());
    Ok(config)
}

/// 应用环境变量中的面板版本
pub fn apply_panel_override(config: &mut SystemConfig, version: Option<&str>) {
    if let Some(version) = version {
        let variant = PanelVariant::from_version(version);
        log::debug!("{}={} selects {:?}", PANEL_VERSION_ENV, version, variant);
        config.panel.variant = variant;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override() {
        let mut config = SystemConfig::default();
        apply_panel_override(&mut config, None);
        assert_eq!(config.panel.variant, PanelVariant::V2B);
        apply_panel_override(&mut config, Some("1"));
        assert_eq!(config.panel.variant, PanelVariant::V1);
        apply_panel_override(&mut config, Some("3"));
        assert_eq!(config.panel.variant, PanelVariant::V2);
    }

    #[test]
    fn test_load_config_file() {
        let path = std::env::temp_dir().join(format!("wordclock-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "output": { "path": "/tmp/face.png" } }"#).unwrap();
        let config = load_config(Some(&path));
        let _ = fs::remove_file(&path);
        assert_eq!(config.unwrap().output.path, "/tmp/face.png");
    }

    #[test]
    fn test_missing_config_file() {
        let path = std::env::temp_dir().join("wordclock-no-such-config.json");
        assert!(matches!(
            load_config(Some(&path)),
            Err(lxx_wordclock_common::SystemError::Storage(StorageError::NotFound))
        ));
    }
}
