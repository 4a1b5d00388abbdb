//! 配置管理器
//! 加载 JSON 配置并在替换前完成校验

use lxx_wordclock_common::*;

/// 配置管理器
pub struct ConfigManager {
    config: SystemConfig,
}

impl ConfigManager {
    /// 使用默认配置创建管理器
    pub fn new() -> Self {
        Self {
            config: SystemConfig::default(),
        }
    }

    /// 解析 JSON 配置，缺省字段保持默认值
    pub fn load_json(&mut self, text: &str) -> SystemResult<&SystemConfig> {
        info!("Loading config");
        let config: SystemConfig = serde_json::from_str(text).map_err(|e| {
            error!("Failed to parse config: {}", e);
            ConfigError::Malformed("invalid JSON document")
        })?;
        self.set_config(config)
    }

    /// 校验并替换当前配置，校验失败时保留原配置
    pub fn set_config(&mut self, config: SystemConfig) -> SystemResult<&SystemConfig> {
        Self::validate(&config)?;
        self.config = config;
        Ok(&self.config)
    }

    /// 获取当前配置
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// 获取可变配置
    pub fn config_mut(&mut self) -> &mut SystemConfig {
        &mut self.config
    }

    /// 取出配置
    pub fn into_config(self) -> SystemConfig {
        self.config
    }

    /// 校验配置取值
    pub fn validate(config: &SystemConfig) -> SystemResult<()> {
        let display = &config.display;
        if display.width == 0 || display.height == 0 {
            return Err(ConfigError::InvalidValue("canvas size must be non-zero").into());
        }
        if display.width > DISPLAY_WIDTH || display.height > DISPLAY_HEIGHT {
            warn!(
                "Canvas {}x{} exceeds panel {}x{}",
                display.width, display.height, DISPLAY_WIDTH, DISPLAY_HEIGHT
            );
            return Err(ConfigError::InvalidValue("canvas larger than the panel").into());
        }
        if display.cell_width == 0 || display.cell_height == 0 {
            return Err(ConfigError::InvalidValue("cell size must be non-zero").into());
        }

        let grid_w = display
            .margin_x
            .saturating_add(display.cell_width.saturating_mul(GRID_COLS as u32));
        let grid_h = display
            .margin_y
            .saturating_add(display.cell_height.saturating_mul(GRID_ROWS as u32));
        if grid_w > display.width || grid_h > display.height {
            warn!(
                "Grid {}x{} does not fit canvas {}x{}",
                grid_w, grid_h, display.width, display.height
            );
            return Err(ConfigError::InvalidValue("letter grid does not fit the canvas").into());
        }

        let panel = &config.panel;
        if panel.red_threshold == u8::MAX || panel.black_threshold == u8::MAX {
            return Err(ConfigError::InvalidValue("thresholds must be below 255").into());
        }
        if ClockReading::new(panel.full_refresh_hour, panel.full_refresh_minute).is_err() {
            return Err(ConfigError::InvalidValue("full refresh time out of range").into());
        }

        if config.output.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue("output path is empty").into());
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let manager = ConfigManager::new();
        assert!(ConfigManager::validate(manager.config()).is_ok());
        assert_eq!(manager.config().display.width, 800);
        assert_eq!(manager.config().output.path, DEFAULT_OUTPUT_PATH);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let mut manager = ConfigManager::new();
        let config = manager
            .load_json(r#"{ "display": { "highlight": "black" }, "panel": { "variant": "1" } }"#)
            .unwrap();
        assert_eq!(config.display.highlight, HighlightColor::Black);
        assert_eq!(config.display.cell_width, 60);
        assert_eq!(config.panel.variant, PanelVariant::V1);
        assert_eq!(config.panel.red_threshold, 150);
    }

    #[test]
    fn test_empty_object_is_default() {
        let mut manager = ConfigManager::new();
        let config = manager.load_json("{}").unwrap().clone();
        assert_eq!(config, SystemConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        let mut manager = ConfigManager::new();
        assert_eq!(
            manager.load_json("{ not json"),
            Err(SystemError::Config(ConfigError::Malformed("invalid JSON document")))
        );
    }

    #[test]
    fn test_grid_must_fit() {
        let mut manager = ConfigManager::new();
        let err = manager
            .load_json(r#"{ "display": { "cell_width": 70 } }"#)
            .unwrap_err();
        assert_eq!(
            err,
            SystemError::Config(ConfigError::InvalidValue("letter grid does not fit the canvas"))
        );
        // A rejected document leaves the previous config in place.
        assert_eq!(manager.config().display.cell_width, 60);
    }

    #[test]
    fn test_canvas_bounded_by_panel() {
        let mut manager = ConfigManager::new();
        let err = manager
            .load_json(r#"{ "display": { "width": 4294967295, "height": 4294967295 } }"#)
            .unwrap_err();
        assert_eq!(
            err,
            SystemError::Config(ConfigError::InvalidValue("canvas larger than the panel"))
        );
        assert_eq!(manager.config().display.width, DISPLAY_WIDTH);

        let mut config = SystemConfig::default();
        config.display.height = DISPLAY_HEIGHT + 1;
        assert!(ConfigManager::validate(&config).is_err());
        config.display.height = DISPLAY_HEIGHT;
        assert!(ConfigManager::validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_bad_refresh_time_and_path() {
        let mut config = SystemConfig::default();
        config.panel.full_refresh_minute = 60;
        assert!(ConfigManager::validate(&config).is_err());

        let mut config = SystemConfig::default();
        config.output.path.clear();
        assert!(ConfigManager::validate(&config).is_err());
    }
}
