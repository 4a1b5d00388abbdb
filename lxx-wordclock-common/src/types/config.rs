use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::types::{DISPLAY_HEIGHT, DISPLAY_WIDTH, HighlightColor, PanelVariant};

pub const DEFAULT_OUTPUT_PATH: &str = "sentence_clock.png";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub display: DisplayConfig,
    pub output: OutputConfig,
    pub panel: PanelConfig,
}

/// 画布尺寸与字母布局
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub margin_x: u32,
    pub margin_y: u32,
    pub highlight: HighlightColor,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            cell_width: 60,
            cell_height: 50,
            margin_x: 20,
            margin_y: 20,
            highlight: HighlightColor::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// 面板交接配置：墨色阈值与每日整屏刷新时间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub variant: PanelVariant,
    pub red_threshold: u8,
    pub black_threshold: u8,
    pub full_refresh_hour: u8,
    pub full_refresh_minute: u8,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            variant: PanelVariant::V2B,
            red_threshold: 150,
            black_threshold: 150,
            full_refresh_hour: 2,
            full_refresh_minute: 0,
        }
    }
}
