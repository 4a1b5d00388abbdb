use serde::{Deserialize, Serialize};

pub const DISPLAY_WIDTH: u32 = 800;
pub const DISPLAY_HEIGHT: u32 = 480;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// 绘制前整屏清除，消除残影
    Full,
    Partial,
}

/// 微雪 7.5 寸面板版本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanelVariant {
    #[serde(rename = "1")]
    V1,
    #[serde(rename = "2")]
    V2,
    /// 黑白红三色屏
    #[default]
    #[serde(rename = "2B")]
    V2B,
}

impl PanelVariant {
    /// 解析 `WAVESHARE_EPD75_VERSION` 取值，未知值视为 `V2`
    pub fn from_version(version: &str) -> Self {
        match version.trim() {
            "1" => PanelVariant::V1,
            "2B" | "2b" => PanelVariant::V2B,
            _ => PanelVariant::V2,
        }
    }

    /// 是否有红色平面
    pub fn has_red_plane(self) -> bool {
        matches!(self, PanelVariant::V2B)
    }
}

/// 高亮字母的墨色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    #[default]
    Red,
    Black,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_from_version() {
        assert_eq!(PanelVariant::from_version("1"), PanelVariant::V1);
        assert_eq!(PanelVariant::from_version("2B"), PanelVariant::V2B);
        assert_eq!(PanelVariant::from_version("2"), PanelVariant::V2);
        assert_eq!(PanelVariant::from_version("whatever"), PanelVariant::V2);
        assert!(PanelVariant::V2B.has_red_plane());
        assert!(!PanelVariant::V1.has_red_plane());
    }

    #[test]
    fn test_panel_serde_names() {
        let v: PanelVariant = serde_json::from_str("\"2B\"").unwrap();
        assert_eq!(v, PanelVariant::V2B);
        let c: HighlightColor = serde_json::from_str("\"black\"").unwrap();
        assert_eq!(c, HighlightColor::Black);
    }
}
