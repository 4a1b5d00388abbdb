//! 面板位平面模块
//! 将 RGB 图像拆分为 7.5 寸墨水屏使用的 1 位平面
//!
//! Rows are packed MSB first and padded to a whole byte; a set bit is paper,
//! a cleared bit is ink.

use image::RgbImage;
use lxx_wordclock_common::*;

/// 像素墨色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Paper,
    Black,
    Red,
}

/// 墨色判定阈值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkThresholds {
    pub red: u8,
    pub black: u8,
}

impl InkThresholds {
    /// 从面板配置读取阈值
    pub fn from_config(config: &PanelConfig) -> Self {
        Self {
            red: config.red_threshold,
            black: config.black_threshold,
        }
    }

    /// 判定像素墨色：红色通道须同时超出另两通道 `red`，
    /// 黑色要求三通道均不高于 `black`
    pub fn classify(&self, [r, g, b]: [u8; 3]) -> Ink {
        let (r, g, b) = (r as u16, g as u16, b as u16);
        let red = self.red as u16;
        let black = self.black as u16;
        if r > g + red && r > b + red {
            Ink::Red
        } else if r <= black && g <= black && b <= black {
            Ink::Black
        } else {
            Ink::Paper
        }
    }
}

impl Default for InkThresholds {
    fn default() -> Self {
        Self::from_config(&PanelConfig::default())
    }
}

/// 单个 1bpp 平面
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Plane {
    /// 创建全白平面
    pub fn blank(width: u32, height: u32) -> Self {
        let len = Self::row_bytes(width) * height as usize;
        Self {
            width,
            height,
            data: vec![0xFF; len],
        }
    }

    /// 每行字节数
    pub fn row_bytes(width: u32) -> usize {
        (width as usize).div_ceil(8)
    }

    /// 获取宽度
    pub fn width(&self) -> u32 {
        self.width
    }

    /// 获取高度
    pub fn height(&self) -> u32 {
        self.height
    }

    /// 获取平面数据
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// 该像素是否着墨
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        let (byte, mask) = self.locate(x, y);
        self.data[byte] & mask == 0
    }

    /// 着墨像素数
    pub fn ink_count(&self) -> usize {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.is_ink(x, y))
            .count()
    }

    fn set_ink(&mut self, x: u32, y: u32) {
        let (byte, mask) = self.locate(x, y);
        self.data[byte] &= !mask;
    }

    fn locate(&self, x: u32, y: u32) -> (usize, u8) {
        let byte = y as usize * Self::row_bytes(self.width) + x as usize / 8;
        (byte, 0x80 >> (x % 8))
    }
}

/// 一帧的平面组：总有黑色平面，三色屏另有红色平面
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelPlanes {
    pub black: Plane,
    pub red: Option<Plane>,
}

impl PanelPlanes {
    /// 拆分图像；黑白屏上红色像素并入黑色平面
    pub fn split(image: &RgbImage, variant: PanelVariant, thresholds: InkThresholds) -> Self {
        let (width, height) = image.dimensions();
        let mut black = Plane::blank(width, height);
        let mut red = variant.has_red_plane().then(|| Plane::blank(width, height));

        for (x, y, pixel) in image.enumerate_pixels() {
            match (thresholds.classify(pixel.0), red.as_mut()) {
                (Ink::Red, Some(plane)) => plane.set_ink(x, y),
                (Ink::Red, None) | (Ink::Black, _) => black.set_ink(x, y),
                (Ink::Paper, _) => {}
            }
        }

        debug!(
            "Split {}x{} frame for {:?}: {} black, {} red",
            width,
            height,
            variant,
            black.ink_count(),
            red.as_ref().map_or(0, Plane::ink_count)
        );

        Self { black, red }
    }

    /// 与本帧同尺寸的全白平面组，整屏清除时先行写入
    pub fn cleared(&self) -> Self {
        let (width, height) = (self.black.width(), self.black.height());
        Self {
            black: Plane::blank(width, height),
            red: self.red.as_ref().map(|_| Plane::blank(width, height)),
        }
    }
}
