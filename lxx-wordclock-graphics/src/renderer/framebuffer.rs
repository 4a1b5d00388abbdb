//! 渲染缓冲区模块
//! 提供 7.5 寸黑白红墨水屏的三色帧缓冲区

use core::convert::Infallible;

use embedded_graphics::{
    Pixel,
    pixelcolor::PixelColor,
    prelude::{DrawTarget, OriginDimensions, Size},
};
use lxx_wordclock_common::*;

/// 颜色枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriColor {
    #[default]
    White,
    Black,
    Red,
}

impl PixelColor for TriColor {
    type Raw = ();
}

impl TriColor {
    /// 转为 RGB 值
    pub fn to_rgb(self) -> [u8; 3] {
        match self {
            TriColor::White => [0xFF, 0xFF, 0xFF],
            TriColor::Black => [0x00, 0x00, 0x00],
            TriColor::Red => [0xFF, 0x00, 0x00],
        }
    }
}

impl From<HighlightColor> for TriColor {
    fn from(color: HighlightColor) -> Self {
        match color {
            HighlightColor::Red => TriColor::Red,
            HighlightColor::Black => TriColor::Black,
        }
    }
}

/// 渲染缓冲区
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    buffer: Vec<TriColor>,
}

impl Framebuffer {
    /// 创建新的渲染缓冲区，默认白色
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            buffer: vec![TriColor::White; size],
        }
    }

    /// 获取宽度
    pub fn width(&self) -> u32 {
        self.width
    }

    /// 获取高度
    pub fn height(&self) -> u32 {
        self.height
    }

    /// 获取缓冲区引用
    pub fn pixels(&self) -> &[TriColor] {
        &self.buffer
    }

    /// 读取像素，越界返回 `None`
    pub fn pixel(&self, x: u32, y: u32) -> Option<TriColor> {
        self.index(x, y).map(|i| self.buffer[i])
    }

    /// 绘制像素
    pub fn set_pixel(&mut self, x: u32, y: u32, color: TriColor) -> SystemResult<()> {
        let index = self.index(x, y).ok_or(RenderError::OutOfBounds)?;
        self.buffer[index] = color;
        Ok(())
    }

    /// 清屏
    pub fn clear(&mut self, color: TriColor) {
        self.buffer.fill(color);
    }

    /// 统计矩形区域内指定颜色的像素数，区域按缓冲区裁剪
    pub fn count_in(&self, x: u32, y: u32, width: u32, height: u32, color: TriColor) -> usize {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        (y..y_end)
            .flat_map(|py| (x..x_end).map(move |px| (px, py)))
            .filter(|&(px, py)| self.pixel(px, py) == Some(color))
            .count()
    }

    /// 转为按行排列的 RGB24 数据
    pub fn to_rgb(&self) -> Vec<u8> {
        self.buffer.iter().flat_map(|c| c.to_rgb()).collect()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new(DISPLAY_WIDTH, DISPLAY_HEIGHT) // 默认墨水屏分辨率
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Framebuffer {
    type Color = TriColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            if let Some(index) = self.index(point.x as u32, point.y as u32) {
                self.buffer[index] = color;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        prelude::{Point, Primitive},
        primitives::{PrimitiveStyle, Rectangle},
        Drawable,
    };

    #[test]
    fn test_new_buffer_is_white() {
        let fb = Framebuffer::new(16, 4);
        assert_eq!(fb.pixels().len(), 64);
        assert!(fb.pixels().iter().all(|&c| c == TriColor::White));
        assert_eq!(Framebuffer::default().size(), Size::new(800, 480));
    }

    #[test]
    fn test_set_pixel_bounds() {
        let mut fb = Framebuffer::new(4, 4);
        fb.set_pixel(3, 3, TriColor::Red).unwrap();
        assert_eq!(fb.pixel(3, 3), Some(TriColor::Red));
        assert_eq!(
            fb.set_pixel(4, 0, TriColor::Black),
            Err(SystemError::Render(RenderError::OutOfBounds))
        );
        assert_eq!(fb.pixel(0, 4), None);
    }

    #[test]
    fn test_draw_target_clips() {
        let mut fb = Framebuffer::new(10, 10);
        Rectangle::new(Point::new(-5, -5), Size::new(10, 10))
            .into_styled(PrimitiveStyle::with_fill(TriColor::Black))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(fb.count_in(0, 0, 10, 10, TriColor::Black), 25);
        assert_eq!(fb.pixel(5, 5), Some(TriColor::White));
    }

    #[test]
    fn test_to_rgb() {
        let mut fb = Framebuffer::new(2, 1);
        fb.set_pixel(1, 0, TriColor::Red).unwrap();
        assert_eq!(fb.to_rgb(), vec![0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00]);
        fb.clear(TriColor::Black);
        assert_eq!(fb.to_rgb(), vec![0; 6]);
    }
}
