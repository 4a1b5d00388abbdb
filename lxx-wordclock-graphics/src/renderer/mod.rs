//! 渲染引擎模块
//! 绘制文字时钟表盘并将帧输出到文件

mod framebuffer;
mod planes;
mod png;
mod text;

use std::path::{Path, PathBuf};

use embedded_graphics::Drawable;
use lxx_wordclock_common::*;

pub use framebuffer::{Framebuffer, TriColor};
pub use planes::{Ink, InkThresholds, PanelPlanes, Plane};
pub use png::{load_rgb, save_png, to_rgb_image};
pub use text::ClockFace;

/// 将表盘绘制到新的帧缓冲区
pub fn paint(layout: &DisplayConfig, grid: &LetterGrid, highlights: &HighlightSet) -> Framebuffer {
    let mut framebuffer = Framebuffer::new(layout.width, layout.height);
    match ClockFace::new(grid, highlights, *layout).draw(&mut framebuffer) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    framebuffer
}

/// PNG 渲染器，每帧覆盖上一帧的输出文件
pub struct PngGridRenderer {
    layout: DisplayConfig,
    output: PathBuf,
    last_frame: Option<Framebuffer>,
}

impl PngGridRenderer {
    /// 创建渲染器，画布不得超过面板且必须容纳整个字母网格
    pub fn new(layout: DisplayConfig, output: impl Into<PathBuf>) -> SystemResult<Self> {
        if layout.width > DISPLAY_WIDTH || layout.height > DISPLAY_HEIGHT {
            return Err(ConfigError::InvalidValue("canvas larger than the panel").into());
        }
        let grid_w = layout
            .margin_x
            .saturating_add(layout.cell_width.saturating_mul(GRID_COLS as u32));
        let grid_h = layout
            .margin_y
            .saturating_add(layout.cell_height.saturating_mul(GRID_ROWS as u32));
        if grid_w > layout.width || grid_h > layout.height {
            return Err(RenderError::CanvasTooSmall.into());
        }
        Ok(Self {
            layout,
            output: output.into(),
            last_frame: None,
        })
    }

    /// 输出文件路径
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// 最近一次渲染的帧
    pub fn last_frame(&self) -> Option<&Framebuffer> {
        self.last_frame.as_ref()
    }
}

impl GridRenderer for PngGridRenderer {
    fn render(&mut self, grid: &LetterGrid, highlights: &HighlightSet) -> SystemResult<()> {
        let frame = paint(&self.layout, grid, highlights);
        save_png(&frame, &self.output)?;
        self.last_frame = Some(frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_small_canvas() {
        let layout = DisplayConfig {
            width: 400,
            ..DisplayConfig::default()
        };
        assert!(matches!(
            PngGridRenderer::new(layout, "unused.png"),
            Err(SystemError::Render(RenderError::CanvasTooSmall))
        ));
    }

    #[test]
    fn test_rejects_canvas_beyond_panel() {
        let layout = DisplayConfig {
            width: u32::MAX,
            height: u32::MAX,
            ..DisplayConfig::default()
        };
        assert!(matches!(
            PngGridRenderer::new(layout, "unused.png"),
            Err(SystemError::Config(ConfigError::InvalidValue(_)))
        ));

        let layout = DisplayConfig {
            cell_width: u32::MAX,
            ..DisplayConfig::default()
        };
        assert!(matches!(
            PngGridRenderer::new(layout, "unused.png"),
            Err(SystemError::Render(RenderError::CanvasTooSmall))
        ));
    }

    #[test]
    fn test_render_writes_png_and_planes_match() {
        let path = std::env::temp_dir().join(format!("wordclock-face-{}.png", std::process::id()));
        let mut renderer = PngGridRenderer::new(DisplayConfig::default(), &path).unwrap();

        let mut highlights = HighlightSet::new();
        highlights.push(Segment::Quarter);
        highlights.push(Segment::To);
        highlights.push(Segment::Seven);
        renderer.render(&LetterGrid::new(), &highlights).unwrap();

        let image = load_rgb(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(image.dimensions(), (DISPLAY_WIDTH, DISPLAY_HEIGHT));

        let frame = renderer.last_frame().unwrap();
        let planes = PanelPlanes::split(&image, PanelVariant::V2B, InkThresholds::default());
        let red = planes.red.unwrap();
        for (i, &color) in frame.pixels().iter().enumerate() {
            let (x, y) = (i as u32 % DISPLAY_WIDTH, i as u32 / DISPLAY_WIDTH);
            assert_eq!(red.is_ink(x, y), color == TriColor::Red);
            assert_eq!(planes.black.is_ink(x, y), color == TriColor::Black);
        }
    }
}
