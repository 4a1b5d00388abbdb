//! 文本渲染模块
//! 在字母网格的每个格子中居中绘制字母

use embedded_graphics::{
    Drawable,
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_10X20},
    prelude::{DrawTarget, Point},
    text::{Baseline, Text},
};
use lxx_wordclock_common::*;

use crate::renderer::framebuffer::TriColor;

const LETTER_FONT: &MonoFont<'static> = &FONT_10X20;

/// 表盘：绘制全部字母，点亮的格子使用高亮墨色
pub struct ClockFace<'a> {
    grid: &'a LetterGrid,
    highlights: &'a HighlightSet,
    layout: DisplayConfig,
}

impl<'a> ClockFace<'a> {
    /// 创建表盘
    pub fn new(grid: &'a LetterGrid, highlights: &'a HighlightSet, layout: DisplayConfig) -> Self {
        Self {
            grid,
            highlights,
            layout,
        }
    }

    /// 格子在画布上的左上角
    pub fn cell_origin(layout: &DisplayConfig, cell: CellCoordinate) -> Point {
        Point::new(
            (layout.margin_x + cell.col as u32 * layout.cell_width) as i32,
            (layout.margin_y + cell.row as u32 * layout.cell_height) as i32,
        )
    }

    fn glyph_origin(&self, cell: CellCoordinate) -> Point {
        let glyph = LETTER_FONT.character_size;
        let dx = self.layout.cell_width.saturating_sub(glyph.width) / 2;
        let dy = self.layout.cell_height.saturating_sub(glyph.height) / 2;
        Self::cell_origin(&self.layout, cell) + Point::new(dx as i32, dy as i32)
    }
}

impl Drawable for ClockFace<'_> {
    type Color = TriColor;

    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let dim = MonoTextStyle::new(LETTER_FONT, TriColor::Black);
        let lit = MonoTextStyle::new(LETTER_FONT, TriColor::from(self.layout.highlight));

        let mut utf8 = [0u8; 4];
        for (cell, letter) in self.grid.cells() {
            let style = if self.highlights.contains(cell) { lit } else { dim };
            let text = letter.encode_utf8(&mut utf8);
            Text::with_baseline(text, self.glyph_origin(cell), style, Baseline::Top).draw(target)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::framebuffer::Framebuffer;

    fn face_for(segments: &[Segment], highlight: HighlightColor) -> Framebuffer {
        let grid = LetterGrid::new();
        let mut set = HighlightSet::new();
        for &s in segments {
            set.push(s);
        }
        let layout = DisplayConfig {
            highlight,
            ..DisplayConfig::default()
        };
        let mut fb = Framebuffer::new(layout.width, layout.height);
        ClockFace::new(&grid, &set, layout).draw(&mut fb).unwrap();
        fb
    }

    fn count(fb: &Framebuffer, cell: CellCoordinate, color: TriColor) -> usize {
        let layout = DisplayConfig::default();
        let origin = ClockFace::cell_origin(&layout, cell);
        fb.count_in(
            origin.x as u32,
            origin.y as u32,
            layout.cell_width,
            layout.cell_height,
            color,
        )
    }

    #[test]
    fn test_lit_cells_use_highlight_ink() {
        let segments = [Segment::TwentyFive, Segment::Past, Segment::Four];
        let fb = face_for(&segments, HighlightColor::Red);
        let mut set = HighlightSet::new();
        for s in segments {
            set.push(s);
        }

        for (cell, _) in LetterGrid::new().cells() {
            let red = count(&fb, cell, TriColor::Red);
            let black = count(&fb, cell, TriColor::Black);
            if set.contains(cell) {
                assert!(red > 0 && black == 0, "{:?} should be lit", cell);
            } else {
                assert!(red == 0 && black > 0, "{:?} should be dim", cell);
            }
        }
    }

    #[test]
    fn test_black_highlight_has_no_red() {
        let fb = face_for(&[Segment::Half, Segment::Past, Segment::Nine], HighlightColor::Black);
        assert!(fb.pixels().iter().all(|&c| c != TriColor::Red));
    }

    #[test]
    fn test_cell_origin() {
        let layout = DisplayConfig::default();
        assert_eq!(
            ClockFace::cell_origin(&layout, CellCoordinate::at(0, 0)),
            Point::new(20, 20)
        );
        assert_eq!(
            ClockFace::cell_origin(&layout, CellCoordinate::at(8, 12)),
            Point::new(740, 420)
        );
    }
}
