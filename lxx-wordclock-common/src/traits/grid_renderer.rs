use crate::*;

/// 网格渲染器：绘制字母网格与高亮格子并输出图像
pub trait GridRenderer {
    /// 渲染一帧
    fn render(&mut self, grid: &LetterGrid, highlights: &HighlightSet) -> SystemResult<()>;
}

/// 空渲染器，丢弃画面，仅记录最近一次高亮集合
#[derive(Default)]
pub struct NoRenderer {
    last: Option<HighlightSet>,
    frames: u32,
}

impl NoRenderer {
    /// 创建空渲染器
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近一次高亮集合
    pub fn last(&self) -> Option<&HighlightSet> {
        self.last.as_ref()
    }

    /// 已渲染帧数
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl GridRenderer for NoRenderer {
    fn render(&mut self, _grid: &LetterGrid, highlights: &HighlightSet) -> SystemResult<()> {
        info!("[NoRenderer] {}", highlights.phrase());
        self.last = Some(highlights.clone());
        self.frames += 1;
        Ok(())
    }
}
