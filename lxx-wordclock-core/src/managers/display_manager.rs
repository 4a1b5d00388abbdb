use lxx_wordclock_common::*;

use crate::services::{clock_service::WordClockEngine, refresh_policy::RefreshPolicy};

/// 单次渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub reading: ClockReading,
    pub highlights: HighlightSet,
    pub refresh_mode: RefreshMode,
}

/// 显示管理器：时间源 -> 引擎 -> 渲染器
pub struct DisplayManager<'a, T: TimeSource, R: GridRenderer> {
    time_source: &'a mut T,
    renderer: &'a mut R,
    engine: WordClockEngine,
    grid: LetterGrid,
    refresh_policy: RefreshPolicy,
}

impl<'a, T: TimeSource, R: GridRenderer> DisplayManager<'a, T, R> {
    /// 创建显示管理器，默认凌晨两点整屏刷新
    pub fn new(time_source: &'a mut T, renderer: &'a mut R) -> Self {
        Self {
            time_source,
            renderer,
            engine: WordClockEngine::new(),
            grid: LetterGrid::new(),
            refresh_policy: RefreshPolicy::default(),
        }
    }

    /// 替换刷新策略
    pub fn with_refresh_policy(mut self, refresh_policy: RefreshPolicy) -> Self {
        self.refresh_policy = refresh_policy;
        self
    }

    /// 渲染当前时间；读数无效时在绘制前中止
    pub fn update_display(&mut self) -> SystemResult<RenderReport> {
        let reading = match self.time_source.now() {
            Ok(reading) => reading,
            Err(e) => {
                warn!("Skipping render cycle: {}", e);
                return Err(e);
            }
        };

        let highlights = self.engine.highlights_for(reading);
        let refresh_mode = self.refresh_policy.mode_for(reading);
        info!(
            "{} -> \"{}\" ({:?} refresh)",
            reading,
            highlights.phrase(),
            refresh_mode
        );

        self.renderer.render(&self.grid, &highlights)?;

        Ok(RenderReport {
            reading,
            highlights,
            refresh_mode,
        })
    }
}
