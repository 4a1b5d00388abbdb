use lxx_wordclock_common::*;

/// 刷新策略
///
/// 每天固定时刻整屏清除一次以消除残影，其余时刻局部更新
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    hour: u8,
    minute: u8,
}

impl RefreshPolicy {
    /// 指定每日整屏刷新时间
    pub fn new(full_refresh_at: ClockReading) -> Self {
        Self {
            hour: full_refresh_at.hour(),
            minute: full_refresh_at.minute(),
        }
    }

    /// 从面板配置创建
    pub fn from_config(config: &PanelConfig) -> SystemResult<Self> {
        let at = ClockReading::new(config.full_refresh_hour, config.full_refresh_minute)
            .map_err(|_| ConfigError::InvalidValue("full refresh time out of range"))?;
        Ok(Self::new(at))
    }

    /// 判定本次读数的刷新方式
    pub fn mode_for(&self, reading: ClockReading) -> RefreshMode {
        if reading.hour() == self.hour && reading.minute() == self.minute {
            RefreshMode::Full
        } else {
            RefreshMode::Partial
        }
    }
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self { hour: 2, minute: 0 }
    }
}
