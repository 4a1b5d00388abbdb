use crate::*;

/// 时间源：为渲染提供本地时间
pub trait TimeSource {
    /// 读取当前时间
    fn now(&mut self) -> SystemResult<ClockReading>;
}

/// 固定时间源，每次读取时校验原始时分
pub struct FixedTimeSource {
    hour: u8,
    minute: u8,
}

impl FixedTimeSource {
    /// 创建固定时间源
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }
}

impl From<ClockReading> for FixedTimeSource {
    fn from(reading: ClockReading) -> Self {
        Self::new(reading.hour(), reading.minute())
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&mut self) -> SystemResult<ClockReading> {
        let reading = ClockReading::new(self.hour, self.minute)?;
        debug!("[FixedTimeSource] reading {}", reading);
        Ok(reading)
    }
}
