// src/driver/time_source.rs

use jiff::{Timestamp, Zoned, tz::TimeZone};
use lxx_wordclock_common::{ClockReading, SystemError, SystemResult, TimeSource};

/// 系统时钟，按固定时区读取（默认系统时区）
pub struct SystemClock {
    zone: TimeZone,
}

impl SystemClock {
    /// 使用系统时区
    pub fn new() -> Self {
        Self {
            zone: TimeZone::system(),
        }
    }

    /// 使用指定 IANA 时区，如 `Europe/Oslo`
    pub fn with_zone(name: &str) -> SystemResult<Self> {
        let zone = TimeZone::get(name).map_err(|e| {
            log::error!("Unknown time zone {}: {}", name, e);
            SystemError::TimeSource
        })?;
        Ok(Self { zone })
    }

    fn reading_at(&self, timestamp: Timestamp) -> SystemResult<ClockReading> {
        let local = Zoned::new(timestamp, self.zone.clone());
        let hour = u8::try_from(local.hour()).map_err(|_| SystemError::TimeSource)?;
        let minute = u8::try_from(local.minute()).map_err(|_| SystemError::TimeSource)?;
        Ok(ClockReading::new(hour, minute)?)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now(&mut self) -> SystemResult<ClockReading> {
        self.reading_at(Timestamp::now())
    }
}
