use core::fmt;

use crate::types::InvalidTimeError;

pub const HOURS_PER_DAY: u8 = 24;
pub const MINUTES_PER_HOUR: u8 = 60;
pub const BUCKET_MINUTES: u8 = 5;

/// 每次渲染采样一次的本地时间
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockReading {
    hour: u8,
    minute: u8,
}

impl ClockReading {
    /// 创建并校验时间
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTimeError> {
        if hour >= HOURS_PER_DAY || minute >= MINUTES_PER_HOUR {
            return Err(InvalidTimeError { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// 获取小时
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// 获取分钟
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// 12 小时制的小时，1..=12
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    /// 所在 5 分钟区间的起始分钟
    pub fn bucket_start(&self) -> u8 {
        self.minute - self.minute % BUCKET_MINUTES
    }

    /// 解析 `H:MM` 或 `HH:MM`；格式不符返回 `None`
    pub fn parse(text: &str) -> Option<Result<Self, InvalidTimeError>> {
        let (h, m) = text.trim().split_once(':')?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return None;
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        let hour = h.parse::<u8>().ok()?;
        let minute = m.parse::<u8>().ok()?;
        Some(Self::new(hour, minute))
    }
}

impl fmt::Display for ClockReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
