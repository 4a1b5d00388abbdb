//! 文字时钟服务
//! 将本地时间映射为需要点亮的短语片段

use lxx_wordclock_common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connector {
    OClock,
    Past,
    To,
}

#[derive(Debug, Clone, Copy)]
struct MinuteBucket {
    start: u8,
    phrase: Option<Segment>,
    connector: Connector,
}

const fn bucket(start: u8, phrase: Option<Segment>, connector: Connector) -> MinuteBucket {
    MinuteBucket {
        start,
        phrase,
        connector,
    }
}

/// 按 `start` 排序，二分查找
const MINUTE_BUCKETS: [MinuteBucket; 12] = [
    bucket(0, None, Connector::OClock),
    bucket(5, Some(Segment::MinuteFive), Connector::Past),
    bucket(10, Some(Segment::MinuteTen), Connector::Past),
    bucket(15, Some(Segment::Quarter), Connector::Past),
    bucket(20, Some(Segment::Twenty), Connector::Past),
    bucket(25, Some(Segment::TwentyFive), Connector::Past),
    bucket(30, Some(Segment::Half), Connector::Past),
    bucket(35, Some(Segment::TwentyFive), Connector::To),
    bucket(40, Some(Segment::Twenty), Connector::To),
    bucket(45, Some(Segment::Quarter), Connector::To),
    bucket(50, Some(Segment::MinuteTen), Connector::To),
    bucket(55, Some(Segment::MinuteFive), Connector::To),
];

/// 下标 `h - 1` 对应显示小时 `h`
const HOUR_SEGMENTS: [Segment; 12] = [
    Segment::One,
    Segment::Two,
    Segment::Three,
    Segment::Four,
    Segment::Five,
    Segment::Six,
    Segment::Seven,
    Segment::Eight,
    Segment::Nine,
    Segment::Ten,
    Segment::Eleven,
    Segment::Twelve,
];

fn minute_bucket(minute: u8) -> &'static MinuteBucket {
    // MINUTE_BUCKETS[0].start is 0, so the partition point is never 0.
    let idx = MINUTE_BUCKETS.partition_point(|b| b.start <= minute);
    &MINUTE_BUCKETS[idx - 1]
}

/// 表盘显示的小时，1..=12；"TO" 读数显示下一小时
fn displayed_hour(hour: u8, to_next: bool) -> u8 {
    let h = (hour % 12 + u8::from(to_next)) % 12;
    if h == 0 { 12 } else { h }
}

fn hour_segment(displayed: u8) -> Segment {
    HOUR_SEGMENTS[(displayed as usize - 1) % HOUR_SEGMENTS.len()]
}

/// 文字时钟引擎，无状态，每次调用相互独立
#[derive(Debug, Clone, Copy, Default)]
pub struct WordClockEngine;

impl WordClockEngine {
    /// 创建引擎
    pub const fn new() -> Self {
        Self
    }

    /// 校验时分并计算高亮集合
    pub fn compute_highlights(
        &self,
        hour: u8,
        minute: u8,
    ) -> Result<HighlightSet, InvalidTimeError> {
        let reading = ClockReading::new(hour, minute)?;
        Ok(self.highlights_for(reading))
    }

    /// 按已校验的读数计算高亮集合
    pub fn highlights_for(&self, reading: ClockReading) -> HighlightSet {
        let bucket = minute_bucket(reading.minute());
        let mut set = HighlightSet::new();

        if let Some(phrase) = bucket.phrase {
            set.push(phrase);
        }
        match bucket.connector {
            Connector::Past => {
                set.push(Segment::Past);
            }
            Connector::To => {
                set.push(Segment::To);
            }
            Connector::OClock => {}
        }

        let shown = displayed_hour(reading.hour(), bucket.connector == Connector::To);
        set.push(hour_segment(shown));

        if bucket.connector == Connector::OClock {
            set.push(Segment::OClock);
        }

        trace!("{} -> {}", reading, set.phrase());
        set
    }
}
