use alloc::string::String;

use crate::types::{CellCoordinate, Segment};

/// 单次最多点亮的片段数：IT IS、分钟、连接词、小时
pub const MAX_SEGMENTS: usize = 4;

/// 一次读数选中的片段，按阅读顺序排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSet {
    segments: heapless::Vec<Segment, MAX_SEGMENTS>,
}

impl HighlightSet {
    /// 只含 IT IS 的集合，任何时刻都会点亮
    pub fn new() -> Self {
        let mut segments = heapless::Vec::new();
        let _ = segments.push(Segment::ItIs);
        Self { segments }
    }

    /// 追加片段，重复片段忽略；集合已满时返回 `false`
    pub fn push(&mut self, segment: Segment) -> bool {
        if self.segments.contains(&segment) {
            return true;
        }
        self.segments.push(segment).is_ok()
    }

    /// 获取片段列表
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// 是否包含某片段
    pub fn contains_segment(&self, segment: Segment) -> bool {
        self.segments.contains(&segment)
    }

    /// 该格子是否点亮
    pub fn contains(&self, cell: CellCoordinate) -> bool {
        self.segments.iter().any(|s| s.contains(cell))
    }

    /// 所有片段格子的并集
    pub fn cells(&self) -> impl Iterator<Item = CellCoordinate> + '_ {
        self.segments.iter().flat_map(|s| s.cells().iter().copied())
    }

    /// 点亮格子拼出的句子，如 `IT IS TEN TO SIX`
    pub fn phrase(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(segment.label());
        }
        out
    }
}

impl Default for HighlightSet {
    fn default() -> Self {
        Self::new()
    }
}
