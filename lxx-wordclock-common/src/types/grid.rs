//! 字母网格与短语片段
//!
//! The grid is the physical layout printed on the face; segments are fixed
//! runs of cells that spell one phrase fragment. Both are static tables.

pub const GRID_ROWS: usize = 9;
pub const GRID_COLS: usize = 13;

const LETTERS: [[char; GRID_COLS]; GRID_ROWS] = [
    ['I', 'T', 'R', 'I', 'S', 'U', 'H', 'A', 'L', 'F', 'T', 'E', 'N'],
    ['Q', 'U', 'A', 'R', 'T', 'E', 'R', 'T', 'W', 'E', 'N', 'T', 'Y'],
    ['F', 'I', 'V', 'E', 'Q', 'M', 'I', 'N', 'U', 'T', 'E', 'S', 'T'],
    ['P', 'A', 'S', 'T', 'M', 'T', 'O', 'S', 'A', 'M', 'O', 'P', 'M'],
    ['O', 'N', 'E', 'N', 'T', 'W', 'O', 'Z', 'T', 'H', 'R', 'E', 'E'],
    ['F', 'O', 'U', 'R', 'F', 'I', 'V', 'E', 'S', 'E', 'V', 'E', 'N'],
    ['S', 'I', 'X', 'E', 'I', 'G', 'H', 'T', 'Y', 'N', 'I', 'N', 'E'],
    ['T', 'E', 'N', 'E', 'L', 'E', 'V', 'E', 'N', 'P', 'H', 'I', 'L'],
    ['T', 'W', 'E', 'L', 'V', 'E', 'L', 'O', 'C', 'L', 'O', 'C', 'K'],
];

/// 网格坐标（行, 列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellCoordinate {
    pub row: u8,
    pub col: u8,
}

impl CellCoordinate {
    /// 不做检查的构造，供静态片段表使用
    pub const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 带边界检查的构造，越界返回 `None`
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < GRID_ROWS && (col as usize) < GRID_COLS {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 是否在网格内
    pub fn in_bounds(&self) -> bool {
        (self.row as usize) < GRID_ROWS && (self.col as usize) < GRID_COLS
    }
}

/// 表盘上固定的 9x13 字母矩阵
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterGrid {
    letters: &'static [[char; GRID_COLS]; GRID_ROWS],
}

impl LetterGrid {
    /// 获取表盘字母网格
    pub const fn new() -> Self {
        Self { letters: &LETTERS }
    }

    /// 行数
    pub const fn rows(&self) -> usize {
        GRID_ROWS
    }

    /// 列数
    pub const fn cols(&self) -> usize {
        GRID_COLS
    }

    /// 获取格子上的字母
    pub fn letter(&self, cell: CellCoordinate) -> Option<char> {
        self.letters
            .get(cell.row as usize)
            .and_then(|row| row.get(cell.col as usize))
            .copied()
    }

    /// 按行优先顺序遍历每个格子及其字母
    pub fn cells(&self) -> impl Iterator<Item = (CellCoordinate, char)> + '_ {
        self.letters.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &ch)| (CellCoordinate::at(r as u8, c as u8), ch))
        })
    }
}

impl Default for LetterGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// 表盘上的短语片段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    ItIs,
    MinuteFive,
    MinuteTen,
    Quarter,
    Twenty,
    TwentyFive,
    Half,
    Past,
    To,
    OClock,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
}

const fn run<const N: usize>(row: u8, start: u8) -> [CellCoordinate; N] {
    let mut cells = [CellCoordinate::at(row, start); N];
    let mut i = 0;
    while i < N {
        cells[i] = CellCoordinate::at(row, start + i as u8);
        i += 1;
    }
    cells
}

const IT_IS: [CellCoordinate; 4] = [
    CellCoordinate::at(0, 0),
    CellCoordinate::at(0, 1),
    CellCoordinate::at(0, 3),
    CellCoordinate::at(0, 4),
];
const HALF: [CellCoordinate; 4] = run(0, 6);
const MINUTE_TEN: [CellCoordinate; 3] = run(0, 10);
const QUARTER: [CellCoordinate; 7] = run(1, 0);
const TWENTY: [CellCoordinate; 6] = run(1, 7);
const MINUTE_FIVE: [CellCoordinate; 4] = run(2, 0);
const TWENTY_FIVE: [CellCoordinate; 10] = [
    TWENTY[0],
    TWENTY[1],
    TWENTY[2],
    TWENTY[3],
    TWENTY[4],
    TWENTY[5],
    MINUTE_FIVE[0],
    MINUTE_FIVE[1],
    MINUTE_FIVE[2],
    MINUTE_FIVE[3],
];
const PAST: [CellCoordinate; 4] = run(3, 0);
const TO: [CellCoordinate; 2] = run(3, 5);
const ONE: [CellCoordinate; 3] = run(4, 0);
const TWO: [CellCoordinate; 3] = run(4, 4);
const THREE: [CellCoordinate; 5] = run(4, 8);
const FOUR: [CellCoordinate; 4] = run(5, 0);
const FIVE: [CellCoordinate; 4] = run(5, 4);
const SEVEN: [CellCoordinate; 5] = run(5, 8);
const SIX: [CellCoordinate; 3] = run(6, 0);
const EIGHT: [CellCoordinate; 5] = run(6, 3);
const NINE: [CellCoordinate; 4] = run(6, 9);
const TEN: [CellCoordinate; 3] = run(7, 0);
const ELEVEN: [CellCoordinate; 6] = run(7, 3);
const TWELVE: [CellCoordinate; 6] = run(8, 0);
const O_CLOCK: [CellCoordinate; 6] = run(8, 7);

impl Segment {
    pub const ALL: [Segment; 22] = [
        Segment::ItIs,
        Segment::MinuteFive,
        Segment::MinuteTen,
        Segment::Quarter,
        Segment::Twenty,
        Segment::TwentyFive,
        Segment::Half,
        Segment::Past,
        Segment::To,
        Segment::OClock,
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

    /// 片段的格子，按阅读顺序
    pub const fn cells(self) -> &'static [CellCoordinate] {
        match self {
            Segment::ItIs => &IT_IS,
            Segment::MinuteFive => &MINUTE_FIVE,
            Segment::MinuteTen => &MINUTE_TEN,
            Segment::Quarter => &QUARTER,
            Segment::Twenty => &TWENTY,
            Segment::TwentyFive => &TWENTY_FIVE,
            Segment::Half => &HALF,
            Segment::Past => &PAST,
            Segment::To => &TO,
            Segment::OClock => &O_CLOCK,
            Segment::One => &ONE,
            Segment::Two => &TWO,
            Segment::Three => &THREE,
            Segment::Four => &FOUR,
            Segment::Five => &FIVE,
            Segment::Six => &SIX,
            Segment::Seven => &SEVEN,
            Segment::Eight => &EIGHT,
            Segment::Nine => &NINE,
            Segment::Ten => &TEN,
            Segment::Eleven => &ELEVEN,
            Segment::Twelve => &TWELVE,
        }
    }

    /// 片段拼出的文字
    pub const fn label(self) -> &'static str {
        match self {
            Segment::ItIs => "IT IS",
            Segment::MinuteFive => "FIVE",
            Segment::MinuteTen => "TEN",
            Segment::Quarter => "QUARTER",
            Segment::Twenty => "TWENTY",
            Segment::TwentyFive => "TWENTY FIVE",
            Segment::Half => "HALF",
            Segment::Past => "PAST",
            Segment::To => "TO",
            Segment::OClock => "O'CLOCK",
            Segment::One => "ONE",
            Segment::Two => "TWO",
            Segment::Three => "THREE",
            Segment::Four => "FOUR",
            Segment::Five => "FIVE",
            Segment::Six => "SIX",
            Segment::Seven => "SEVEN",
            Segment::Eight => "EIGHT",
            Segment::Nine => "NINE",
            Segment::Ten => "TEN",
            Segment::Eleven => "ELEVEN",
            Segment::Twelve => "TWELVE",
        }
    }

    /// 片段是否包含该格子
    pub fn contains(self, cell: CellCoordinate) -> bool {
        self.cells().contains(&cell)
    }
}
