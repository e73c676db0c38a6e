//! Fixed board geometry.
//!
//! The score sheet has three staggered color rows of nine fields:
//!
//! ```text
//!         | 0| 1| 2|  | 3| 4| 5| 6| 7| 8|      Orange
//!      | 9|10|11|12|13|  |14|15|16|17|         Yellow
//!   |18|19|20|21|  |22|23|24|25|26|            Purple
//! ```
//!
//! Because the rows are shifted against each other, fields line up in
//! columns that run across rows. No number may appear twice in a column.
//! The five full-height columns also pay a bonus when completely filled.
//!
//! The tables below are the physical sheet written out by hand. They are
//! data, not derived: changing the sheet means changing the tables.

use serde::{Deserialize, Serialize};

/// Number of color rows.
pub const ROWS: usize = 3;

/// Fields per color row.
pub const FIELDS: usize = 9;

/// Score cells on a board (the miss slot comes after them).
pub const CELLS: usize = ROWS * FIELDS;

/// Index of the miss-penalty slot.
pub const MISS_SLOT: usize = CELLS;

/// Total slots on a board, miss slot included.
pub const BOARD_SLOTS: usize = CELLS + 1;

/// Largest value a single die shows.
pub const DIE_FACES: u8 = 6;

/// Largest sum of all dice.
pub const MAX_OUTCOME: u8 = DIE_FACES * ROWS as u8;

/// A die color, which is also a row color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Orange,
    Yellow,
    Purple,
}

impl Color {
    /// Colors in row order (top to bottom).
    pub const ROW_ORDER: [Color; ROWS] = [Color::Orange, Color::Yellow, Color::Purple];

    /// The die flag for this color in a dice selection.
    #[must_use]
    pub const fn flag(self) -> u8 {
        match self {
            Color::Orange => 1,
            Color::Purple => 2,
            Color::Yellow => 4,
        }
    }

    /// The board row this color fills.
    #[must_use]
    pub const fn row(self) -> usize {
        match self {
            Color::Orange => 0,
            Color::Yellow => 1,
            Color::Purple => 2,
        }
    }

    /// Cell index range of this color's row.
    #[must_use]
    pub fn cells(self) -> std::ops::Range<usize> {
        let start = self.row() * FIELDS;
        start..start + FIELDS
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Orange => "Orange",
            Color::Yellow => "Yellow",
            Color::Purple => "Purple",
        };
        write!(f, "{}", name)
    }
}

/// A non-empty set of dice chosen for a roll (bitmask over `Color::flag`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceSelection(u8);

impl DiceSelection {
    /// No dice selected yet.
    pub const NONE: DiceSelection = DiceSelection(0);

    /// Every valid selection, in ascending bitmask order.
    pub const ALL: [DiceSelection; 7] = [
        DiceSelection(1),
        DiceSelection(2),
        DiceSelection(3),
        DiceSelection(4),
        DiceSelection(5),
        DiceSelection(6),
        DiceSelection(7),
    ];

    /// Parse a bitmask; `None` unless it names 1-3 dice.
    #[must_use]
    pub fn from_mask(mask: u64) -> Option<Self> {
        (1..=7).contains(&mask).then_some(DiceSelection(mask as u8))
    }

    /// Selection of exactly the given colors.
    #[must_use]
    pub fn of(colors: &[Color]) -> Self {
        DiceSelection(colors.iter().fold(0, |m, c| m | c.flag()))
    }

    /// The raw bitmask.
    #[must_use]
    pub const fn mask(self) -> u8 {
        self.0
    }

    /// Whether the die of this color is selected.
    #[must_use]
    pub const fn contains(self, color: Color) -> bool {
        self.0 & color.flag() != 0
    }

    /// Number of dice selected.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Selected colors in row order.
    pub fn colors(self) -> impl Iterator<Item = Color> {
        Color::ROW_ORDER.into_iter().filter(move |&c| self.contains(c))
    }
}

impl std::fmt::Display for DiceSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.colors().map(|c| c.to_string()).collect();
        write!(f, "{}", names.join(", "))
    }
}

/// How many other rows a cell shares its column with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Alone in its column.
    Corner,
    /// Shares its column with one cell.
    Edge,
    /// Shares its column with a cell in each other row.
    Interior,
}

/// Static placement rule for one score cell.
#[derive(Clone, Copy, Debug)]
pub struct CellRule {
    pub color: Color,
    pub kind: CellKind,
    /// Cells in the same column, which must not hold the same value.
    pub linked: &'static [usize],
}

impl CellRule {
    const fn new(color: Color, kind: CellKind, linked: &'static [usize]) -> Self {
        Self {
            color,
            kind,
            linked,
        }
    }

    /// Position of the cell within its row (0 = leftmost).
    #[must_use]
    pub fn field(&self, cell: usize) -> usize {
        cell - self.color.row() * FIELDS
    }
}

use CellKind::{Corner, Edge, Interior};
use Color::{Orange, Purple, Yellow};

/// Placement rules, indexed by cell.
pub const CELL_RULES: [CellRule; CELLS] = [
    // Orange
    CellRule::new(Orange, Interior, &[10, 20]),
    CellRule::new(Orange, Interior, &[11, 21]),
    CellRule::new(Orange, Edge, &[12]),
    CellRule::new(Orange, Edge, &[23]),
    CellRule::new(Orange, Interior, &[14, 24]),
    CellRule::new(Orange, Interior, &[15, 25]),
    CellRule::new(Orange, Interior, &[16, 26]),
    CellRule::new(Orange, Edge, &[17]),
    CellRule::new(Orange, Corner, &[]),
    // Yellow
    CellRule::new(Yellow, Edge, &[19]),
    CellRule::new(Yellow, Interior, &[0, 20]),
    CellRule::new(Yellow, Interior, &[1, 21]),
    CellRule::new(Yellow, Edge, &[2]),
    CellRule::new(Yellow, Edge, &[22]),
    CellRule::new(Yellow, Interior, &[4, 24]),
    CellRule::new(Yellow, Interior, &[5, 25]),
    CellRule::new(Yellow, Interior, &[6, 26]),
    CellRule::new(Yellow, Edge, &[7]),
    // Purple
    CellRule::new(Purple, Corner, &[]),
    CellRule::new(Purple, Edge, &[9]),
    CellRule::new(Purple, Interior, &[0, 10]),
    CellRule::new(Purple, Interior, &[1, 11]),
    CellRule::new(Purple, Edge, &[13]),
    CellRule::new(Purple, Edge, &[3]),
    CellRule::new(Purple, Interior, &[4, 14]),
    CellRule::new(Purple, Interior, &[5, 15]),
    CellRule::new(Purple, Interior, &[6, 16]),
];

/// A full-height column paying a bonus once all three cells are filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diagonal {
    /// One cell per row, top to bottom.
    pub cells: [usize; ROWS],
    /// The cell whose value is paid out.
    pub reward: usize,
}

/// The bonus columns. The paid cell is marked on the physical sheet and
/// is not the same row for every column.
pub const DIAGONALS: [Diagonal; 5] = [
    Diagonal { cells: [0, 10, 20], reward: 20 },
    Diagonal { cells: [1, 11, 21], reward: 1 },
    Diagonal { cells: [4, 14, 24], reward: 4 },
    Diagonal { cells: [5, 15, 25], reward: 15 },
    Diagonal { cells: [6, 16, 26], reward: 26 },
];

/// Best possible total: every row complete with the maximum in its last
/// field, every bonus column paying the largest value its field can hold
/// in a strictly increasing row.
#[must_use]
pub fn max_score() -> i32 {
    let rows = ROWS as i32 * i32::from(MAX_OUTCOME);
    let bonuses: i32 = DIAGONALS
        .iter()
        .map(|d| {
            let field = CELL_RULES[d.reward].field(d.reward);
            i32::from(MAX_OUTCOME) - (FIELDS - 1 - field) as i32
        })
        .sum();
    rows + bonuses
}
