//! A single player's score sheet.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::geometry::{Color, DiceSelection, BOARD_SLOTS, CELLS, CELL_RULES, DIAGONALS, FIELDS, MISS_SLOT};
use crate::core::RowRule;

/// Cells a roll may be written into, inline up to one row's worth.
pub type Placements = SmallVec<[usize; FIELDS]>;

/// One player's board: 27 score cells followed by the miss slot.
///
/// A score cell is 0 until written and never changes afterwards. The miss
/// slot starts at 0 and only decreases.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    slots: [i32; BOARD_SLOTS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [0; BOARD_SLOTS],
        }
    }

    /// A board with the given contents, for analysis and tests.
    #[must_use]
    pub fn from_slots(slots: [i32; BOARD_SLOTS]) -> Self {
        Self { slots }
    }

    /// All slots, miss slot last.
    #[must_use]
    pub fn slots(&self) -> &[i32] {
        &self.slots
    }

    /// Value written in a cell (0 if empty).
    #[must_use]
    pub fn value(&self, cell: usize) -> i32 {
        self.slots[cell]
    }

    /// Whether a score cell has been written.
    #[must_use]
    pub fn is_filled(&self, cell: usize) -> bool {
        self.slots[cell] > 0
    }

    /// Accumulated miss penalty (0 or negative).
    #[must_use]
    pub fn miss_total(&self) -> i32 {
        self.slots[MISS_SLOT]
    }

    /// The cells of one color row.
    #[must_use]
    pub fn row(&self, color: Color) -> &[i32] {
        &self.slots[color.cells()]
    }

    /// Whether `outcome` may be written into `cell` this turn.
    #[must_use]
    pub fn can_place(&self, cell: usize, dice: DiceSelection, outcome: u8, rule: RowRule) -> bool {
        if cell >= CELLS || outcome == 0 {
            return false;
        }
        let cell_rule = &CELL_RULES[cell];
        if !dice.contains(cell_rule.color) || self.is_filled(cell) {
            return false;
        }

        let value = i32::from(outcome);
        let row = self.row(cell_rule.color);
        let field = cell_rule.field(cell);

        let left_ok = row[..field].iter().all(|&v| match rule {
            RowRule::Contiguous => v != 0 && v < value,
            RowRule::Gapped => v < value,
        });
        let right_ok = row[field + 1..].iter().all(|&v| v == 0 || v > value);
        let column_ok = cell_rule.linked.iter().all(|&l| self.slots[l] != value);

        left_ok && right_ok && column_ok
    }

    /// Every cell `outcome` may be written into, ascending.
    #[must_use]
    pub fn placements(&self, dice: DiceSelection, outcome: u8, rule: RowRule) -> Placements {
        dice.colors()
            .flat_map(|color| color.cells())
            .filter(|&cell| self.can_place(cell, dice, outcome, rule))
            .collect()
    }

    /// Write a value into an empty cell.
    pub fn place(&mut self, cell: usize, outcome: u8) {
        debug_assert!(cell < CELLS && !self.is_filled(cell), "cell {} already written", cell);
        self.slots[cell] = i32::from(outcome);
    }

    /// Add a (negative) penalty to the miss slot.
    pub fn add_miss(&mut self, points: i32) {
        debug_assert!(points < 0);
        self.slots[MISS_SLOT] += points;
    }

    /// Row payout: the last field's value for a complete row, otherwise
    /// the number of filled fields.
    #[must_use]
    pub fn row_score(&self, color: Color) -> i32 {
        let row = self.row(color);
        let filled = row.iter().filter(|&&v| v > 0).count();
        if filled == FIELDS {
            row[FIELDS - 1]
        } else {
            filled as i32
        }
    }

    /// Sum of the bonus columns whose three cells are all filled.
    #[must_use]
    pub fn bonus_score(&self) -> i32 {
        DIAGONALS
            .iter()
            .filter(|d| d.cells.iter().all(|&c| self.is_filled(c)))
            .map(|d| self.slots[d.reward])
            .sum()
    }

    /// Final score: rows, bonus columns and the miss penalty.
    #[must_use]
    pub fn score(&self) -> i32 {
        let rows: i32 = Color::ROW_ORDER.iter().map(|&c| self.row_score(c)).sum();
        rows + self.bonus_score() + self.miss_total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: DiceSelection = DiceSelection::ALL[6];

    fn board_with(cells: &[(usize, i32)]) -> Board {
        let mut slots = [0; BOARD_SLOTS];
        for &(cell, v) in cells {
            slots[cell] = v;
        }
        Board::from_slots(slots)
    }

    #[test]
    fn test_empty_board_contiguous() {
        let board = Board::new();

        // Only the first field of each selected row is reachable.
        assert_eq!(board.placements(ALL, 5, RowRule::Contiguous).as_slice(), &[0, 9, 18]);

        let orange = DiceSelection::of(&[Color::Orange]);
        assert_eq!(board.placements(orange, 5, RowRule::Contiguous).as_slice(), &[0]);
    }

    #[test]
    fn test_empty_board_gapped() {
        let board = Board::new();
        let orange = DiceSelection::of(&[Color::Orange]);

        let cells = board.placements(orange, 5, RowRule::Gapped);
        assert_eq!(cells.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_row_ordering() {
        let board = board_with(&[(0, 3), (1, 6)]);
        let orange = DiceSelection::of(&[Color::Orange]);

        // Contiguous: the next field after the filled prefix.
        assert_eq!(board.placements(orange, 7, RowRule::Contiguous).as_slice(), &[2]);
        assert!(board.placements(orange, 6, RowRule::Contiguous).is_empty());
        assert!(board.placements(orange, 2, RowRule::Contiguous).is_empty());

        // Gapped: any empty field right of the larger values.
        assert_eq!(
            board.placements(orange, 7, RowRule::Gapped).as_slice(),
            &[2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_gapped_value_must_fit_between_neighbours() {
        let board = board_with(&[(0, 2), (4, 9)]);
        let orange = DiceSelection::of(&[Color::Orange]);

        assert_eq!(board.placements(orange, 5, RowRule::Gapped).as_slice(), &[1, 2, 3]);
        assert_eq!(board.placements(orange, 12, RowRule::Gapped).as_slice(), &[5, 6, 7, 8]);
        assert!(board.placements(orange, 9, RowRule::Gapped).is_empty());
        assert!(board.placements(orange, 1, RowRule::Gapped).is_empty());
    }

    #[test]
    fn test_column_uniqueness() {
        // 10 and 20 share a column with 0.
        let board = board_with(&[(10, 4)]);
        let orange = DiceSelection::of(&[Color::Orange]);

        assert!(!board.can_place(0, orange, 4, RowRule::Contiguous));
        assert!(board.can_place(0, orange, 5, RowRule::Contiguous));

        // 13 pairs only with 22.
        let board = board_with(&[(22, 8)]);
        let yellow = DiceSelection::of(&[Color::Yellow]);
        assert!(!board.can_place(13, yellow, 8, RowRule::Gapped));
        assert!(board.can_place(12, yellow, 8, RowRule::Gapped));
    }

    #[test]
    fn test_corners_are_unconstrained() {
        let board = board_with(&[(7, 10), (17, 11)]);
        let orange = DiceSelection::of(&[Color::Orange]);

        assert!(board.can_place(8, orange, 11, RowRule::Gapped));
    }

    #[test]
    fn test_wrong_color_and_filled_cells() {
        let board = board_with(&[(0, 3)]);
        let purple = DiceSelection::of(&[Color::Purple]);
        let orange = DiceSelection::of(&[Color::Orange]);

        assert!(!board.can_place(0, purple, 5, RowRule::Gapped));
        assert!(!board.can_place(0, orange, 5, RowRule::Gapped));
        assert!(!board.can_place(MISS_SLOT, ALL, 5, RowRule::Gapped));
        assert!(!board.can_place(1, orange, 0, RowRule::Gapped));
    }

    #[test]
    fn test_full_row_pays_last_field() {
        let values = [2, 5, 7, 9, 11, 13, 14, 16, 18];
        let cells: Vec<_> = values.iter().enumerate().map(|(i, &v)| (i, v)).collect();
        let board = board_with(&cells);

        assert_eq!(board.row_score(Color::Orange), 18);
        assert_eq!(board.row_score(Color::Yellow), 0);
        assert_eq!(board.score(), 18);
    }

    #[test]
    fn test_partial_row_pays_count() {
        let board = board_with(&[(9, 1), (11, 4), (17, 12)]);

        assert_eq!(board.row_score(Color::Yellow), 3);
    }

    #[test]
    fn test_bonus_columns() {
        // Column 0/10/20 pays cell 20, column 5/15/25 pays cell 15.
        let board = board_with(&[(0, 1), (10, 2), (20, 3), (5, 7), (15, 8), (25, 9)]);

        assert_eq!(board.bonus_score(), 3 + 8);
        // Two fields in each row plus bonuses.
        assert_eq!(board.score(), 2 + 2 + 2 + 3 + 8);

        // An incomplete column pays nothing.
        let board = board_with(&[(1, 4), (11, 5)]);
        assert_eq!(board.bonus_score(), 0);
    }

    #[test]
    fn test_misses() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.add_miss(-5);
        }

        assert_eq!(board.miss_total(), -20);
        assert_eq!(board.score(), -20);
    }

    #[test]
    fn test_place_writes_value() {
        let mut board = Board::new();
        board.place(13, 9);

        assert!(board.is_filled(13));
        assert_eq!(board.value(13), 9);
        assert_eq!(board.slots().len(), BOARD_SLOTS);
    }
}
