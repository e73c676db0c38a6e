//! Score sheets: the fixed board geometry and per-player boards.
//!
//! The geometry (row ranges, column links, bonus columns) lives in
//! `geometry` as const tables. `Board` evaluates placement legality and
//! scoring against those tables and never re-derives topology itself.

pub mod sheet;
pub mod geometry;

pub use sheet::{Board, Placements};
pub use geometry::{
    max_score, CellKind, CellRule, Color, DiceSelection, Diagonal, BOARD_SLOTS, CELLS, CELL_RULES,
    DIAGONALS, DIE_FACES, FIELDS, MAX_OUTCOME, MISS_SLOT, ROWS,
};
