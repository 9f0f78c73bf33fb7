//! Payline table: fixed paths of one cell per reel column.
//!
//! Coordinates are (row, column), read left to right. The 20 standard lines
//! cover the straights, V, W and zigzag shapes of a 3×5 window and are
//! shared by every session.

use crate::types::Cell;
use serde::{Deserialize, Serialize};

pub const LINE_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payline {
    cells: [Cell; LINE_LENGTH],
}

impl Payline {
    pub const fn new(cells: [Cell; LINE_LENGTH]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; LINE_LENGTH] {
        &self.cells
    }

    /// True if the line visits every column once, left to right, within
    /// `visible_rows`.
    pub fn fits(&self, visible_rows: usize) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(i, &(row, col))| col == i && row < visible_rows)
    }
}

const fn line(rows: [usize; LINE_LENGTH]) -> Payline {
    Payline::new([
        (rows[0], 0),
        (rows[1], 1),
        (rows[2], 2),
        (rows[3], 3),
        (rows[4], 4),
    ])
}

/// The standard 20 lines, in payout-evaluation order.
pub const STANDARD_PAYLINES: [Payline; 20] = [
    line([0, 0, 0, 0, 0]),
    line([1, 1, 1, 1, 1]),
    line([2, 2, 2, 2, 2]),
    line([0, 1, 2, 1, 0]),
    line([2, 1, 0, 1, 2]),
    line([1, 0, 1, 0, 1]),
    line([1, 2, 1, 2, 1]),
    line([0, 0, 1, 2, 2]),
    line([2, 2, 1, 0, 0]),
    line([1, 2, 1, 0, 1]),
    line([1, 0, 1, 2, 1]),
    line([0, 1, 1, 1, 0]),
    line([2, 1, 1, 1, 2]),
    line([0, 1, 0, 1, 0]),
    line([2, 1, 2, 1, 2]),
    line([1, 1, 0, 1, 1]),
    line([1, 1, 2, 1, 1]),
    line([0, 0, 2, 0, 0]),
    line([2, 2, 0, 2, 2]),
    line([0, 2, 2, 2, 0]),
];

pub fn standard_paylines() -> Vec<Payline> {
    STANDARD_PAYLINES.to_vec()
}
