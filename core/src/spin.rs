//! Spin sampler: reads a contiguous, wrapping window from every reel.

use crate::{
    paylines::{Payline, LINE_LENGTH},
    reels::Reel,
    rng::SlotRng,
    symbols::SymbolId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const VISIBLE_ROWS: usize = 3;

/// The visible window after a spin, indexed `[row][column]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<SymbolId>>,
}

impl Grid {
    /// Build a grid from explicit rows. Returns None for an empty or ragged
    /// matrix.
    pub fn from_rows(rows: Vec<Vec<SymbolId>>) -> Option<Self> {
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Self { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<SymbolId> {
        self.rows.get(row)?.get(col).copied()
    }

    pub fn rows(&self) -> &[Vec<SymbolId>] {
        &self.rows
    }

    /// The symbols under `payline`, left to right. None if the line leaves
    /// the grid.
    pub fn line(&self, payline: &Payline) -> Option<[SymbolId; LINE_LENGTH]> {
        let mut out = [SymbolId::Wild; LINE_LENGTH];
        for (slot, &(row, col)) in out.iter_mut().zip(payline.cells()) {
            *slot = self.get(row, col)?;
        }
        Some(out)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|s| format!("{:<6}", s.code())).collect();
            writeln!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}

/// One draw: the visible grid and the strip offset each reel stopped at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinDraw {
    pub grid:  Grid,
    pub stops: Vec<usize>,
}

/// For each reel pick a uniform start offset and read `visible_rows`
/// consecutive symbols, wrapping past the end of the strip.
pub fn sample_grid(reels: &[Reel], visible_rows: usize, rng: &mut SlotRng) -> SpinDraw {
    let mut rows = vec![Vec::with_capacity(reels.len()); visible_rows];
    let mut stops = Vec::with_capacity(reels.len());

    for reel in reels {
        let start = rng.index_below(reel.len());
        stops.push(start);
        for (i, row) in rows.iter_mut().enumerate() {
            row.push(reel.at(start + i));
        }
    }

    SpinDraw {
        grid: Grid { rows },
        stops,
    }
}
