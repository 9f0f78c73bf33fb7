//! Bet ladder and wager arithmetic.
//!
//! Legal wagers are the index-aligned (total, per-line) pairs of the ladder.
//! The wager tracks the ladder index directly; the total bet is always
//! recomputed as `bet_per_line × active_paylines` and never read back to
//! find the index.

use crate::{
    error::{SlotError, SlotResult},
    money::Cents,
};
use serde::{Deserialize, Serialize};

/// Standard ladder, in cents. Index-aligned with `STANDARD_PER_LINE`.
pub const STANDARD_TOTALS: [i64; 11] = [20, 40, 60, 80, 100, 200, 500, 1_000, 2_000, 5_000, 10_000];
pub const STANDARD_PER_LINE: [i64; 11] = [1, 2, 3, 4, 5, 10, 25, 50, 100, 250, 500];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetDenomination {
    pub total:    Cents,
    pub per_line: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BetLadder {
    levels: Vec<BetDenomination>,
}

impl BetLadder {
    pub fn standard() -> Self {
        let levels = STANDARD_TOTALS
            .iter()
            .zip(STANDARD_PER_LINE.iter())
            .map(|(&total, &per_line)| BetDenomination {
                total:    Cents(total),
                per_line: Cents(per_line),
            })
            .collect();
        Self { levels }
    }

    /// Pair two index-aligned columns. They must have the same length and
    /// both must be strictly increasing and positive.
    pub fn from_columns(totals: &[Cents], per_line: &[Cents]) -> SlotResult<Self> {
        if totals.len() != per_line.len() {
            return Err(SlotError::Config(format!(
                "bet ladder columns differ in length: {} totals, {} per-line",
                totals.len(),
                per_line.len()
            )));
        }
        let levels: Vec<BetDenomination> = totals
            .iter()
            .zip(per_line)
            .map(|(&total, &per_line)| BetDenomination { total, per_line })
            .collect();

        if levels.is_empty() {
            return Err(SlotError::Config("bet ladder is empty".into()));
        }
        if levels.iter().any(|d| !d.total.is_positive() || !d.per_line.is_positive()) {
            return Err(SlotError::Config("bet ladder amounts must be > 0".into()));
        }
        let increasing = levels
            .windows(2)
            .all(|w| w[0].total < w[1].total && w[0].per_line < w[1].per_line);
        if !increasing {
            return Err(SlotError::Config("bet ladder must be strictly increasing".into()));
        }
        Ok(Self { levels })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, level: usize) -> Option<BetDenomination> {
        self.levels.get(level).copied()
    }

    pub fn levels(&self) -> &[BetDenomination] {
        &self.levels
    }

    /// Highest valid level index.
    pub fn top(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    pub fn level_of_total(&self, total: Cents) -> Option<usize> {
        self.levels.iter().position(|d| d.total == total)
    }
}

/// Current bet selection. Invariant: `total_bet == bet_per_line × active_paylines`.
/// Decoding goes through `WagerRecord`, so a decoded wager holds it too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WagerRecord")]
pub struct Wager {
    level:           usize,
    bet_per_line:    Cents,
    active_paylines: usize,
    total_bet:       Cents,
}

impl Wager {
    /// Level and line count are clamped into range.
    pub fn new(ladder: &BetLadder, level: usize, active_paylines: usize, max_paylines: usize) -> Self {
        let level = level.min(ladder.top());
        let mut wager = Self {
            level,
            bet_per_line: ladder.get(level).map_or(Cents::ZERO, |d| d.per_line),
            active_paylines: active_paylines.clamp(1, max_paylines.max(1)),
            total_bet: Cents::ZERO,
        };
        wager.recompute();
        wager
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn bet_per_line(&self) -> Cents {
        self.bet_per_line
    }

    pub fn active_paylines(&self) -> usize {
        self.active_paylines
    }

    pub fn total_bet(&self) -> Cents {
        self.total_bet
    }

    /// Select the ladder level whose total is exactly `amount`.
    pub fn set_total_bet(&mut self, ladder: &BetLadder, amount: Cents) -> SlotResult<()> {
        let level = ladder
            .level_of_total(amount)
            .ok_or(SlotError::InvalidBetAmount { amount })?;
        self.select_level(ladder, level);
        Ok(())
    }

    /// Step one level up. Returns false (no-op) at the top of the ladder.
    pub fn increase_total_bet(&mut self, ladder: &BetLadder) -> bool {
        if self.level >= ladder.top() {
            return false;
        }
        self.select_level(ladder, self.level + 1);
        true
    }

    /// Step one level down. Returns false (no-op) at the bottom.
    pub fn decrease_total_bet(&mut self, ladder: &BetLadder) -> bool {
        if self.level == 0 {
            return false;
        }
        self.select_level(ladder, self.level - 1);
        true
    }

    pub fn set_active_paylines(&mut self, count: usize, max_paylines: usize) -> SlotResult<()> {
        if !(1..=max_paylines).contains(&count) {
            return Err(SlotError::InvalidPaylineCount {
                count,
                max: max_paylines,
            });
        }
        self.active_paylines = count;
        self.recompute();
        Ok(())
    }

    pub fn increase_paylines(&mut self, max_paylines: usize) -> bool {
        if self.active_paylines >= max_paylines {
            return false;
        }
        self.active_paylines += 1;
        self.recompute();
        true
    }

    pub fn decrease_paylines(&mut self) -> bool {
        if self.active_paylines <= 1 {
            return false;
        }
        self.active_paylines -= 1;
        self.recompute();
        true
    }

    fn select_level(&mut self, ladder: &BetLadder, level: usize) {
        if let Some(denomination) = ladder.get(level) {
            self.level = level;
            self.bet_per_line = denomination.per_line;
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.total_bet = self.bet_per_line.times(self.active_paylines as u64);
    }
}

/// Wire form of a `Wager`, checked before it becomes one.
#[derive(Debug, Clone, Copy, Deserialize)]
struct WagerRecord {
    level:           usize,
    bet_per_line:    Cents,
    active_paylines: usize,
    total_bet:       Cents,
}

impl TryFrom<WagerRecord> for Wager {
    type Error = String;

    fn try_from(record: WagerRecord) -> Result<Self, Self::Error> {
        if record.active_paylines == 0 {
            return Err("active_paylines must be at least 1".into());
        }
        if !record.bet_per_line.is_positive() {
            return Err(format!("bet_per_line {} must be > 0", record.bet_per_line));
        }
        let expected = record.bet_per_line.times(record.active_paylines as u64);
        if record.total_bet != expected {
            return Err(format!(
                "total_bet {} != {} per line × {} lines",
                record.total_bet, record.bet_per_line, record.active_paylines
            ));
        }
        Ok(Self {
            level:           record.level,
            bet_per_line:    record.bet_per_line,
            active_paylines: record.active_paylines,
            total_bet:       record.total_bet,
        })
    }
}
