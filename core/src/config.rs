use crate::{
    error::{SlotError, SlotResult},
    money::Cents,
    paylines::{standard_paylines, Payline, LINE_LENGTH},
    reels::{REEL_COUNT, REEL_SIZE},
    spin::VISIBLE_ROWS,
    symbols::{Symbol, SymbolCatalog},
    wager::BetLadder,
};
use serde::{Deserialize, Serialize};

/// Default journal size; older entries are dropped first.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 1_024;

/// Values a session starts with and returns to on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDefaults {
    pub credits:         Cents,
    /// Ladder index; level 4 is 0.05 per line / 1.00 total.
    pub bet_level:       usize,
    pub active_paylines: usize,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            credits:         Cents::units(1_000),
            bet_level:       4,
            active_paylines: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SymbolCatalogFile {
    symbols: Vec<Symbol>,
}

#[derive(Debug, Clone, Deserialize)]
struct DefaultsFile {
    credits:         f64,
    bet_level:       usize,
    active_paylines: usize,
}

#[derive(Debug, Clone, Deserialize)]
struct MachineFile {
    reel_size:            usize,
    reel_count:           usize,
    visible_rows:         usize,
    paylines:             Vec<Payline>,
    total_bet_options:    Vec<f64>,
    bet_per_line_options: Vec<f64>,
    defaults:             DefaultsFile,
    #[serde(default = "default_journal_capacity")]
    journal_capacity:     usize,
}

fn default_journal_capacity() -> usize {
    DEFAULT_JOURNAL_CAPACITY
}

#[derive(Debug, Clone)]
pub struct SlotConfig {
    pub catalog:          SymbolCatalog,
    pub paylines:         Vec<Payline>,
    pub bet_ladder:       BetLadder,
    pub reel_size:        usize,
    pub reel_count:       usize,
    pub visible_rows:     usize,
    pub defaults:         SessionDefaults,
    pub journal_capacity: usize,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl SlotConfig {
    /// The reference 3×5, 20-line machine with hardcoded tables.
    /// Tests and the runner use this when no data directory is given.
    pub fn standard() -> Self {
        Self {
            catalog:          SymbolCatalog::standard(),
            paylines:         standard_paylines(),
            bet_ladder:       BetLadder::standard(),
            reel_size:        REEL_SIZE,
            reel_count:       REEL_COUNT,
            visible_rows:     VISIBLE_ROWS,
            defaults:         SessionDefaults::default(),
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
        }
    }

    /// Load from a data/ directory laid out as
    /// `symbols/symbol_catalog.json` and `machine/machine_config.json`.
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let symbols_path = format!("{data_dir}/symbols/symbol_catalog.json");
        let symbols_content = std::fs::read_to_string(&symbols_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {symbols_path}: {e}"))?;
        let symbols_file: SymbolCatalogFile = serde_json::from_str(&symbols_content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {symbols_path}: {e}"))?;
        let catalog = SymbolCatalog::new(symbols_file.symbols)?;

        let machine_path = format!("{data_dir}/machine/machine_config.json");
        let machine_content = std::fs::read_to_string(&machine_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {machine_path}: {e}"))?;
        let machine: MachineFile = serde_json::from_str(&machine_content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {machine_path}: {e}"))?;

        let totals = to_cents(&machine.total_bet_options, "total_bet_options")?;
        let per_line = to_cents(&machine.bet_per_line_options, "bet_per_line_options")?;
        let bet_ladder = BetLadder::from_columns(&totals, &per_line)?;

        let credits = Cents::from_decimal(machine.defaults.credits)
            .ok_or_else(|| anyhow::anyhow!("defaults.credits is not a finite amount"))?;

        let config = Self {
            catalog,
            paylines: machine.paylines,
            bet_ladder,
            reel_size: machine.reel_size,
            reel_count: machine.reel_count,
            visible_rows: machine.visible_rows,
            defaults: SessionDefaults {
                credits,
                bet_level: machine.defaults.bet_level,
                active_paylines: machine.defaults.active_paylines,
            },
            journal_capacity: machine.journal_capacity,
        };
        config.validate()?;

        log::info!(
            "config: loaded {} symbols, {} paylines, {} bet levels from {data_dir}",
            config.catalog.len(),
            config.paylines.len(),
            config.bet_ladder.len()
        );
        Ok(config)
    }

    /// Check the cross-table invariants a session relies on.
    pub fn validate(&self) -> SlotResult<()> {
        if self.reel_size == 0 || self.visible_rows == 0 {
            return Err(SlotError::Config("reel_size and visible_rows must be > 0".into()));
        }
        if self.reel_count != LINE_LENGTH {
            return Err(SlotError::Config(format!(
                "reel_count must be {LINE_LENGTH} to match payline length, got {}",
                self.reel_count
            )));
        }
        if self.catalog.is_empty() {
            return Err(SlotError::Config("symbol catalog is empty".into()));
        }
        if self.paylines.is_empty() {
            return Err(SlotError::Config("no paylines configured".into()));
        }
        if let Some(i) = self.paylines.iter().position(|p| !p.fits(self.visible_rows)) {
            return Err(SlotError::Config(format!(
                "payline {i} leaves the {}-row window or skips a column",
                self.visible_rows
            )));
        }

        let max_lines = self.paylines.len() as u64;
        for (i, level) in self.bet_ladder.levels().iter().enumerate() {
            if level.per_line.times(max_lines) != level.total {
                return Err(SlotError::Config(format!(
                    "bet level {i}: total {} != {} per line × {max_lines} lines",
                    level.total, level.per_line
                )));
            }
        }

        if self.bet_ladder.get(self.defaults.bet_level).is_none() {
            return Err(SlotError::Config(format!(
                "default bet level {} outside ladder of {}",
                self.defaults.bet_level,
                self.bet_ladder.len()
            )));
        }
        if !(1..=self.paylines.len()).contains(&self.defaults.active_paylines) {
            return Err(SlotError::Config(format!(
                "default active paylines {} outside 1..={}",
                self.defaults.active_paylines,
                self.paylines.len()
            )));
        }
        if self.defaults.credits < Cents::ZERO {
            return Err(SlotError::Config("default credits must be >= 0".into()));
        }
        Ok(())
    }

    pub fn max_paylines(&self) -> usize {
        self.paylines.len()
    }
}

fn to_cents(amounts: &[f64], field: &str) -> anyhow::Result<Vec<Cents>> {
    amounts
        .iter()
        .map(|&a| {
            Cents::from_decimal(a).ok_or_else(|| anyhow::anyhow!("{field}: {a} is not a finite amount"))
        })
        .collect()
}
