//! Symbol catalog: the fixed set of symbol kinds that populate the reels.
//!
//! The catalog is built once (standard machine or config file) and never
//! mutated afterwards. Reels and grids store `SymbolId`s; display names and
//! pay values are looked up here.

use crate::error::{SlotError, SlotResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolId {
    Wild,
    Seven,
    Bar3,
    Bar2,
    Bar,
    Cherry,
    Orange,
    Plum,
}

impl SymbolId {
    pub fn is_wild(self) -> bool {
        self == SymbolId::Wild
    }

    /// Stable wire code, identical to the serde form.
    pub fn code(self) -> &'static str {
        match self {
            Self::Wild   => "WILD",
            Self::Seven  => "SEVEN",
            Self::Bar3   => "BAR3",
            Self::Bar2   => "BAR2",
            Self::Bar    => "BAR",
            Self::Cherry => "CHERRY",
            Self::Orange => "ORANGE",
            Self::Plum   => "PLUM",
        }
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub id:          SymbolId,
    pub name:        String,
    /// Ordinal used for display ordering.
    pub value:       u8,
    /// Share of each reel strip, in [0, 1].
    pub probability: f64,
    /// Consecutive-match count -> multiplier of the per-line bet.
    pub payout:      BTreeMap<u8, u32>,
}

impl Symbol {
    pub fn new(
        id: SymbolId,
        name: &str,
        value: u8,
        probability: f64,
        pays: [u32; 3],
    ) -> Self {
        let payout = [3u8, 4, 5].into_iter().zip(pays).collect();
        Self {
            id,
            name: name.to_string(),
            value,
            probability,
            payout,
        }
    }

    /// Multiplier for a run of `count` symbols. Unlisted counts pay nothing.
    pub fn pays(&self, count: usize) -> u32 {
        u8::try_from(count)
            .ok()
            .and_then(|c| self.payout.get(&c).copied())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
}

impl SymbolCatalog {
    /// Build a catalog, rejecting duplicate ids and out-of-range probabilities.
    pub fn new(symbols: Vec<Symbol>) -> SlotResult<Self> {
        if symbols.is_empty() {
            return Err(SlotError::Config("symbol catalog is empty".into()));
        }
        let mut seen = HashSet::new();
        for symbol in &symbols {
            if !seen.insert(symbol.id) {
                return Err(SlotError::Config(format!("duplicate symbol id {}", symbol.id)));
            }
            if !(0.0..=1.0).contains(&symbol.probability) {
                return Err(SlotError::Config(format!(
                    "symbol {} probability {} outside [0, 1]",
                    symbol.id, symbol.probability
                )));
            }
        }
        Ok(Self { symbols })
    }

    /// The reference machine: one wild and seven paying symbols.
    pub fn standard() -> Self {
        Self {
            symbols: vec![
                Symbol::new(SymbolId::Wild,   "Wild",       0, 0.05, [15, 50, 100]),
                Symbol::new(SymbolId::Seven,  "Seven",      1, 0.08, [30, 100, 250]),
                Symbol::new(SymbolId::Bar3,   "Triple Bar", 2, 0.10, [20, 60, 180]),
                Symbol::new(SymbolId::Bar2,   "Double Bar", 3, 0.12, [16, 50, 120]),
                Symbol::new(SymbolId::Bar,    "Bar",        4, 0.15, [12, 40, 80]),
                Symbol::new(SymbolId::Cherry, "Cherry",     5, 0.18, [10, 30, 60]),
                Symbol::new(SymbolId::Orange, "Orange",     6, 0.20, [8, 20, 40]),
                Symbol::new(SymbolId::Plum,   "Plum",       7, 0.12, [5, 15, 30]),
            ],
        }
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: SymbolId) -> bool {
        self.get(id).is_some()
    }

    /// Display name, falling back to the wire code for unknown ids.
    pub fn name_of(&self, id: SymbolId) -> &str {
        self.get(id).map(|s| s.name.as_str()).unwrap_or(id.code())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Symbol by catalog position; used for uniform padding picks.
    pub fn at(&self, index: usize) -> &Symbol {
        &self.symbols[index]
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
