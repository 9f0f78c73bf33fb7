//! Reel builder: turns catalog probabilities into shuffled reel strips.
//!
//! One population is built per call and shared by every reel, so all reels
//! carry the same symbol counts. Each reel then gets its own shuffle.

use crate::{
    rng::SlotRng,
    symbols::{SymbolCatalog, SymbolId},
};
use serde::{Deserialize, Serialize};

pub const REEL_SIZE: usize = 20;
pub const REEL_COUNT: usize = 5;

/// A circular strip of symbols. Only a contiguous window is visible per spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reel {
    strip: Vec<SymbolId>,
}

impl Reel {
    pub fn new(strip: Vec<SymbolId>) -> Self {
        Self { strip }
    }

    pub fn symbols(&self) -> &[SymbolId] {
        &self.strip
    }

    pub fn len(&self) -> usize {
        self.strip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strip.is_empty()
    }

    /// Symbol at `position`, wrapping around the end of the strip.
    pub fn at(&self, position: usize) -> SymbolId {
        self.strip[position % self.strip.len()]
    }

    pub fn count_of(&self, id: SymbolId) -> usize {
        self.strip.iter().filter(|&&s| s == id).count()
    }
}

/// Convert probabilities into exactly `reel_size` symbols.
///
/// Each symbol contributes `round(probability * reel_size)` copies. Rounding
/// drift is corrected by padding with uniform catalog picks, or by removing
/// uniform positions, until the length is exact.
pub fn build_population(
    catalog: &SymbolCatalog,
    reel_size: usize,
    rng: &mut SlotRng,
) -> Vec<SymbolId> {
    let mut pool: Vec<SymbolId> = Vec::with_capacity(reel_size);
    for symbol in catalog.iter() {
        let count = (symbol.probability * reel_size as f64).round() as usize;
        pool.extend(std::iter::repeat(symbol.id).take(count));
    }

    let raw_len = pool.len();
    while pool.len() < reel_size {
        let pick = catalog.at(rng.index_below(catalog.len())).id;
        pool.push(pick);
    }
    while pool.len() > reel_size {
        pool.remove(rng.index_below(pool.len()));
    }

    if raw_len != reel_size {
        log::debug!(
            "reels: population rounded to {raw_len}, corrected to {reel_size}"
        );
    }
    pool
}

/// Build `reel_count` independently shuffled copies of one population.
pub fn build_reels(
    catalog: &SymbolCatalog,
    reel_size: usize,
    reel_count: usize,
    rng: &mut SlotRng,
) -> Vec<Reel> {
    let pool = build_population(catalog, reel_size, rng);
    (0..reel_count)
        .map(|_| {
            let mut strip = pool.clone();
            rng.shuffle(&mut strip);
            Reel::new(strip)
        })
        .collect()
}
