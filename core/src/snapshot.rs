//! Read-only session snapshot.
//!
//! A snapshot owns copies of everything it reports. Mutating or dropping it
//! never touches the session it came from, and two snapshots taken without
//! a mutation in between compare equal.

use crate::{
    error::SlotResult,
    money::Cents,
    session::{SpinOutcome, SpinStatus},
    types::SpinCount,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub seed:             u64,
    pub credits:          Cents,
    pub bet_level:        usize,
    pub bet_per_line:     Cents,
    pub total_bet:        Cents,
    pub active_paylines:  usize,
    pub last_result:      Option<SpinOutcome>,
    /// Win of the most recent spin.
    pub last_win:         Cents,
    pub total_won:        Cents,
    pub total_wagered:    Cents,
    pub spins:            SpinCount,
    /// total_won / total_wagered; None before anything was wagered.
    pub return_to_player: Option<f64>,
    pub spin_status:      SpinStatus,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> SlotResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Net result for the player since the last reset.
    pub fn net(&self) -> Cents {
        self.total_won - self.total_wagered
    }
}

pub fn return_to_player(total_won: Cents, total_wagered: Cents) -> Option<f64> {
    if total_wagered.is_positive() {
        Some(total_won.0 as f64 / total_wagered.0 as f64)
    } else {
        None
    }
}
