//! Deterministic 3×5 slot-machine core.
//!
//! Reels are built from weighted symbol populations, spins sample a
//! wrapping window from each reel, and paylines are scored left to right
//! with wild substitution. A `SlotSession` ties it together with a credit
//! balance, a bet ladder and running statistics.

pub mod command;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod event;
pub mod money;
pub mod paylines;
pub mod reels;
pub mod rng;
pub mod session;
pub mod shared;
pub mod snapshot;
pub mod spin;
pub mod symbols;
pub mod types;
pub mod wager;

pub use crate::command::{CommandOutcome, SlotCommand};
pub use crate::config::{SessionDefaults, SlotConfig};
pub use crate::error::{SlotError, SlotResult};
pub use crate::evaluator::{evaluate, Evaluation, LineWin};
pub use crate::money::Cents;
pub use crate::paylines::{Payline, STANDARD_PAYLINES};
pub use crate::reels::{build_reels, Reel, REEL_COUNT, REEL_SIZE};
pub use crate::session::{SlotSession, SpinOutcome, SpinStatus};
pub use crate::shared::SharedSession;
pub use crate::snapshot::SessionSnapshot;
pub use crate::spin::{sample_grid, Grid, SpinDraw, VISIBLE_ROWS};
pub use crate::symbols::{Symbol, SymbolCatalog, SymbolId};
pub use crate::wager::{BetLadder, Wager};
