//! Wager & session state: one player's balance, bet and history.
//!
//! A session owns its reels, its RNG streams and its journal. Operations
//! run to completion synchronously; `&mut self` gives each one exclusive
//! access, so a spin can never interleave with another operation. Use
//! `SharedSession` when several threads drive one session.
//!
//! SPIN ORDER (fixed):
//!   1. Reject if credits < total bet (nothing mutated).
//!   2. Deduct total bet, count the spin, add to total wagered.
//!   3. Sample the grid from the reels.
//!   4. Evaluate active paylines at the current per-line bet.
//!   5. Credit the win, record last result, journal the settlement.

use crate::{
    config::SlotConfig,
    error::{SlotError, SlotResult},
    evaluator::{self, LineWin},
    event::{Journal, SessionEvent},
    money::Cents,
    reels::{self, Reel},
    rng::{RngBank, SlotRng, StreamSlot},
    snapshot::{self, SessionSnapshot},
    spin::{self, Grid},
    types::SpinCount,
    wager::Wager,
};
use serde::{Deserialize, Serialize};

/// Whether a spin is currently being played.
///
/// A plain `SlotSession` is always `Idle` between calls because `spin`
/// borrows it exclusively. `SharedSession` reports `Spinning` from the
/// moment a spin is claimed until it settles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinStatus {
    #[default]
    Idle,
    Spinning,
}

/// Everything one spin produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub spin:            SpinCount,
    pub grid:            Grid,
    /// Strip offset each reel stopped at (top visible row).
    pub stops:           Vec<usize>,
    pub bet_per_line:    Cents,
    pub active_paylines: usize,
    pub win_lines:       Vec<LineWin>,
    pub total_win:       Cents,
}

pub struct SlotSession {
    config:        SlotConfig,
    seed:          u64,
    reel_rng:      SlotRng,
    spin_rng:      SlotRng,
    reels:         Vec<Reel>,
    credits:       Cents,
    wager:         Wager,
    last_result:   Option<SpinOutcome>,
    last_win:      Cents,
    total_won:     Cents,
    total_wagered: Cents,
    spins:         SpinCount,
    journal:       Journal,
}

impl SlotSession {
    /// Validate `config`, build the reels and start at the configured defaults.
    pub fn new(config: SlotConfig, seed: u64) -> SlotResult<Self> {
        config.validate()?;

        let bank = RngBank::new(seed);
        let defaults = config.defaults;
        let wager = Wager::new(
            &config.bet_ladder,
            defaults.bet_level,
            defaults.active_paylines,
            config.max_paylines(),
        );

        let mut session = Self {
            journal: Journal::new(config.journal_capacity),
            seed,
            reel_rng: bank.for_stream(StreamSlot::Reels),
            spin_rng: bank.for_stream(StreamSlot::Spins),
            reels: Vec::new(),
            credits: defaults.credits,
            wager,
            last_result: None,
            last_win: Cents::ZERO,
            total_won: Cents::ZERO,
            total_wagered: Cents::ZERO,
            spins: 0,
            config,
        };
        session.note(SessionEvent::SessionStarted { seed });
        session.rebuild_reels();
        Ok(session)
    }

    /// Session on the standard machine.
    pub fn standard(seed: u64) -> SlotResult<Self> {
        Self::new(SlotConfig::standard(), seed)
    }

    // ── Spin ───────────────────────────────────────────────────

    pub fn spin(&mut self) -> SlotResult<SpinOutcome> {
        let total_bet = self.wager.total_bet();
        if self.credits < total_bet {
            let err = SlotError::InsufficientCredits {
                credits: self.credits,
                total_bet,
            };
            return Err(self.reject("spin", err));
        }

        self.credits -= total_bet;
        self.total_wagered += total_bet;
        self.spins += 1;

        let draw = spin::sample_grid(&self.reels, self.config.visible_rows, &mut self.spin_rng);
        let evaluation = evaluator::evaluate(
            &draw.grid,
            &self.config.paylines,
            self.wager.active_paylines(),
            self.wager.bet_per_line(),
            &self.config.catalog,
        );

        self.credits += evaluation.total_win;
        self.total_won += evaluation.total_win;
        self.last_win = evaluation.total_win;

        let outcome = SpinOutcome {
            spin:            self.spins,
            grid:            draw.grid,
            stops:           draw.stops,
            bet_per_line:    self.wager.bet_per_line(),
            active_paylines: self.wager.active_paylines(),
            win_lines:       evaluation.win_lines,
            total_win:       evaluation.total_win,
        };

        log::debug!(
            "spin={} session: stops={:?} lines={} win={} credits={}",
            self.spins,
            outcome.stops,
            outcome.win_lines.len(),
            outcome.total_win,
            self.credits
        );

        self.note(SessionEvent::SpinSettled {
            spin:          self.spins,
            stops:         outcome.stops.clone(),
            total_bet,
            total_win:     outcome.total_win,
            winning_lines: outcome.win_lines.len(),
            credits:       self.credits,
        });
        self.last_result = Some(outcome.clone());
        Ok(outcome)
    }

    // ── Wager ──────────────────────────────────────────────────

    /// Select the ladder denomination whose total is exactly `amount`.
    pub fn set_total_bet(&mut self, amount: Cents) -> SlotResult<Wager> {
        if let Err(err) = self.wager.set_total_bet(&self.config.bet_ladder, amount) {
            return Err(self.reject("set_total_bet", err));
        }
        self.note_wager();
        Ok(self.wager)
    }

    /// One ladder step up; no-op at the top.
    pub fn increase_total_bet(&mut self) -> Wager {
        if self.wager.increase_total_bet(&self.config.bet_ladder) {
            self.note_wager();
        }
        self.wager
    }

    /// One ladder step down; no-op at the bottom.
    pub fn decrease_total_bet(&mut self) -> Wager {
        if self.wager.decrease_total_bet(&self.config.bet_ladder) {
            self.note_wager();
        }
        self.wager
    }

    pub fn set_active_paylines(&mut self, count: usize) -> SlotResult<usize> {
        if let Err(err) = self.wager.set_active_paylines(count, self.config.max_paylines()) {
            return Err(self.reject("set_active_paylines", err));
        }
        self.note_wager();
        Ok(self.wager.active_paylines())
    }

    pub fn increase_paylines(&mut self) -> usize {
        if self.wager.increase_paylines(self.config.max_paylines()) {
            self.note_wager();
        }
        self.wager.active_paylines()
    }

    pub fn decrease_paylines(&mut self) -> usize {
        if self.wager.decrease_paylines() {
            self.note_wager();
        }
        self.wager.active_paylines()
    }

    // ── Credits ────────────────────────────────────────────────

    /// Top up the balance. Returns the new balance.
    pub fn add_credits(&mut self, amount: Cents) -> SlotResult<Cents> {
        if !amount.is_positive() {
            return Err(self.reject("add_credits", SlotError::InvalidCreditAmount { amount }));
        }
        let Some(credits) = self.credits.checked_add(amount) else {
            let err = SlotError::CreditLimitExceeded {
                credits: self.credits,
                amount,
            };
            return Err(self.reject("add_credits", err));
        };
        self.credits = credits;
        log::info!("spin={} session: added {amount}, balance {}", self.spins, self.credits);
        self.note(SessionEvent::CreditsAdded {
            amount,
            credits: self.credits,
        });
        Ok(self.credits)
    }

    /// Restore every field to the configured defaults and rebuild the reels.
    /// The RNG streams continue, so the new reels differ from the old ones.
    pub fn reset(&mut self) {
        let defaults = self.config.defaults;
        self.credits = defaults.credits;
        self.wager = Wager::new(
            &self.config.bet_ladder,
            defaults.bet_level,
            defaults.active_paylines,
            self.config.max_paylines(),
        );
        self.last_result = None;
        self.last_win = Cents::ZERO;
        self.total_won = Cents::ZERO;
        self.total_wagered = Cents::ZERO;
        self.spins = 0;

        log::info!("session: reset to defaults, balance {}", self.credits);
        self.note(SessionEvent::SessionReset);
        self.rebuild_reels();
    }

    // ── Read access ────────────────────────────────────────────

    pub fn state(&self) -> SessionSnapshot {
        SessionSnapshot {
            seed:             self.seed,
            credits:          self.credits,
            bet_level:        self.wager.level(),
            bet_per_line:     self.wager.bet_per_line(),
            total_bet:        self.wager.total_bet(),
            active_paylines:  self.wager.active_paylines(),
            last_result:      self.last_result.clone(),
            last_win:         self.last_win,
            total_won:        self.total_won,
            total_wagered:    self.total_wagered,
            spins:            self.spins,
            return_to_player: snapshot::return_to_player(self.total_won, self.total_wagered),
            spin_status:      SpinStatus::Idle,
        }
    }

    /// Per-payline report of the last spin at the bet it was played with.
    pub fn describe_last_result(&self) -> Option<Vec<String>> {
        let last = self.last_result.as_ref()?;
        Some(evaluator::describe_lines(
            &last.grid,
            &self.config.paylines,
            last.active_paylines,
            last.bet_per_line,
            &self.config.catalog,
        ))
    }

    pub fn reels(&self) -> &[Reel] {
        &self.reels
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn credits(&self) -> Cents {
        self.credits
    }

    pub fn wager(&self) -> Wager {
        self.wager
    }

    // ── Internals ──────────────────────────────────────────────

    fn rebuild_reels(&mut self) {
        self.reels = reels::build_reels(
            &self.config.catalog,
            self.config.reel_size,
            self.config.reel_count,
            &mut self.reel_rng,
        );
        log::info!(
            "session: built {} reels of {} symbols",
            self.config.reel_count,
            self.config.reel_size
        );
        self.note(SessionEvent::ReelsBuilt {
            reel_size:  self.config.reel_size,
            reel_count: self.config.reel_count,
        });
    }

    fn note_wager(&mut self) {
        self.note(SessionEvent::WagerChanged {
            bet_per_line:    self.wager.bet_per_line(),
            total_bet:       self.wager.total_bet(),
            active_paylines: self.wager.active_paylines(),
        });
    }

    fn reject(&mut self, operation: &str, err: SlotError) -> SlotError {
        log::warn!("spin={} session: {operation} rejected: {err}", self.spins);
        self.note(SessionEvent::OperationRejected {
            operation: operation.to_string(),
            reason:    err.to_string(),
        });
        err
    }

    fn note(&mut self, event: SessionEvent) {
        if let Err(e) = self.journal.record(self.spins, &event) {
            log::error!("spin={} session: journal write failed: {e}", self.spins);
        }
    }
}
