//! Session journal: an append-only, bounded log of what a session did.
//!
//! RULE: every state change a session makes is journaled as a
//! SessionEvent. Rejected operations are journaled too, so a replay of the
//! journal explains every balance movement and every refusal.

use crate::{
    error::SlotResult,
    money::Cents,
    types::SpinCount,
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Every event a session can emit.
/// Variants may be added, never removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    SessionStarted {
        seed: u64,
    },
    ReelsBuilt {
        reel_size:  usize,
        reel_count: usize,
    },
    SpinSettled {
        spin:          SpinCount,
        stops:         Vec<usize>,
        total_bet:     Cents,
        total_win:     Cents,
        winning_lines: usize,
        credits:       Cents,
    },
    WagerChanged {
        bet_per_line:    Cents,
        total_bet:       Cents,
        active_paylines: usize,
    },
    CreditsAdded {
        amount:  Cents,
        credits: Cents,
    },
    OperationRejected {
        operation: String,
        reason:    String,
    },
    SessionReset,
}

/// Stable name for a SessionEvent variant.
pub fn event_type_name(event: &SessionEvent) -> &'static str {
    match event {
        SessionEvent::SessionStarted { .. }    => "session_started",
        SessionEvent::ReelsBuilt { .. }        => "reels_built",
        SessionEvent::SpinSettled { .. }       => "spin_settled",
        SessionEvent::WagerChanged { .. }      => "wager_changed",
        SessionEvent::CreditsAdded { .. }      => "credits_added",
        SessionEvent::OperationRejected { .. } => "operation_rejected",
        SessionEvent::SessionReset             => "session_reset",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Monotonic across the session's lifetime, resets included.
    pub seq:        u64,
    /// Spins settled when the entry was written.
    pub spin:       SpinCount,
    pub event_type: String,
    pub payload:    String, // JSON-serialized SessionEvent
}

#[derive(Debug, Clone)]
pub struct Journal {
    entries:  VecDeque<JournalEntry>,
    capacity: usize,
    next_seq: u64,
}

impl Journal {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_PREALLOC)),
            capacity,
            next_seq: 0,
        }
    }

    /// Append an event, evicting the oldest entry when full.
    pub fn record(&mut self, spin: SpinCount, event: &SessionEvent) -> SlotResult<()> {
        let entry = JournalEntry {
            seq:        self.next_seq,
            spin,
            event_type: event_type_name(event).to_string(),
            payload:    serde_json::to_string(event)?,
        };
        self.next_seq += 1;

        if self.capacity == 0 {
            return Ok(());
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total events ever recorded, including evicted ones.
    pub fn recorded(&self) -> u64 {
        self.next_seq
    }

    /// Decode the retained entries back into events.
    pub fn events(&self) -> SlotResult<Vec<SessionEvent>> {
        self.entries
            .iter()
            .map(|e| serde_json::from_str(&e.payload).map_err(Into::into))
            .collect()
    }
}

const DEFAULT_PREALLOC: usize = 64;
