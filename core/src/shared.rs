//! Thread-safe session handle.
//!
//! One mutex guards the whole session, so a spin's random draws, credit
//! deduction and result recording happen as one unit. Next to the mutex sits
//! the spin status. A spin first claims it (`Idle` -> `Spinning`), then waits
//! for the session lock, and releases the claim once it has settled.
//!
//! A spin requested while another spin holds the claim is rejected with
//! `SpinInProgress`. Reads and other operations never cause a rejection;
//! they only wait for the lock, and a spin waits for them.
//!
//! Do not spin through another handle from inside `with`: the spin would
//! wait for the lock the closure is holding.

use crate::{
    command::{CommandOutcome, SlotCommand},
    error::{SlotError, SlotResult},
    session::{SlotSession, SpinOutcome, SpinStatus},
    snapshot::SessionSnapshot,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub struct SharedSession {
    inner:    Arc<Mutex<SlotSession>>,
    spinning: Arc<AtomicBool>,
}

impl SharedSession {
    pub fn new(session: SlotSession) -> Self {
        Self {
            inner:    Arc::new(Mutex::new(session)),
            spinning: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Play one spin. Rejected only while another spin is in flight.
    pub fn spin(&self) -> SlotResult<SpinOutcome> {
        let Some(_claim) = SpinClaim::acquire(&self.spinning) else {
            log::warn!("shared session: spin rejected, another spin in progress");
            return Err(SlotError::SpinInProgress);
        };
        let mut session = self.lock()?;
        session.spin()
    }

    /// Current spin status; never waits for the session lock.
    pub fn status(&self) -> SpinStatus {
        if self.spinning.load(Ordering::Acquire) {
            SpinStatus::Spinning
        } else {
            SpinStatus::Idle
        }
    }

    /// Run `f` with exclusive access, waiting for the lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut SlotSession) -> R) -> SlotResult<R> {
        let mut session = self.lock()?;
        Ok(f(&mut session))
    }

    /// Dispatch a command; spins go through the claimed path.
    pub fn apply(&self, command: SlotCommand) -> SlotResult<CommandOutcome> {
        match command {
            SlotCommand::Spin => Ok(CommandOutcome::Spun {
                outcome: self.spin()?,
            }),
            SlotCommand::GetState => Ok(CommandOutcome::State {
                state: self.state()?,
            }),
            other => self.with(|session| session.apply(other))?,
        }
    }

    /// Snapshot carrying the live spin status.
    pub fn state(&self) -> SlotResult<SessionSnapshot> {
        let mut snapshot = self.with(|session| session.state())?;
        snapshot.spin_status = self.status();
        Ok(snapshot)
    }

    fn lock(&self) -> SlotResult<MutexGuard<'_, SlotSession>> {
        self.inner.lock().map_err(|_| SlotError::SessionPoisoned)
    }
}

/// Holds the `Spinning` status; dropping it returns the session to `Idle`.
struct SpinClaim<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SpinClaim<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(Self { flag })
    }
}

impl Drop for SpinClaim<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
