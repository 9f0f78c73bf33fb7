use crate::{
    error::SlotResult,
    money::Cents,
    session::{SlotSession, SpinOutcome},
    snapshot::SessionSnapshot,
    wager::Wager,
};
use serde::{Deserialize, Serialize};

/// All player-issued commands.
/// Decimal amounts are converted with `Cents::from_decimal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum SlotCommand {
    Spin,

    // ── Wager ─────────────────────────────────────
    SetTotalBet { amount: f64 },
    IncreaseTotalBet,
    DecreaseTotalBet,
    SetActivePaylines { count: usize },
    IncreasePaylines,
    DecreasePaylines,

    // ── Session ───────────────────────────────────
    AddCredits { amount: f64 },
    Reset,
    GetState,
    Describe,
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CommandOutcome {
    Spun { outcome: SpinOutcome },
    Wager { wager: Wager },
    Paylines { active_paylines: usize },
    Credits { credits: Cents },
    State { state: SessionSnapshot },
    Description { lines: Vec<String> },
    Reset,
}

impl SlotSession {
    /// Dispatch one command onto the session.
    pub fn apply(&mut self, command: SlotCommand) -> SlotResult<CommandOutcome> {
        let outcome = match command {
            SlotCommand::Spin => CommandOutcome::Spun {
                outcome: self.spin()?,
            },
            SlotCommand::SetTotalBet { amount } => {
                // Zero is never a ladder total, so non-finite input is rejected.
                let cents = Cents::from_decimal(amount).unwrap_or(Cents::ZERO);
                CommandOutcome::Wager {
                    wager: self.set_total_bet(cents)?,
                }
            }
            SlotCommand::IncreaseTotalBet => CommandOutcome::Wager {
                wager: self.increase_total_bet(),
            },
            SlotCommand::DecreaseTotalBet => CommandOutcome::Wager {
                wager: self.decrease_total_bet(),
            },
            SlotCommand::SetActivePaylines { count } => CommandOutcome::Paylines {
                active_paylines: self.set_active_paylines(count)?,
            },
            SlotCommand::IncreasePaylines => CommandOutcome::Paylines {
                active_paylines: self.increase_paylines(),
            },
            SlotCommand::DecreasePaylines => CommandOutcome::Paylines {
                active_paylines: self.decrease_paylines(),
            },
            SlotCommand::AddCredits { amount } => {
                let cents = Cents::from_decimal(amount).unwrap_or(Cents::ZERO);
                CommandOutcome::Credits {
                    credits: self.add_credits(cents)?,
                }
            }
            SlotCommand::Reset => {
                self.reset();
                CommandOutcome::Reset
            }
            SlotCommand::GetState => CommandOutcome::State {
                state: self.state(),
            },
            SlotCommand::Describe => CommandOutcome::Description {
                lines: self.describe_last_result().unwrap_or_default(),
            },
        };
        Ok(outcome)
    }
}
