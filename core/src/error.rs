use crate::money::Cents;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Insufficient credits: balance {credits}, total bet {total_bet}")]
    InsufficientCredits { credits: Cents, total_bet: Cents },

    #[error("Invalid bet amount: {amount} is not a bet denomination")]
    InvalidBetAmount { amount: Cents },

    #[error("Invalid payline count: {count} (must be 1..={max})")]
    InvalidPaylineCount { count: usize, max: usize },

    #[error("Invalid credit amount: {amount} (must be > 0)")]
    InvalidCreditAmount { amount: Cents },

    #[error("Credit limit exceeded: balance {credits} cannot take {amount} more")]
    CreditLimitExceeded { credits: Cents, amount: Cents },

    #[error("A spin is already in progress")]
    SpinInProgress,

    #[error("Session lock poisoned by a panicked holder")]
    SessionPoisoned,

    #[error("Invalid machine configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlotError {
    /// Wager rejections leave the session untouched and usable.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InsufficientCredits { .. }
                | Self::InvalidBetAmount { .. }
                | Self::InvalidPaylineCount { .. }
                | Self::InvalidCreditAmount { .. }
                | Self::CreditLimitExceeded { .. }
                | Self::SpinInProgress
        )
    }
}

pub type SlotResult<T> = Result<T, SlotError>;
