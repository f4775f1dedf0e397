//! Error types for the financial advice dispatcher

use std::fmt;
use thiserror::Error;

/// Result type alias for dispatcher operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// The four prompt-dispatch operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FinancialAdvice,
    PersonalizedAdvice,
    GoalStrategy,
    ChatResponse,
}

impl Operation {
    /// Fixed message returned to the caller when generation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::FinancialAdvice => "Failed to generate financial advice",
            Operation::PersonalizedAdvice => "Failed to generate personalized financial advice",
            Operation::GoalStrategy => "Failed to generate goal strategy",
            Operation::ChatResponse => "Failed to generate chat response",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::FinancialAdvice => "financial advice",
            Operation::PersonalizedAdvice => "personalized financial advice",
            Operation::GoalStrategy => "goal strategy",
            Operation::ChatResponse => "chat response",
        };
        write!(f, "{}", s)
    }
}

#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Backend failure. The underlying cause is logged, never carried.
    #[error("{}", .0.failure_message())]
    GenerationFailed(Operation),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AdvisorError {
    pub fn operation(&self) -> Option<Operation> {
        match self {
            AdvisorError::GenerationFailed(op) => Some(*op),
            AdvisorError::InvalidInput(_) => None,
        }
    }
}
