//! Financial Advice Dispatcher
//!
//! Turns free-text prompts, user financial profiles, goals and chat
//! transcripts into flat text prompts and forwards each one to a
//! generative-text backend (Gemini), returning the completion verbatim.
//!
//! FLOW:
//! INPUT → RENDER → GENERATE → RETURN (or fixed per-operation error)

pub mod advisor;
pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod prompts;

pub use error::Result;

// Re-export common types
pub use advisor::FinancialAdvisor;
pub use backend::{EchoBackend, GeminiClient, GenerativeBackend};
pub use error::{AdvisorError, Operation};
pub use models::*;
