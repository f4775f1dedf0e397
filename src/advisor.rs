//! Prompt dispatcher
//!
//! Renders each request into a single prompt, submits it to the backend and
//! returns the completion verbatim. Backend failures are logged and replaced
//! by a fixed per-operation error.

use tracing::{debug, error};

use crate::backend::GenerativeBackend;
use crate::error::{AdvisorError, Operation};
use crate::models::{ChatMessage, Goal, UserProfile};
use crate::prompts;
use crate::Result;

pub struct FinancialAdvisor {
    backend: Box<dyn GenerativeBackend>,
}

impl FinancialAdvisor {
    pub fn new(backend: Box<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    /// General advice: the prompt is forwarded unchanged.
    pub async fn generate_financial_advice(&self, prompt: &str) -> Result<String> {
        self.dispatch(Operation::FinancialAdvice, prompt).await
    }

    pub async fn generate_personalized_advice(
        &self,
        profile: &UserProfile,
        question: &str,
        area: &str,
    ) -> Result<String> {
        profile.validate()?;
        let prompt = prompts::personalized_advice(profile, question, area);
        self.dispatch(Operation::PersonalizedAdvice, &prompt).await
    }

    pub async fn generate_goal_strategy(&self, profile: &UserProfile, goal: &Goal) -> Result<String> {
        profile.validate()?;
        goal.validate()?;
        let prompt = prompts::goal_strategy(profile, goal);
        self.dispatch(Operation::GoalStrategy, &prompt).await
    }

    pub async fn generate_chat_response(&self, messages: &[ChatMessage]) -> Result<String> {
        let prompt = prompts::chat_transcript(messages);
        self.dispatch(Operation::ChatResponse, &prompt).await
    }

    async fn dispatch(&self, operation: Operation, prompt: &str) -> Result<String> {
        debug!(operation = %operation, prompt_len = prompt.len(), "Dispatching prompt");

        self.backend.generate(prompt).await.map_err(|e| {
            error!("Error generating {}: {}", operation, e);
            AdvisorError::GenerationFailed(operation)
        })
    }
}
