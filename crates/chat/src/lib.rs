pub mod prompt;

pub use prompt::build_chat_prompt;

use llm::{LlmError, TextModel};
use model::UseCase;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Returned when no credential is configured. Deliberate UX fallback, not
/// an error surface.
pub const OFFLINE_APOLOGY: &str = "I'm sorry, but I can't connect to my brain right now. \
     Please make sure the AI service is configured and try again.";

/// Returned when the model invocation itself fails.
pub const TROUBLE_APOLOGY: &str =
    "I'm having trouble thinking right now. Please try again in a moment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// Produces one advisory reply grounded in the current record and the
/// conversation so far. Never fails: every error path collapses into a
/// fixed apology string.
pub struct Advisor<M> {
    model: M,
}

impl<M: TextModel> Advisor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub async fn respond(
        &self,
        message: &str,
        history: &[ChatMessage],
        case: &UseCase,
    ) -> String {
        let prompt = prompt::build_chat_prompt(message, history, case);
        debug!(prompt = %prompt, "chat prompt");

        match self.model.generate(&prompt).await {
            Ok(reply) => reply.trim().to_string(),
            Err(LlmError::MissingCredential) => OFFLINE_APOLOGY.to_string(),
            Err(err) => {
                warn!(error = %err, "chat invocation failed");
                TROUBLE_APOLOGY.to_string()
            }
        }
    }
}
