use model::UseCase;

use crate::{ChatMessage, Role};

/// Render the advisory prompt: system instruction, serialized record
/// context, full history, then the latest message.
pub fn build_chat_prompt(message: &str, history: &[ChatMessage], case: &UseCase) -> String {
    let context = serde_json::to_string_pretty(case).unwrap_or_else(|_| "{}".to_string());

    let mut transcript = String::new();
    for turn in history {
        let speaker = match turn.role {
            Role::User => "USER",
            Role::Ai => "ASSISTANT",
        };
        transcript.push_str(&format!("{}: {}\n", speaker, turn.text));
    }

    format!(
        r#"You are a business strategy advisor helping a user refine one business case.

CURRENT BUSINESS CASE (JSON):
{}

CONVERSATION SO FAR:
{}
INSTRUCTIONS:
- Keep your answer concise, one paragraph.
- Reference specific fields of the business case when relevant.
- You cannot edit the business case yourself; you may only suggest text for the user to apply.
- Never claim to have changed anything.

USER: {}

ASSISTANT:"#,
        context, transcript, message
    )
}
