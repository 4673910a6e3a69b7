pub mod normalize;
pub mod prompt;

pub use normalize::{strip_code_fences, validate_draft};
pub use prompt::build_extraction_prompt;

use anyhow::Result;
use llm::{LlmError, TextModel};
use model::{CaseDraft, Stage};
use tracing::{debug, warn};

/// Converts a free-text brief into a structured case draft with one model
/// round trip. Degrades to a fixed fallback draft on any model or parse
/// failure; only a missing credential propagates as an error.
pub struct Extractor<M> {
    model: M,
}

impl<M: TextModel> Extractor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub async fn extract(&self, text: &str, domains: &[String]) -> Result<CaseDraft> {
        // Step 1: build prompt
        let prompt = prompt::build_extraction_prompt(text, domains);
        debug!(prompt = %prompt, "extraction prompt");

        // Step 2: single round trip, no retry. A missing credential is a
        // deployment defect and must reach the caller; everything else
        // degrades to the fallback draft.
        let raw = match self.model.generate(&prompt).await {
            Ok(raw) => raw,
            Err(err @ LlmError::MissingCredential) => return Err(err.into()),
            Err(err) => {
                warn!(error = %err, "model invocation failed, using fallback draft");
                return Ok(fallback_draft(text));
            }
        };
        debug!(response = %raw, "raw model response");

        // Step 3: strip any code-fence markup the model added anyway
        let cleaned = normalize::strip_code_fences(&raw);

        // Step 4: parse against the draft schema
        let draft: CaseDraft = match serde_json::from_str(&cleaned) {
            Ok(draft) => draft,
            Err(err) => {
                warn!(error = %err, "model output was not valid draft JSON, using fallback draft");
                return Ok(fallback_draft(text));
            }
        };

        // Step 5: field-level validation, routed into the same fallback
        // path as a parse failure
        if let Err(reason) = normalize::validate_draft(&draft) {
            warn!(reason = %reason, "model output violated field rules, using fallback draft");
            return Ok(fallback_draft(text));
        }

        Ok(draft)
    }
}

/// Fixed minimal draft returned when extraction degrades: the first 100
/// characters of the brief become the description.
pub fn fallback_draft(text: &str) -> CaseDraft {
    let snippet: String = text.chars().take(100).collect();
    CaseDraft {
        title: "New AI Initiative".to_string(),
        description: format!("{}...", snippet),
        domain: "General".to_string(),
        stage: Stage::Idea,
        commercial_value: Vec::new(),
        soft_benefits: Vec::new(),
    }
}
