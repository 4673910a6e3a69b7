/// Render the extraction prompt for one free-text brief. Pure function of
/// its inputs; length validation of the brief is the caller's job.
pub fn build_extraction_prompt(text: &str, domains: &[String]) -> String {
    let domain_list = domains.join(", ");

    format!(
        r#"You are an expert Business Analyst. Your task is to extract a structured Business Use Case from the loose text provided below.

INPUT TEXT:
"{}"

Return ONLY a valid JSON object. Do not include explanations, comments, or formatting outside JSON.
Extract and populate the following fields. All fields must be present, even if empty.

SCHEMA:
{{
  "title": "A professional, executive-ready summary title (max 10 words)",
  "description": "A clear, business-focused description of the problem and proposed solution (max 3 sentences). Do not invent or infer quantitative results.",
  "domain": "Select exactly one best-fitting domain from [{}]. If none fit, propose one concise new domain (max 3 words).",
  "stage": "Select exactly one stage from [Idea, PoC, MVP, Pilot, Production]. If unclear, default to \"Idea\".",
  "commercialValue": [
    {{"amount": 0, "currency": "USD|EUR|GBP|Other", "type": "Cost Savings|Revenue Growth|Productivity Gains|Risk Reduction", "duration": "Annual|One-time"}}
  ],
  "softBenefits": ["qualitative benefit"]
}}

RULES for commercialValue:
- Include entries only if the input text explicitly states a concrete monetary value.
- Convert shorthand (e.g., "$1M" -> 1000000).
- If a range is given, use the average only if both bounds are explicitly stated.
- Do NOT estimate, infer, or benchmark values.
- If no concrete values are found, return an empty array.

RULES for softBenefits:
- Include qualitative benefits explicitly mentioned or clearly implied in the text.

Return ONLY the raw JSON object. No markdown formatting, no code blocks.

JSON OUTPUT:"#,
        text, domain_list
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains() -> Vec<String> {
        vec!["Supply Chain".to_string(), "Finance".to_string()]
    }

    #[test]
    fn prompt_embeds_input_text_verbatim() {
        let prompt = build_extraction_prompt("We want to scan pallets for damage.", &domains());
        assert!(prompt.contains("We want to scan pallets for damage."));
    }

    #[test]
    fn prompt_lists_configured_domains() {
        let prompt = build_extraction_prompt("anything", &domains());
        assert!(prompt.contains("[Supply Chain, Finance]"));
    }

    #[test]
    fn prompt_forbids_invented_values_and_fences() {
        let prompt = build_extraction_prompt("anything", &domains());
        assert!(prompt.contains("Do NOT estimate, infer, or benchmark values."));
        assert!(prompt.contains("no code blocks"));
    }

    #[test]
    fn empty_input_is_still_accepted() {
        let prompt = build_extraction_prompt("", &domains());
        assert!(prompt.contains("JSON OUTPUT:"));
    }

    #[test]
    fn same_input_renders_same_prompt() {
        let a = build_extraction_prompt("idea", &domains());
        let b = build_extraction_prompt("idea", &domains());
        assert_eq!(a, b);
    }
}
