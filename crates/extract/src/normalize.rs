use model::CaseDraft;
use regex::Regex;

/// Strip a triple-backtick fence the model may have wrapped the JSON in,
/// tolerating an optional language tag ("```json", "```JSON", ...). Only a
/// leading/trailing fence pair is removed; fence markers inside string
/// values are left alone.
pub fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    let re = Regex::new(r"(?s)^```[a-zA-Z]*\s*(.*?)\s*```$").unwrap();
    match re.captures(trimmed) {
        Some(caps) => caps[1].to_string(),
        None => trimmed.to_string(),
    }
}

/// Field-level checks the serde schema cannot express. Enum membership and
/// required-field presence are already enforced by deserializing into
/// `CaseDraft`; this rejects what slips past that.
pub fn validate_draft(draft: &CaseDraft) -> Result<(), String> {
    if draft.title.trim().is_empty() {
        return Err("title is empty".to_string());
    }
    if draft.domain.trim().is_empty() {
        return Err("domain is empty".to_string());
    }
    for (i, entry) in draft.commercial_value.iter().enumerate() {
        if !entry.amount.is_finite() {
            return Err(format!("commercialValue[{}].amount is not finite", i));
        }
        if entry.amount < 0.0 {
            return Err(format!("commercialValue[{}].amount is negative", i));
        }
    }
    Ok(())
}
