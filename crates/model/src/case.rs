use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Project maturity. Free-form transitions: the user may set any value at
/// any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Idea,
    #[serde(rename = "PoC")]
    Poc,
    #[serde(rename = "MVP")]
    Mvp,
    Pilot,
    Production,
}

/// Canonical currency set. The extraction prompt and the editable record
/// both use this enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    #[serde(rename = "Cost Savings")]
    CostSavings,
    #[serde(rename = "Revenue Growth")]
    RevenueGrowth,
    #[serde(rename = "Productivity Gains")]
    ProductivityGains,
    #[serde(rename = "Risk Reduction")]
    RiskReduction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Duration {
    Annual,
    #[serde(rename = "One-time")]
    OneTime,
}

/// One quantified financial claim attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommercialValue {
    pub amount: f64,
    pub currency: Currency,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub duration: Duration,
}

/// The extraction subset of a record: everything except `id` and
/// `createdAt`, which are stamped on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDraft {
    pub title: String,
    pub description: String,
    pub domain: String,
    pub stage: Stage,
    pub commercial_value: Vec<CommercialValue>,
    pub soft_benefits: Vec<String>,
}

/// The unit of persistence: one business case record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub domain: String,
    pub stage: Stage,
    pub commercial_value: Vec<CommercialValue>,
    pub soft_benefits: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl UseCase {
    /// Stamp a draft with a fresh id and creation time.
    pub fn from_draft(draft: CaseDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            domain: draft.domain,
            stage: draft.stage,
            commercial_value: draft.commercial_value,
            soft_benefits: draft.soft_benefits,
            created_at: Utc::now(),
        }
    }

    /// Empty record for the manual-entry path that bypasses extraction.
    pub fn skeleton() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: "Untitled Strategy".to_string(),
            description: String::new(),
            domain: "General".to_string(),
            stage: Stage::Idea,
            commercial_value: Vec::new(),
            soft_benefits: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// Shallow-merge update: a present field replaces the stored one wholesale,
/// absent fields are untouched. `id` and `createdAt` are immutable and not
/// patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub domain: Option<String>,
    pub stage: Option<Stage>,
    pub commercial_value: Option<Vec<CommercialValue>>,
    pub soft_benefits: Option<Vec<String>>,
}

impl CasePatch {
    pub fn apply(self, case: &mut UseCase) {
        if let Some(title) = self.title {
            case.title = title;
        }
        if let Some(description) = self.description {
            case.description = description;
        }
        if let Some(domain) = self.domain {
            case.domain = domain;
        }
        if let Some(stage) = self.stage {
            case.stage = stage;
        }
        if let Some(values) = self.commercial_value {
            case.commercial_value = values;
        }
        if let Some(benefits) = self.soft_benefits {
            case.soft_benefits = benefits;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_uses_display_spelling_on_the_wire() {
        assert_eq!(serde_json::to_string(&Stage::Poc).unwrap(), "\"PoC\"");
        assert_eq!(serde_json::to_string(&Stage::Mvp).unwrap(), "\"MVP\"");
        let parsed: Stage = serde_json::from_str("\"Production\"").unwrap();
        assert_eq!(parsed, Stage::Production);
    }

    #[test]
    fn value_entry_round_trips_with_camel_case_keys() {
        let entry = CommercialValue {
            amount: 2_000_000.0,
            currency: Currency::Usd,
            value_type: ValueType::CostSavings,
            duration: Duration::Annual,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"Cost Savings\""));
        assert!(json.contains("\"duration\":\"Annual\""));
        let back: CommercialValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn patch_leaves_id_and_created_at_alone() {
        let mut case = UseCase::skeleton();
        let id = case.id.clone();
        let created = case.created_at;

        let patch = CasePatch {
            title: Some("Dock Vision".to_string()),
            stage: Some(Stage::Pilot),
            ..CasePatch::default()
        };
        patch.apply(&mut case);

        assert_eq!(case.title, "Dock Vision");
        assert_eq!(case.stage, Stage::Pilot);
        assert_eq!(case.id, id);
        assert_eq!(case.created_at, created);
        // Untouched fields keep their values
        assert_eq!(case.domain, "General");
    }

    #[test]
    fn unknown_stage_is_rejected() {
        let result: Result<Stage, _> = serde_json::from_str("\"Prototype\"");
        assert!(result.is_err());
    }
}
