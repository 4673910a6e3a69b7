use serde::{Deserialize, Serialize};

/// Small configurable taxonomy: which domains the extraction prompt offers
/// and which currencies the editor lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub domains: Vec<String>,
    pub currencies: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            domains: [
                "Customer Experience",
                "Supply Chain",
                "Merchandising",
                "HR",
                "Finance",
                "Marketing",
                "IT / Tech",
                "Legal",
                "R&D",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            currencies: ["USD", "EUR", "GBP", "JPY", "CAD", "AUD"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
