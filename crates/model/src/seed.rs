use chrono::{Duration as ChronoDuration, Utc};

use crate::case::{CommercialValue, Currency, Duration, Stage, UseCase, ValueType};

/// Bundled example records, substituted when the record store is missing,
/// corrupt, or empty.
pub fn seed_cases() -> Vec<UseCase> {
    vec![
        UseCase {
            id: "1".to_string(),
            title: "AI-Driven Supply Chain Optimization".to_string(),
            description: "Implement predictive analytics to optimize inventory levels across \
                          regional distribution centers. By analyzing historical sales data, \
                          weather patterns, and local events, we can reduce stockouts and \
                          minimize overstock holding costs."
                .to_string(),
            domain: "Supply Chain".to_string(),
            stage: Stage::Pilot,
            commercial_value: vec![
                CommercialValue {
                    amount: 2_500_000.0,
                    currency: Currency::Usd,
                    value_type: ValueType::CostSavings,
                    duration: Duration::Annual,
                },
                CommercialValue {
                    amount: 500_000.0,
                    currency: Currency::Usd,
                    value_type: ValueType::ProductivityGains,
                    duration: Duration::Annual,
                },
            ],
            soft_benefits: vec![
                "Improved supplier relationships".to_string(),
                "Reduced waste footprint".to_string(),
                "Faster reaction to market shifts".to_string(),
            ],
            created_at: Utc::now(),
        },
        UseCase {
            id: "2".to_string(),
            title: "Customer Service Auto-Triage Agent".to_string(),
            description: "Deploy a GenAI-powered triage system for L1 support tickets. The \
                          system will categorize incoming requests, suggest responses to \
                          agents, and fully automate simple queries like 'Reset Password' or \
                          'Order Status'."
                .to_string(),
            domain: "Customer Experience".to_string(),
            stage: Stage::Poc,
            commercial_value: vec![CommercialValue {
                amount: 1_200_000.0,
                currency: Currency::Usd,
                value_type: ValueType::CostSavings,
                duration: Duration::Annual,
            }],
            soft_benefits: vec![
                "Higher agent job satisfaction".to_string(),
                "24/7 instant response availability".to_string(),
                "Consistent tone of voice".to_string(),
            ],
            created_at: Utc::now() - ChronoDuration::days(1),
        },
        UseCase {
            id: "3".to_string(),
            title: "Personalized Marketing Content Engine".to_string(),
            description: "A centralized platform for generating personalized email and ad \
                          copy at scale. Using customer segment data, the engine tailors \
                          messaging to specific demographics, increasing engagement rates."
                .to_string(),
            domain: "Marketing".to_string(),
            stage: Stage::Idea,
            commercial_value: vec![CommercialValue {
                amount: 4_000_000.0,
                currency: Currency::Usd,
                value_type: ValueType::RevenueGrowth,
                duration: Duration::Annual,
            }],
            soft_benefits: vec![
                "Faster campaign time-to-market".to_string(),
                "Brand consistency".to_string(),
                "A/B testing automation".to_string(),
            ],
            created_at: Utc::now() - ChronoDuration::days(2),
        },
    ]
}
