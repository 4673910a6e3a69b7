pub mod case;
pub mod seed;
pub mod settings;

pub use case::{
    CaseDraft, CasePatch, CommercialValue, Currency, Duration, Stage, UseCase, ValueType,
};
pub use seed::seed_cases;
pub use settings::AppSettings;
