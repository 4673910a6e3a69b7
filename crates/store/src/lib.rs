pub mod cases;
pub mod settings;

pub use cases::{case_file, CaseStore};
pub use settings::{settings_file, SettingsStore};
