use anyhow::{Context, Result};
use model::AppSettings;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Settings store over one JSON document; bundled defaults are written on
/// first access and served when the file is corrupt.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn get(&self) -> Result<AppSettings> {
        self.ensure_file().await?;

        let data = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;

        match serde_json::from_str(&data) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                warn!(error = %err, path = %self.path.display(), "settings corrupt, serving defaults");
                Ok(AppSettings::default())
            }
        }
    }

    pub async fn set(&self, settings: &AppSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(settings).context("failed to serialize settings")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    async fn ensure_file(&self) -> Result<()> {
        if tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(());
        }
        self.set(&AppSettings::default()).await
    }
}

/// Default location of the settings file under a data directory.
pub fn settings_file(data_dir: &Path) -> PathBuf {
    data_dir.join("settings.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn first_access_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(settings_file(dir.path()));

        let settings = store.get().await.unwrap();
        assert_eq!(settings, AppSettings::default());
        assert!(settings.domains.contains(&"Supply Chain".to_string()));
        assert!(tokio::fs::try_exists(settings_file(dir.path())).await.unwrap());
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(settings_file(dir.path()));

        let custom = AppSettings {
            domains: vec!["Logistics".to_string()],
            currencies: vec!["USD".to_string()],
        };
        store.set(&custom).await.unwrap();
        assert_eq!(store.get().await.unwrap(), custom);
    }

    #[tokio::test]
    async fn corrupt_settings_serve_defaults() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(settings_file(dir.path()), "oops")
            .await
            .unwrap();

        let store = SettingsStore::new(settings_file(dir.path()));
        assert_eq!(store.get().await.unwrap(), AppSettings::default());
    }
}
