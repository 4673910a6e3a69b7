use anyhow::{Context, Result};
use model::{seed_cases, CasePatch, UseCase};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Record store over one JSON document. Whole-file read-modify-write, last
/// writer wins; no locking and no concurrency token.
pub struct CaseStore {
    path: PathBuf,
}

impl CaseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the full record set. A missing file is seeded with the bundled
    /// examples; a corrupt file yields the seed in place; a file holding an
    /// empty array is reseeded.
    pub async fn list(&self) -> Result<Vec<UseCase>> {
        self.ensure_file().await?;

        let data = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;

        match serde_json::from_str::<Vec<UseCase>>(&data) {
            Ok(cases) if cases.is_empty() => {
                // Repair files that were initialized empty
                let seed = seed_cases();
                self.write_all(&seed).await?;
                Ok(seed)
            }
            Ok(cases) => Ok(cases),
            Err(err) => {
                warn!(error = %err, path = %self.path.display(), "record store corrupt, serving seed");
                Ok(seed_cases())
            }
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<UseCase>> {
        let cases = self.list().await?;
        Ok(cases.into_iter().find(|c| c.id == id))
    }

    pub async fn create(&self, case: UseCase) -> Result<()> {
        let mut cases = self.list().await?;
        cases.push(case);
        self.write_all(&cases).await
    }

    /// Shallow-merge the patch over the stored record. Returns the updated
    /// record, or `None` if the id is unknown.
    pub async fn update(&self, id: &str, patch: CasePatch) -> Result<Option<UseCase>> {
        let mut cases = self.list().await?;
        let Some(case) = cases.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        patch.apply(case);
        let updated = case.clone();
        self.write_all(&cases).await?;
        Ok(Some(updated))
    }

    /// Hard delete, no tombstone. Returns whether the id existed.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let mut cases = self.list().await?;
        let before = cases.len();
        cases.retain(|c| c.id != id);
        if cases.len() == before {
            return Ok(false);
        }
        self.write_all(&cases).await?;
        Ok(true)
    }

    async fn ensure_file(&self) -> Result<()> {
        if tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        self.write_all(&seed_cases()).await
    }

    async fn write_all(&self, cases: &[UseCase]) -> Result<()> {
        let json = serde_json::to_string_pretty(cases).context("failed to serialize records")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

/// Default location of the record file under a data directory.
pub fn case_file(data_dir: &Path) -> PathBuf {
    data_dir.join("use-cases.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Stage;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> CaseStore {
        CaseStore::new(case_file(dir.path()))
    }

    #[tokio::test]
    async fn missing_file_is_seeded() {
        let dir = TempDir::new().unwrap();
        let cases = store(&dir).list().await.unwrap();
        assert_eq!(cases.len(), 3);
        assert!(tokio::fs::try_exists(case_file(dir.path())).await.unwrap());
    }

    #[tokio::test]
    async fn corrupt_file_serves_seed_in_place() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(case_file(dir.path()), "{ not json")
            .await
            .unwrap();

        let cases = store(&dir).list().await.unwrap();
        assert_eq!(cases.len(), 3);
        // The corrupt file is left alone, not overwritten
        let raw = tokio::fs::read_to_string(case_file(dir.path())).await.unwrap();
        assert_eq!(raw, "{ not json");
    }

    #[tokio::test]
    async fn empty_array_is_reseeded() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(case_file(dir.path()), "[]").await.unwrap();

        let cases = store(&dir).list().await.unwrap();
        assert_eq!(cases.len(), 3);
        let raw = tokio::fs::read_to_string(case_file(dir.path())).await.unwrap();
        assert_ne!(raw, "[]");
    }

    #[tokio::test]
    async fn create_get_delete_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let case = UseCase::skeleton();
        let id = case.id.clone();
        store.create(case).await.unwrap();

        let found = store.get(&id).await.unwrap();
        assert!(found.is_some());

        assert!(store.delete(&id).await.unwrap());
        assert!(store.get(&id).await.unwrap().is_none());
        assert!(!store.delete(&id).await.unwrap());
    }

    #[tokio::test]
    async fn update_merges_only_present_fields() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let case = UseCase::skeleton();
        let id = case.id.clone();
        store.create(case).await.unwrap();

        let patch = CasePatch {
            stage: Some(Stage::Mvp),
            ..CasePatch::default()
        };
        let updated = store.update(&id, patch).await.unwrap().unwrap();
        assert_eq!(updated.stage, Stage::Mvp);
        assert_eq!(updated.title, "Untitled Strategy");

        // Persisted, not just returned
        let reloaded = store.get(&id).await.unwrap().unwrap();
        assert_eq!(reloaded.stage, Stage::Mvp);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_none() {
        let dir = TempDir::new().unwrap();
        let updated = store(&dir)
            .update("no-such-id", CasePatch::default())
            .await
            .unwrap();
        assert!(updated.is_none());
    }
}
