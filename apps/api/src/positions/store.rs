use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::sync::RwLock;
use tracing::info;

use crate::positions::{default_positions, PositionConfig};

/// JSON-file backed map of position name -> `PositionConfig`.
///
/// Reads are served from memory; every upsert rewrites the whole file.
pub struct PositionStore {
    path: PathBuf,
    positions: RwLock<BTreeMap<String, PositionConfig>>,
}

impl PositionStore {
    /// Loads positions from `path`, seeding the file with the defaults when it
    /// does not exist yet.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let positions = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read positions file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Malformed positions file {}", path.display()))?
        } else {
            let defaults: BTreeMap<_, _> = default_positions().into_iter().collect();
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, serde_json::to_string_pretty(&defaults)?)
                .with_context(|| format!("Failed to seed positions file {}", path.display()))?;
            info!("Seeded default positions at {}", path.display());
            defaults
        };

        info!("Loaded {} positions", positions.len());
        Ok(Self {
            path,
            positions: RwLock::new(positions),
        })
    }

    pub async fn get(&self, name: &str) -> Option<PositionConfig> {
        self.positions.read().await.get(name).cloned()
    }

    /// All positions, sorted by name.
    pub async fn list(&self) -> Vec<(String, PositionConfig)> {
        self.positions
            .read()
            .await
            .iter()
            .map(|(name, config)| (name.clone(), config.clone()))
            .collect()
    }

    /// Inserts or replaces a position and persists the full map.
    /// Returns `true` when the position was newly created.
    ///
    /// Callers validate the definition first; the store only persists.
    pub async fn upsert(&self, name: &str, config: PositionConfig) -> Result<bool> {
        let mut positions = self.positions.write().await;

        // Memory only changes once the file write has succeeded.
        let mut updated = positions.clone();
        let created = updated.insert(name.to_string(), config).is_none();

        let json = serde_json::to_string_pretty(&updated)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write positions file {}", self.path.display()))?;
        *positions = updated;

        info!(
            "Position '{name}' {}",
            if created { "created" } else { "updated" }
        );
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positions::Question;

    fn sample() -> PositionConfig {
        PositionConfig {
            required_skills: vec!["Rust".to_string()],
            preferred_skills: vec![],
            technical: vec![Question::new("Ownership?", &["borrow"])],
            behavioral: vec![Question::new("Feedback?", &["listen"])],
            experience_threshold: 1,
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_seeded_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("positions.json");

        let store = PositionStore::load(&path).unwrap();
        assert!(path.exists());

        let names: Vec<String> = store.list().await.into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Data Scientist", "Software Engineer"]);

        let ds = store.get("Data Scientist").await.unwrap();
        assert_eq!(ds.experience_threshold, 2);
        assert_eq!(ds.required_skills[0], "Python");
    }

    #[tokio::test]
    async fn test_upsert_persists_across_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positions.json");

        let store = PositionStore::load(&path).unwrap();
        assert!(store.upsert("Rust Engineer", sample()).await.unwrap());
        assert!(!store.upsert("Rust Engineer", sample()).await.unwrap());

        let reloaded = PositionStore::load(&path).unwrap();
        assert_eq!(reloaded.get("Rust Engineer").await, Some(sample()));
        assert_eq!(reloaded.list().await.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_positions_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        let store = PositionStore::load(nested.join("positions.json")).unwrap();
        std::fs::remove_dir_all(&nested).unwrap();

        assert!(store.upsert("Ghost", sample()).await.is_err());
        assert!(store.get("Ghost").await.is_none());
        assert_eq!(store.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_existing_camel_case_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positions.json");
        std::fs::write(
            &path,
            r#"{"QA": {"requiredSkills": ["Selenium"], "preferredSkills": [],
                "technical": [], "behavioral": [], "experienceThreshold": 1}}"#,
        )
        .unwrap();

        let store = PositionStore::load(&path).unwrap();
        let qa = store.get("QA").await.unwrap();
        assert_eq!(qa.required_skills, vec!["Selenium"]);
        assert!(store.get("Data Scientist").await.is_none());
    }

    #[test]
    fn test_malformed_file_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positions.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(PositionStore::load(&path).is_err());
    }
}
