//! Unlock ledger stores.
//!
//! The file store keeps every trainer in one pretty-printed JSON document:
//!
//! ```json
//! { "ash": { "challenges": ["bug-steel"], "achievements": ["first", "five"] } }
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashMap;
use pokedream_domain::{RuleId, TrainerId, UnlockLedger};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::sync::Mutex;

use crate::infrastructure::ports::{LedgerRepo, LedgerScope, RepoError};

/// Both ledgers of one trainer as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct TrainerLedgers {
    #[serde(default)]
    challenges: UnlockLedger,
    #[serde(default)]
    achievements: UnlockLedger,
}

impl TrainerLedgers {
    fn scope(&self, scope: LedgerScope) -> &UnlockLedger {
        match scope {
            LedgerScope::Challenges => &self.challenges,
            LedgerScope::Achievements => &self.achievements,
        }
    }

    fn scope_mut(&mut self, scope: LedgerScope) -> &mut UnlockLedger {
        match scope {
            LedgerScope::Challenges => &mut self.challenges,
            LedgerScope::Achievements => &mut self.achievements,
        }
    }
}

type LedgerDocument = BTreeMap<TrainerId, TrainerLedgers>;

/// Ledger store backed by a single JSON file.
///
/// Every operation holds `lock` for its whole read-modify-write cycle, so
/// concurrent grants within one process never lose updates. The file is
/// created on first write.
///
/// Assumes a single writer process. Each save goes through its own uniquely
/// named temp file, so overlapping processes can never publish a half-written
/// document, but the last one to rename wins and may drop the other's grant.
pub struct JsonFileLedgerRepo {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileLedgerRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<LedgerDocument, RepoError> {
        if !fs::try_exists(&self.path)
            .await
            .map_err(|e| RepoError::storage("ledger.load", e))?
        {
            return Ok(LedgerDocument::new());
        }
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| RepoError::storage("ledger.load", e))?;
        if raw.trim().is_empty() {
            return Ok(LedgerDocument::new());
        }
        serde_json::from_str(&raw).map_err(RepoError::serialization)
    }

    async fn save(&self, document: &LedgerDocument) -> Result<(), RepoError> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| RepoError::storage("ledger.save", e))?;
                parent.to_path_buf()
            }
            None => PathBuf::from("."),
        };
        let json = serde_json::to_vec_pretty(document).map_err(RepoError::serialization)?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || replace_file(&dir, &path, &json))
            .await
            .map_err(|e| RepoError::storage("ledger.save", e))?
    }
}

/// Write `contents` to a fresh temp file in `dir`, then rename it over `path`.
fn replace_file(dir: &Path, path: &Path, contents: &[u8]) -> Result<(), RepoError> {
    let mut tmp =
        NamedTempFile::new_in(dir).map_err(|e| RepoError::storage("ledger.save", e))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| RepoError::storage("ledger.save", e))?;
    tmp.persist(path)
        .map_err(|e| RepoError::storage("ledger.save", e.error))?;
    Ok(())
}

#[async_trait]
impl LedgerRepo for JsonFileLedgerRepo {
    async fn get(&self, trainer: &TrainerId, scope: LedgerScope) -> Result<UnlockLedger, RepoError> {
        let _guard = self.lock.lock().await;
        let document = self.load().await?;
        Ok(document
            .get(trainer)
            .map(|ledgers| ledgers.scope(scope).clone())
            .unwrap_or_default())
    }

    async fn grant(
        &self,
        trainer: &TrainerId,
        scope: LedgerScope,
        ids: &[RuleId],
    ) -> Result<usize, RepoError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;
        let added = document
            .entry(trainer.clone())
            .or_default()
            .scope_mut(scope)
            .grant(ids.iter().cloned());

        if added > 0 {
            self.save(&document).await?;
        }
        tracing::debug!(
            trainer_id = %trainer,
            scope = %scope,
            added,
            path = %self.path.display(),
            "Ledger grant persisted"
        );
        Ok(added)
    }
}

/// Process-local ledger store. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryLedgerRepo {
    ledgers: DashMap<(TrainerId, LedgerScope), UnlockLedger>,
}

impl InMemoryLedgerRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerRepo for InMemoryLedgerRepo {
    async fn get(&self, trainer: &TrainerId, scope: LedgerScope) -> Result<UnlockLedger, RepoError> {
        Ok(self
            .ledgers
            .get(&(trainer.clone(), scope))
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn grant(
        &self,
        trainer: &TrainerId,
        scope: LedgerScope,
        ids: &[RuleId],
    ) -> Result<usize, RepoError> {
        let mut entry = self.ledgers.entry((trainer.clone(), scope)).or_default();
        Ok(entry.grant(ids.iter().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<RuleId> {
        raw.iter().map(|id| RuleId::new(*id)).collect()
    }

    #[tokio::test]
    async fn file_store_starts_empty_and_creates_file_on_grant() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileLedgerRepo::new(dir.path().join("nested").join("ledger.json"));
        let ash = TrainerId::new("ash");

        assert!(repo.get(&ash, LedgerScope::Achievements).await.unwrap().is_empty());
        assert!(!repo.path().exists());

        let added = repo
            .grant(&ash, LedgerScope::Achievements, &ids(&["first", "five"]))
            .await
            .unwrap();

        assert_eq!(added, 2);
        assert!(repo.path().exists());
    }

    #[tokio::test]
    async fn file_store_grant_is_idempotent_and_scoped() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileLedgerRepo::new(dir.path().join("ledger.json"));
        let ash = TrainerId::new("ash");

        repo.grant(&ash, LedgerScope::Challenges, &ids(&["bug-steel"]))
            .await
            .unwrap();
        let again = repo
            .grant(&ash, LedgerScope::Challenges, &ids(&["bug-steel"]))
            .await
            .unwrap();

        assert_eq!(again, 0);
        assert!(repo
            .get(&ash, LedgerScope::Challenges)
            .await
            .unwrap()
            .contains("bug-steel"));
        assert!(repo
            .get(&ash, LedgerScope::Achievements)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        let misty = TrainerId::new("misty");

        JsonFileLedgerRepo::new(&path)
            .grant(&misty, LedgerScope::Achievements, &ids(&["shiny"]))
            .await
            .unwrap();

        let reopened = JsonFileLedgerRepo::new(&path);
        let ledger = reopened.get(&misty, LedgerScope::Achievements).await.unwrap();
        assert_eq!(ledger.len(), 1);

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["misty"]["achievements"], serde_json::json!(["shiny"]));
        assert_eq!(value["misty"]["challenges"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn file_store_rejects_corrupt_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, "not json").unwrap();

        let repo = JsonFileLedgerRepo::new(&path);
        let result = repo.get(&TrainerId::new("ash"), LedgerScope::Challenges).await;

        assert!(matches!(result, Err(RepoError::Serialization(_))));
    }

    #[tokio::test]
    async fn concurrent_grants_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let repo = std::sync::Arc::new(JsonFileLedgerRepo::new(dir.path().join("ledger.json")));
        let brock = TrainerId::new("brock");

        let mut handles = Vec::new();
        for id in ["first", "five", "ten", "shiny"] {
            let repo = repo.clone();
            let brock = brock.clone();
            handles.push(tokio::spawn(async move {
                repo.grant(&brock, LedgerScope::Achievements, &[RuleId::new(id)])
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let ledger = repo.get(&brock, LedgerScope::Achievements).await.unwrap();
        assert_eq!(ledger.len(), 4);
    }

    #[tokio::test]
    async fn save_leaves_no_temp_files_and_ignores_stale_ones() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        let stale = dir.path().join("ledger.json.tmp");
        std::fs::write(&stale, "{ half written").unwrap();

        let repo = JsonFileLedgerRepo::new(&path);
        let ash = TrainerId::new("ash");
        repo.grant(&ash, LedgerScope::Challenges, &ids(&["bug-steel"]))
            .await
            .unwrap();
        repo.grant(&ash, LedgerScope::Achievements, &ids(&["first"]))
            .await
            .unwrap();

        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["ledger.json", "ledger.json.tmp"]);
        assert_eq!(std::fs::read_to_string(&stale).unwrap(), "{ half written");
        assert_eq!(repo.get(&ash, LedgerScope::Challenges).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn separate_stores_on_one_file_never_publish_partial_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        let first = std::sync::Arc::new(JsonFileLedgerRepo::new(&path));
        let second = std::sync::Arc::new(JsonFileLedgerRepo::new(&path));

        let mut handles = Vec::new();
        for (n, repo) in [first.clone(), second.clone()].into_iter().cycle().take(16).enumerate() {
            handles.push(tokio::spawn(async move {
                let trainer = TrainerId::new(format!("trainer-{n}"));
                repo.grant(&trainer, LedgerScope::Achievements, &[RuleId::new("first")])
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        // Grants may be lost across stores, but every read parses
        let raw = std::fs::read_to_string(&path).unwrap();
        let document: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(document.as_object().is_some_and(|trainers| !trainers.is_empty()));
    }

    #[tokio::test]
    async fn in_memory_store_tracks_scopes_per_trainer() {
        let repo = InMemoryLedgerRepo::new();
        let ash = TrainerId::new("ash");
        let misty = TrainerId::new("misty");

        assert_eq!(
            repo.grant(&ash, LedgerScope::Achievements, &ids(&["first", "first"]))
                .await
                .unwrap(),
            1
        );

        assert!(repo.get(&ash, LedgerScope::Achievements).await.unwrap().contains("first"));
        assert!(repo.get(&ash, LedgerScope::Challenges).await.unwrap().is_empty());
        assert!(repo.get(&misty, LedgerScope::Achievements).await.unwrap().is_empty());
    }
}
