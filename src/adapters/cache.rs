use crate::domain::model::PortfolioDraft;
use crate::domain::ports::DraftCache;
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Mirrors the draft as pretty-printed JSON files under a base directory.
/// Cache failures are logged and swallowed; the form never depends on the
/// mirror being intact.
#[derive(Debug, Clone)]
pub struct FileDraftCache {
    base_path: PathBuf,
}

impl FileDraftCache {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    fn write_entry(&self, key: &str, draft: &PortfolioDraft) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        let json = serde_json::to_string_pretty(draft)?;
        fs::write(self.entry_path(key), json)?;
        Ok(())
    }
}

impl DraftCache for FileDraftCache {
    fn set(&self, key: &str, draft: &PortfolioDraft) {
        if let Err(e) = self.write_entry(key, draft) {
            tracing::error!("error saving draft to cache: {}", e);
        }
    }

    fn get(&self, key: &str) -> Option<PortfolioDraft> {
        let path = self.entry_path(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::error!("error reading draft from cache: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(draft) => Some(draft),
            Err(e) => {
                tracing::error!("error decoding cached draft: {}", e);
                None
            }
        }
    }

    fn clear(&self, key: &str) {
        if let Err(e) = fs::remove_file(self.entry_path(key)) {
            if e.kind() != ErrorKind::NotFound {
                tracing::error!("error clearing cached draft: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn draft() -> PortfolioDraft {
        PortfolioDraft {
            name: "Ada".to_string(),
            role: "Engineer".to_string(),
            skills: vec!["rust".to_string()],
            ..PortfolioDraft::default()
        }
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let cache = FileDraftCache::new(dir.path());

        cache.set("draft", &draft());
        let restored = cache.get("draft").unwrap();

        assert_eq!(restored, draft());
    }

    #[test]
    fn test_get_missing_entry_returns_none() {
        let dir = TempDir::new().unwrap();
        let cache = FileDraftCache::new(dir.path());
        assert!(cache.get("absent").is_none());
    }

    #[test]
    fn test_get_corrupt_entry_returns_none() {
        let dir = TempDir::new().unwrap();
        let cache = FileDraftCache::new(dir.path());

        std::fs::write(dir.path().join("draft.json"), "{not json").unwrap();
        assert!(cache.get("draft").is_none());
    }

    #[test]
    fn test_clear_removes_entry_and_tolerates_missing() {
        let dir = TempDir::new().unwrap();
        let cache = FileDraftCache::new(dir.path());

        cache.set("draft", &draft());
        cache.clear("draft");
        assert!(cache.get("draft").is_none());

        // Clearing again is a no-op.
        cache.clear("draft");
    }
}
