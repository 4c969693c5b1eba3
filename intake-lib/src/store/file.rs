//! File-backed draft store.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use formkit::FormDraft;

use super::DraftStore;
use crate::error::StoreError;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "havenpath";
const APPLICATION: &str = "intake";

/// Draft store persisting one JSON file per key.
///
/// Saves write to a temporary sibling and rename it into place, so a
/// draft on disk is always a complete value. Keys map to `<key>.json`
/// inside the store directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on the
    /// first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store in the platform data directory
    /// (XDG on Linux, standard locations on macOS/Windows).
    pub fn default_location() -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
            StoreError::Unavailable("no home directory for draft storage".to_string())
        })?;
        Ok(Self::new(dirs.data_dir().join("drafts")))
    }

    /// The directory drafts are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers, but keep filenames tame anyway.
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl DraftStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<FormDraft>, StoreError> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, key: &str, draft: &FormDraft) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(draft)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::INTAKE_DRAFT_KEY;

    fn temp_store(tag: &str) -> FileStore {
        let dir = std::env::temp_dir().join(format!("intake-filestore-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        FileStore::new(dir)
    }

    #[test]
    fn test_round_trip_through_disk() {
        let store = temp_store("roundtrip");
        let mut draft = FormDraft::new();
        draft.set_text("fullName", "Ada Lovelace");
        draft.set_many("contactMethod", ["Email", "Phone"]);
        draft.set_bool("consent", true);

        store.save(INTAKE_DRAFT_KEY, &draft).unwrap();
        let loaded = store.load(INTAKE_DRAFT_KEY).unwrap().unwrap();
        assert_eq!(loaded, draft);

        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn test_missing_file_is_none() {
        let store = temp_store("missing");
        assert!(store.load(INTAKE_DRAFT_KEY).unwrap().is_none());
    }

    #[test]
    fn test_clear_then_load_is_none() {
        let store = temp_store("clear");
        let draft = FormDraft::new();
        store.save(INTAKE_DRAFT_KEY, &draft).unwrap();
        store.clear(INTAKE_DRAFT_KEY).unwrap();
        assert!(store.load(INTAKE_DRAFT_KEY).unwrap().is_none());

        let _ = fs::remove_dir_all(store.dir());
    }
}
