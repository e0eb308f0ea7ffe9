use crate::error::{Result, StoreError};
use crate::models::VocabularyStore;
use serde_json;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read the whole store. A missing or unreadable file yields an empty store.
pub fn load(path: &Path) -> VocabularyStore {
    if !path.exists() {
        debug!(path = %path.display(), "no data file yet, starting empty");
        return VocabularyStore::new();
    }
    let s = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read data file, starting empty");
            return VocabularyStore::new();
        }
    };
    match serde_json::from_str::<VocabularyStore>(&s) {
        Ok(store) => {
            debug!(path = %path.display(), users = store.users().count(), "loaded store");
            store
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "data file is not a valid store, starting empty");
            VocabularyStore::new()
        }
    }
}

/// Overwrite the backing file with the whole store.
///
/// The document goes to a sibling temp file first and is then renamed over
/// `path`, so a crash mid-write leaves the previous version intact. There is
/// no locking: two processes saving the same file lose each other's updates.
pub fn save(path: &Path, store: &VocabularyStore) -> Result<()> {
    let s = serde_json::to_string_pretty(store)?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("data.json");
    let tmp = path.with_file_name(format!(".{}.tmp", file_name));

    fs::write(&tmp, s).map_err(|e| StoreError::write(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::write(path, e));
    }
    debug!(path = %path.display(), "saved store");
    Ok(())
}
