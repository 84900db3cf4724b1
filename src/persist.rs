use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;

/// Best-effort string-keyed JSON storage for small UI state (the session
/// flag, column preferences).
///
/// Implementations never surface errors to callers: an unavailable or
/// corrupt backing store degrades to defaults and writes become no-ops,
/// logged at warn level.
pub trait Persistence: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value);
    fn remove(&self, key: &str);
}

/// Single JSON document on disk.
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, Value>>,
}

impl FileStore {
    /// Open the backing file, falling back to an empty document when it is
    /// missing, unreadable, or not valid JSON.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!("ignoring unparsable state file {}: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    fn flush(&self, values: &BTreeMap<String, Value>) {
        let raw = match serde_json::to_string_pretty(values) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("failed to serialize state file: {e}");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, raw) {
            tracing::warn!("failed to write state file {}: {e}", self.path.display());
        }
    }
}

impl Persistence for FileStore {
    fn get(&self, key: &str) -> Option<Value> {
        match self.values.lock() {
            Ok(values) => values.get(key).cloned(),
            Err(_) => None,
        }
    }

    fn set(&self, key: &str, value: Value) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value);
            self.flush(&values);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
            self.flush(&values);
        }
    }
}

/// Keeps values for the process lifetime only. Used in tests and as the
/// fallback when no writable state location exists.
#[derive(Default)]
pub struct Ephemeral {
    values: Mutex<BTreeMap<String, Value>>,
}

impl Ephemeral {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Persistence for Ephemeral {
    fn get(&self, key: &str) -> Option<Value> {
        match self.values.lock() {
            Ok(values) => values.get(key).cloned(),
            Err(_) => None,
        }
    }

    fn set(&self, key: &str, value: Value) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("friday-five-{}-{}.json", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn file_store_round_trips_values() {
        let path = scratch_file("roundtrip");
        let store = FileStore::open(&path);
        store.set("flag", json!(true));
        store.set("prefs", json!({"name": false}));

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("flag"), Some(json!(true)));
        assert_eq!(reopened.get("prefs"), Some(json!({"name": false})));

        reopened.remove("flag");
        let again = FileStore::open(&path);
        assert_eq!(again.get("flag"), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unparsable_state_file_falls_back_to_empty() {
        let path = scratch_file("corrupt");
        fs::write(&path, "not json {{{").unwrap();
        let store = FileStore::open(&path);
        assert_eq!(store.get("anything"), None);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let store = FileStore::open(scratch_file("missing"));
        assert_eq!(store.get("flag"), None);
    }

    #[test]
    fn ephemeral_store_behaves_like_a_map() {
        let store = Ephemeral::new();
        assert_eq!(store.get("k"), None);
        store.set("k", json!(1));
        assert_eq!(store.get("k"), Some(json!(1)));
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }
}
