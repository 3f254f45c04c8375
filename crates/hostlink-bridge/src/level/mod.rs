pub mod remote;

use serde_json::Value;

use crate::error::{BridgeError, BridgeResult};

/// The single storage key. Saves are not namespaced by level or user;
/// the most recent write wins.
pub const LEVEL_DATA_KEY: &str = "levelData";

/// Key-value persistence the host page provides (localStorage in a browser).
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Single-slot store for serialized level data.
///
/// The level number on the fetch channel is accepted but does not select a
/// slot; there is exactly one entry.
pub struct LevelStore<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> LevelStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Overwrite the stored payload. The payload is opaque here; it is
    /// decoded only on the way back out.
    pub fn save(&mut self, payload: &str) {
        self.storage.set(&self.key, payload);
    }

    /// Read the stored payload back as structured data.
    /// No prior save is a normal `None`, not an error.
    pub fn load(&self) -> BridgeResult<Option<Value>> {
        match self.storage.get(&self.key) {
            Some(raw) => {
                let value = serde_json::from_str(&raw).map_err(BridgeError::CorruptLevelData)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeStorage {
        entries: HashMap<String, String>,
    }

    impl KeyValueStorage for FakeStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.entries.insert(key.to_string(), value.to_string());
        }
    }

    fn store() -> LevelStore<FakeStorage> {
        LevelStore::new(FakeStorage::default(), LEVEL_DATA_KEY)
    }

    #[test]
    fn round_trip_preserves_structure() {
        let mut store = store();
        store.save(r#"{"level":1,"entities":[{"x":3,"y":4}]}"#);

        let loaded = store.load().unwrap();
        assert_eq!(
            loaded,
            Some(json!({ "level": 1, "entities": [{ "x": 3, "y": 4 }] }))
        );
    }

    #[test]
    fn load_without_save_is_none() {
        let store = store();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn second_write_wins() {
        let mut store = store();
        store.save(r#"{"attempt":1}"#);
        store.save(r#"{"attempt":2}"#);

        assert_eq!(store.load().unwrap(), Some(json!({ "attempt": 2 })));
    }

    #[test]
    fn corrupt_value_is_an_error() {
        let mut store = store();
        store.save("not json {");

        assert!(matches!(
            store.load(),
            Err(BridgeError::CorruptLevelData(_))
        ));
    }
}
