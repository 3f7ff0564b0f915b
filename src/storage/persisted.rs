use super::{KeyValueStore, StorageError};

/// Key under which the last search term is stored.
pub const SEARCH_KEY: &str = "search";

/// A single value mirrored into a `KeyValueStore` slot.
///
/// Reads the slot once on creation (falling back to a default when it is
/// missing or empty) and writes every later change straight through.
pub struct PersistedValue<S> {
    store: S,
    key: String,
    value: String,
}

impl<S: KeyValueStore> PersistedValue<S> {
    pub fn hydrate(store: S, key: impl Into<String>, default: impl Into<String>) -> Self {
        let key = key.into();
        let value = store
            .get(&key)
            .filter(|stored| !stored.is_empty())
            .unwrap_or_else(|| default.into());
        Self { store, key, value }
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Updates the value; writes only if it changed.
    ///
    /// The in-memory value is updated even when the write fails.
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), StorageError> {
        let value = value.into();
        if value == self.value {
            return Ok(());
        }
        self.value = value;
        self.store.set(&self.key, &self.value)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn hydrate_uses_stored_value() {
        let value = PersistedValue::hydrate(MemoryStore::with_entry(SEARCH_KEY, "rust"), SEARCH_KEY, "React");
        assert_eq!(value.get(), "rust");
    }

    #[test]
    fn hydrate_falls_back_to_default() {
        let value = PersistedValue::hydrate(MemoryStore::new(), SEARCH_KEY, "React");
        assert_eq!(value.get(), "React");
    }

    #[test]
    fn empty_stored_value_counts_as_missing() {
        let value = PersistedValue::hydrate(MemoryStore::with_entry(SEARCH_KEY, ""), SEARCH_KEY, "React");
        assert_eq!(value.get(), "React");
    }

    #[test]
    fn hydrate_does_not_write() {
        let value = PersistedValue::hydrate(MemoryStore::new(), SEARCH_KEY, "React");
        assert_eq!(value.store().writes(), 0);
    }

    #[test]
    fn set_writes_through() {
        let mut value = PersistedValue::hydrate(MemoryStore::new(), SEARCH_KEY, "React");
        value.set("Rust").unwrap();
        assert_eq!(value.get(), "Rust");
        assert_eq!(value.store().get(SEARCH_KEY).as_deref(), Some("Rust"));
        assert_eq!(value.store().writes(), 1);
    }

    #[test]
    fn unchanged_value_is_not_rewritten() {
        let mut value = PersistedValue::hydrate(MemoryStore::new(), SEARCH_KEY, "React");
        value.set("React").unwrap();
        assert_eq!(value.store().writes(), 0);
    }

    #[test]
    fn empty_value_is_persisted() {
        let mut value = PersistedValue::hydrate(MemoryStore::with_entry(SEARCH_KEY, "x"), SEARCH_KEY, "React");
        value.set("").unwrap();
        assert_eq!(value.store().get(SEARCH_KEY).as_deref(), Some(""));
    }
}
