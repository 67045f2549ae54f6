use crate::errors::AppResult;
use crate::store::{self, OWNER_KEY, Store};

/// Display name stamped on new entries.
pub struct Owner {
    store: Box<dyn Store>,
    name: Option<String>,
}

impl Owner {
    pub fn load(store: Box<dyn Store>) -> Self {
        let name: Option<String> = store::load_or_else(store.as_ref(), OWNER_KEY, || None);
        Self { store, name }
    }

    pub fn get(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the name; blank clears it.
    pub fn set(&mut self, name: &str) -> AppResult<()> {
        let name = name.trim();
        let value = (!name.is_empty()).then(|| name.to_string());
        store::save(self.store.as_ref(), OWNER_KEY, &value)?;
        self.name = value;
        Ok(())
    }
}
