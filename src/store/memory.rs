use super::Store;
use crate::errors::AppResult;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory store. Clones share the same blobs, so a ledger and a project
/// list built from clones see each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, blob: &str) -> AppResult<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
