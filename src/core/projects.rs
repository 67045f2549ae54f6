use crate::errors::AppResult;
use crate::store::{self, PROJECTS_KEY, Store};

pub const DEFAULT_PROJECT: &str = "General";

/// Ordered, duplicate-free list of project names. Names are only ever added.
pub struct ProjectList {
    store: Box<dyn Store>,
    names: Vec<String>,
}

impl ProjectList {
    pub fn load(store: Box<dyn Store>) -> Self {
        let names: Vec<String> = store::load_or_else(store.as_ref(), PROJECTS_KEY, || {
            vec![DEFAULT_PROJECT.to_string()]
        });
        Self { store, names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name.trim())
    }

    /// Add `name` unless it is blank or already present; `true` when added.
    pub fn add(&mut self, name: &str) -> AppResult<bool> {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return Ok(false);
        }

        self.names.push(name.to_string());
        if let Err(e) = store::save(self.store.as_ref(), PROJECTS_KEY, &self.names) {
            self.names.pop();
            return Err(e);
        }
        tracing::debug!(project = name, "project added");
        Ok(true)
    }
}
