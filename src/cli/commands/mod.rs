pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod owner;
pub mod project;
pub mod summary;
pub mod timer;

use crate::config::Config;
use crate::core::{Ledger, Owner, ProjectList};
use crate::errors::AppResult;
use crate::models::{Category, EntryDraft};
use crate::store::FileStore;

/// State shared by the commands, restored from the data directory.
pub struct Session {
    pub ledger: Ledger,
    pub projects: ProjectList,
    pub owner: Owner,
}

impl Session {
    pub fn open(cfg: &Config) -> Self {
        let store = FileStore::new(cfg.data_path());
        tracing::debug!(dir = %store.dir().display(), "opening session");

        Self {
            ledger: Ledger::load(Box::new(store.clone())).with_policy(cfg.midnight_policy),
            projects: ProjectList::load(Box::new(store.clone())),
            owner: Owner::load(Box::new(store)),
        }
    }

    /// Draft prefilled from command options, falling back to the stored
    /// owner and the configured project/category. Start and end stay empty.
    pub fn template(
        &self,
        cfg: &Config,
        date: Option<&str>,
        project: Option<&str>,
        category: Option<Category>,
        owner: Option<&str>,
    ) -> EntryDraft {
        EntryDraft {
            owner: owner.or(self.owner.get()).unwrap_or_default().to_string(),
            date: date.unwrap_or_default().to_string(),
            project: project.unwrap_or(&cfg.default_project).to_string(),
            category: category.unwrap_or(cfg.default_category),
            ..Default::default()
        }
    }

    /// Register the project of a recorded entry when it is new.
    pub fn remember_project(&mut self, project: &str) -> AppResult<()> {
        if self.projects.add(project)? {
            crate::ui::messages::info(format!("New project '{}' added to the list.", project.trim()));
        }
        Ok(())
    }
}
