use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of interval recorded in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Work,
    Break,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Break => "break",
        }
    }

    /// Human label used in tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Break => "Break",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
