use super::Store;
use crate::errors::AppResult;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One `<key>.json` file per blob inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Store for FileStore {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, blob: &str) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;

        // scrittura atomica: file temporaneo + rename
        let target = self.blob_path(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }
}
