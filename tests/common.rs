#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn rwl() -> Command {
    cargo_bin_cmd!("rworklog")
}

/// Isolated HOME + data directory for one test.
pub struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temp home"),
        }
    }

    pub fn home(&self) -> PathBuf {
        self.home.path().to_path_buf()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.home.path().join("data")
    }

    pub fn out(&self, name: &str) -> String {
        self.home.path().join(name).to_string_lossy().to_string()
    }

    /// Command bound to this sandbox, config file never written.
    pub fn cmd(&self) -> Command {
        let mut c = self.bare();
        c.args(["--data-dir", &self.data_dir().to_string_lossy(), "--test"]);
        c
    }

    /// Command with only HOME redirected.
    pub fn bare(&self) -> Command {
        let mut c = rwl();
        c.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .env_remove("RUST_LOG");
        c
    }

    pub fn write_config(&self, yaml: &str) {
        let dir = self.home.path().join(".rworklog");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("rworklog.conf"), yaml).expect("write config");
    }

    pub fn blob(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.data_dir().join(format!("{key}.json"))).ok()
    }

    pub fn entries(&self) -> Vec<serde_json::Value> {
        self.blob("entries")
            .map(|s| serde_json::from_str(&s).expect("entries.json is valid JSON"))
            .unwrap_or_default()
    }

    pub fn add(&self, date: &str, start: &str, end: &str, category: &str) {
        self.cmd()
            .args([
                "add",
                "--date",
                date,
                "--in",
                start,
                "--out",
                end,
                "--category",
                category,
            ])
            .assert()
            .success();
    }

    /// The three-interval workday: 8h work, 30m break.
    pub fn add_workday(&self, date: &str) {
        self.add(date, "09:00", "12:00", "work");
        self.add(date, "12:00", "12:30", "break");
        self.add(date, "12:30", "17:30", "work");
    }
}

/// XML text of one part of an exported workbook.
pub fn xlsx_part(path: &Path, name: &str) -> String {
    let file = fs::File::open(path).expect("open workbook");
    let mut archive = zip::ZipArchive::new(file).expect("workbook is a zip container");
    let mut xml = String::new();
    archive
        .by_name(name)
        .expect("workbook part present")
        .read_to_string(&mut xml)
        .expect("part is UTF-8");
    xml
}
