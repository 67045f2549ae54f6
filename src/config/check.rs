//! Detect and fill configuration keys missing from an older config file.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn on_disk_mapping(path: &Path, content: &str) -> AppResult<Mapping> {
    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top level is not a mapping",
            path.display()
        ))),
    }
}

/// Default values for every key absent from `content`, in [`Config`] order.
fn missing_defaults(path: &Path, content: &str) -> AppResult<Mapping> {
    let have = on_disk_mapping(path, content)?;
    let Value::Mapping(want) = serde_yaml::to_value(Config::default())? else {
        return Ok(Mapping::new());
    };

    Ok(want
        .into_iter()
        .filter(|(k, _)| !have.contains_key(k))
        .collect())
}

fn key_names(m: &Mapping) -> Vec<String> {
    m.keys()
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect()
}

/// Keys present in the current [`Config`] but absent from the YAML at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(key_names(&missing_defaults(path, &content)?))
}

/// Append every missing key, set to its default, to the config file.
/// Existing text (unknown keys and comments included) is left as is.
/// Returns the keys that were added.
pub fn fill_missing(path: &Path) -> AppResult<Vec<String>> {
    let mut content = fs::read_to_string(path)?;
    let additions = missing_defaults(path, &content)?;
    if additions.is_empty() {
        return Ok(Vec::new());
    }

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&serde_yaml::to_string(&additions)?);
    fs::write(path, content)?;
    Ok(key_names(&additions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_and_fills_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rworklog.conf");
        fs::write(&path, "data_dir: /tmp/rw\nmidnight_policy: reject\n").unwrap();

        let missing = missing_fields(&path).unwrap();
        assert!(missing.contains(&"tick_seconds".to_string()));
        assert!(!missing.contains(&"data_dir".to_string()));

        let added = fill_missing(&path).unwrap();
        assert_eq!(added, missing);
        assert!(missing_fields(&path).unwrap().is_empty());

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("midnight_policy: reject"));
        assert!(text.contains("data_dir: /tmp/rw"));
    }

    #[test]
    fn filling_keeps_comments_and_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rworklog.conf");
        let original = "# my settings\nteam: blue # not ours\ndefault_project: Internal";
        fs::write(&path, original).unwrap();

        let added = fill_missing(&path).unwrap();
        assert!(added.contains(&"tick_seconds".to_string()));

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(original));
        assert!(text.contains("tick_seconds: 1"));

        let cfg: Config = serde_yaml::from_str(&text).unwrap();
        assert_eq!(cfg.default_project, "Internal");
    }

    #[test]
    fn empty_file_gets_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rworklog.conf");
        fs::write(&path, "").unwrap();

        let added = fill_missing(&path).unwrap();
        assert_eq!(added.len(), 5);
        assert!(missing_fields(&path).unwrap().is_empty());
    }

    #[test]
    fn non_mapping_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rworklog.conf");
        fs::write(&path, "- just\n- a list\n").unwrap();

        assert!(matches!(fill_missing(&path), Err(AppError::Config(_))));
    }
}
