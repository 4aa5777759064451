use dirs::config_dir;
use std::{fs, path::Path, path::PathBuf};

const APP_DIR: &str = "zg-kultura";

pub fn config_root() -> PathBuf {
    let base = config_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    base.join(APP_DIR)
}

pub fn config_path() -> PathBuf {
    config_root().join("config.json")
}

pub fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
