use std::{env, path::PathBuf};

use crate::{DEFAULT_ROOT_DIR_NAME, ROOT_DIR_ENV};

pub fn default_root_dir() -> Option<PathBuf> {
    resolve_root_dir(env::var(ROOT_DIR_ENV).ok(), home::home_dir())
}

fn resolve_root_dir(env_override: Option<String>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(raw) = env_override {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    home_dir.map(|home| home.join(DEFAULT_ROOT_DIR_NAME))
}
