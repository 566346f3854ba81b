use std::{
    env,
    path::{Component, Path, PathBuf},
};

use crate::{
    error::ShellError, DEFAULT_VIEW_ENTRY, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL,
    MAIN_WINDOW_MIN_HEIGHT, MAIN_WINDOW_MIN_WIDTH, MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH,
    VIEW_ENTRY_ENV,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MainWindowConfig {
    pub(crate) label: &'static str,
    pub(crate) title: &'static str,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) min_width: f64,
    pub(crate) min_height: f64,
    pub(crate) resizable: bool,
    pub(crate) show_menu: bool,
    pub(crate) view_entry: PathBuf,
}

impl Default for MainWindowConfig {
    fn default() -> Self {
        Self {
            label: MAIN_WINDOW_LABEL,
            title: MAIN_WINDOW_TITLE,
            width: MAIN_WINDOW_WIDTH,
            height: MAIN_WINDOW_HEIGHT,
            min_width: MAIN_WINDOW_MIN_WIDTH,
            min_height: MAIN_WINDOW_MIN_HEIGHT,
            resizable: true,
            show_menu: false,
            view_entry: PathBuf::from(DEFAULT_VIEW_ENTRY),
        }
    }
}

impl MainWindowConfig {
    pub(crate) fn from_env<F>(log: F) -> Self
    where
        F: Fn(&str),
    {
        let mut config = Self::default();
        if let Ok(raw) = env::var(VIEW_ENTRY_ENV) {
            match resolve_view_entry(&raw) {
                Ok(entry) => {
                    log(&format!("using view entry override: {}", entry.display()));
                    config.view_entry = entry;
                }
                Err(error) => log(&format!("{error}; falling back to {DEFAULT_VIEW_ENTRY}")),
            }
        }
        config
    }
}

pub(crate) fn resolve_view_entry(raw: &str) -> Result<PathBuf, ShellError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(PathBuf::from(DEFAULT_VIEW_ENTRY));
    }

    let candidate = Path::new(trimmed);
    let stays_inside_view_dir = candidate
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
    if !stays_inside_view_dir {
        return Err(ShellError::InvalidViewEntry(trimmed.to_string()));
    }

    Ok(candidate.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_shell_window_geometry() {
        let config = MainWindowConfig::default();
        assert_eq!(config.label, "main");
        assert_eq!((config.width, config.height), (1280.0, 720.0));
        assert_eq!((config.min_width, config.min_height), (800.0, 600.0));
        assert!(config.resizable);
        assert!(!config.show_menu);
        assert_eq!(config.view_entry, PathBuf::from("index.html"));
    }

    #[test]
    fn resolve_view_entry_accepts_nested_relative_path() {
        assert_eq!(
            resolve_view_entry(" pages/home.html ").expect("valid entry"),
            PathBuf::from("pages/home.html")
        );
    }

    #[test]
    fn resolve_view_entry_uses_default_for_blank_value() {
        assert_eq!(
            resolve_view_entry("  ").expect("blank falls back"),
            PathBuf::from(DEFAULT_VIEW_ENTRY)
        );
    }

    #[test]
    fn resolve_view_entry_rejects_escaping_paths() {
        assert!(matches!(
            resolve_view_entry("../outside.html"),
            Err(ShellError::InvalidViewEntry(_))
        ));
        assert!(matches!(
            resolve_view_entry("/etc/passwd"),
            Err(ShellError::InvalidViewEntry(_))
        ));
    }
}
