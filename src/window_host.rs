use tauri::{AppHandle, Manager};

use crate::{append_window_log, error::ShellError, main_window, window_config::MainWindowConfig};

/// The slice of the host runtime the lifecycle controller is allowed to touch.
///
/// The host stays the single source of truth for how many windows are open;
/// callers query it instead of keeping a counter of their own.
pub(crate) trait WindowHost {
    fn open_window_count(&self) -> usize;

    fn has_window(&self, label: &str) -> bool;

    fn create_main_window(&self, config: &MainWindowConfig) -> Result<(), ShellError>;
}

impl WindowHost for AppHandle {
    fn open_window_count(&self) -> usize {
        self.webview_windows().len()
    }

    fn has_window(&self, label: &str) -> bool {
        self.get_webview_window(label).is_some()
    }

    fn create_main_window(&self, config: &MainWindowConfig) -> Result<(), ShellError> {
        main_window::build_main_window(self, config, append_window_log)
    }
}
