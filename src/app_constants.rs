pub const MAIN_WINDOW_LABEL: &str = "main";
pub const MAIN_WINDOW_TITLE: &str = "Audio Forms";
pub const MAIN_WINDOW_WIDTH: f64 = 1280.0;
pub const MAIN_WINDOW_HEIGHT: f64 = 720.0;
pub const MAIN_WINDOW_MIN_WIDTH: f64 = 800.0;
pub const MAIN_WINDOW_MIN_HEIGHT: f64 = 600.0;
pub const DEFAULT_VIEW_ENTRY: &str = "index.html";

pub const CONFIRM_EXIT_CHANNEL: &str = "confirm-exit";
pub const CONFIRM_EXIT_COMMAND: &str = "confirm_exit";
pub const CONFIRM_EXIT_DIALOG_TITLE: &str = "Exit Application";

pub const DESKTOP_LOG_FILE: &str = "desktop.log";
pub const DESKTOP_LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;
pub const DEFAULT_ROOT_DIR_NAME: &str = ".audio-forms";

pub const ROOT_DIR_ENV: &str = "AUDIO_FORMS_ROOT";
pub const VIEW_ENTRY_ENV: &str = "AUDIO_FORMS_VIEW_ENTRY";
