use crate::{logging, runtime_paths, DESKTOP_LOG_FILE, DESKTOP_LOG_MAX_BYTES};

fn append_categorized_log(category: logging::LogCategory, message: &str) {
    if cfg!(debug_assertions) {
        eprintln!("[{}] {}", category.tag(), message);
    }

    let log_path =
        logging::resolve_desktop_log_path(runtime_paths::default_root_dir(), DESKTOP_LOG_FILE);
    if let Err(error) =
        logging::append_log_line(&log_path, category, message, DESKTOP_LOG_MAX_BYTES)
    {
        eprintln!("{error}");
    }
}

pub fn append_desktop_log(message: &str) {
    append_categorized_log(logging::LogCategory::Desktop, message);
}

pub fn append_startup_log(message: &str) {
    append_categorized_log(logging::LogCategory::Startup, message);
}

pub fn append_window_log(message: &str) {
    append_categorized_log(logging::LogCategory::Window, message);
}

pub fn append_dialog_log(message: &str) {
    append_categorized_log(logging::LogCategory::Dialog, message);
}

pub fn append_shutdown_log(message: &str) {
    append_categorized_log(logging::LogCategory::Shutdown, message);
}
