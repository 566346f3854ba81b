use std::{
    env, fs,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{error::ShellError, DEFAULT_ROOT_DIR_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Desktop,
    Startup,
    Window,
    Dialog,
    Shutdown,
}

impl LogCategory {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Startup => "startup",
            Self::Window => "window",
            Self::Dialog => "dialog",
            Self::Shutdown => "shutdown",
        }
    }
}

pub fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    let root = root_dir.unwrap_or_else(|| env::temp_dir().join(DEFAULT_ROOT_DIR_NAME));
    root.join("logs").join(file_name)
}

pub fn format_log_line(category: LogCategory, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        category.tag(),
        message
    )
}

fn rotated_log_path(log_path: &Path) -> PathBuf {
    let mut rotated = log_path.as_os_str().to_owned();
    rotated.push(".1");
    PathBuf::from(rotated)
}

fn rotate_if_oversized(log_path: &Path, max_bytes: u64) -> Result<(), ShellError> {
    let size = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(source) => {
            return Err(ShellError::Io {
                path: log_path.to_path_buf(),
                source,
            })
        }
    };
    if size < max_bytes {
        return Ok(());
    }

    rename_to_rotated(log_path)
}

// Another thread may have rotated the same file first.
fn rename_to_rotated(log_path: &Path) -> Result<(), ShellError> {
    match fs::rename(log_path, rotated_log_path(log_path)) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ShellError::Io {
            path: log_path.to_path_buf(),
            source,
        }),
    }
}

pub fn append_log_line(
    log_path: &Path,
    category: LogCategory,
    message: &str,
    max_bytes: u64,
) -> Result<(), ShellError> {
    let io_error = |source| ShellError::Io {
        path: log_path.to_path_buf(),
        source,
    };

    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    rotate_if_oversized(log_path, max_bytes)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(io_error)?;
    file.write_all(format_log_line(category, message).as_bytes())
        .map_err(io_error)
}
