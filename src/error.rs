use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ShellError {
    #[error("Failed to build main window: {0}")]
    WindowBuild(String),
    #[error("Exit confirmation dialog closed without an answer.")]
    DialogUnavailable,
    #[error("Invalid view entry '{0}': must be a relative path inside the view directory.")]
    InvalidViewEntry(String),
    #[error("Failed to write desktop log {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// Tauri commands hand errors to the view as plain strings.
impl serde::Serialize for ShellError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::ShellError;

    #[test]
    fn shell_error_serializes_as_display_string() {
        let serialized = serde_json::to_string(&ShellError::DialogUnavailable)
            .expect("error should serialize");
        assert_eq!(
            serialized,
            "\"Exit confirmation dialog closed without an answer.\""
        );
    }

    #[test]
    fn invalid_view_entry_message_names_the_entry() {
        let error = ShellError::InvalidViewEntry("../secret.html".to_string());
        assert!(error.to_string().contains("'../secret.html'"));
    }
}
