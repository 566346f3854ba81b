/// Platform convention for what happens once the last window is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShellPlatform {
    /// The process stays resident with zero windows (macOS).
    Persistent,
    Standard,
}

impl ShellPlatform {
    pub(crate) fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Persistent
        } else {
            Self::Standard
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExitDecision {
    Quit,
    StayResident,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConfirmExitRequest {
    pub(crate) message: String,
}

/// Admits one modal exit dialog at a time; later requests wait in line.
#[derive(Debug, Default)]
pub(crate) struct DialogQueue {
    pub(crate) turn: tokio::sync::Mutex<()>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_platform_matches_target_os() {
        let expected = if cfg!(target_os = "macos") {
            ShellPlatform::Persistent
        } else {
            ShellPlatform::Standard
        };
        assert_eq!(ShellPlatform::current(), expected);
    }
}
