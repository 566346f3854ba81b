use crate::{
    error::ShellError, window_config::MainWindowConfig, window_host::WindowHost, ExitDecision,
    ShellPlatform,
};

/// Keeps exactly one main window around whenever the shell should be visible.
#[derive(Debug)]
pub(crate) struct WindowLifecycle {
    config: MainWindowConfig,
}

impl WindowLifecycle {
    pub(crate) fn new(config: MainWindowConfig) -> Self {
        Self { config }
    }

    /// Returns `Ok(false)` when the main window already exists.
    pub(crate) fn create_window<H, F>(&self, host: &H, log: F) -> Result<bool, ShellError>
    where
        H: WindowHost,
        F: Fn(&str),
    {
        if host.has_window(self.config.label) {
            log(&format!(
                "create_window skipped: {} already open",
                self.config.label
            ));
            return Ok(false);
        }

        host.create_main_window(&self.config)?;
        Ok(true)
    }

    pub(crate) fn on_ready<H, F>(&self, host: &H, log: F) -> Result<(), ShellError>
    where
        H: WindowHost,
        F: Fn(&str),
    {
        log("host ready, creating main window");
        self.create_window(host, &log).map(|_| ())
    }

    pub(crate) fn on_activate<H, F>(&self, host: &H, log: F) -> Result<bool, ShellError>
    where
        H: WindowHost,
        F: Fn(&str),
    {
        let open_windows = host.open_window_count();
        if open_windows > 0 {
            log(&format!("activate ignored: {open_windows} window(s) open"));
            return Ok(false);
        }

        log("activate with no open windows, recreating main window");
        self.create_window(host, &log)
    }
}

pub(crate) fn on_all_windows_closed<F>(platform: ShellPlatform, log: F) -> ExitDecision
where
    F: Fn(&str),
{
    match platform {
        ShellPlatform::Persistent => {
            log("all windows closed, staying resident until next activation");
            ExitDecision::StayResident
        }
        ShellPlatform::Standard => {
            log("all windows closed, quitting");
            ExitDecision::Quit
        }
    }
}

/// Only the implicit last-window-closed request (no exit code) follows the
/// platform convention; an explicit exit code always quits.
pub(crate) fn exit_decision_for<F>(
    code: Option<i32>,
    platform: ShellPlatform,
    log: F,
) -> ExitDecision
where
    F: Fn(&str),
{
    match code {
        Some(code) => {
            log(&format!("exit requested with code {code}"));
            ExitDecision::Quit
        }
        None => on_all_windows_closed(platform, log),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window_host::fake::FakeHost;

    fn lifecycle() -> WindowLifecycle {
        WindowLifecycle::new(MainWindowConfig::default())
    }

    fn quiet(_: &str) {}

    #[test]
    fn on_ready_creates_single_window_with_shell_geometry() {
        let host = FakeHost::default();
        lifecycle().on_ready(&host, quiet).expect("ready should succeed");

        let windows = host.windows.borrow();
        assert_eq!(windows.len(), 1);
        assert_eq!((windows[0].width, windows[0].height), (1280.0, 720.0));
        assert!(!windows[0].show_menu);
    }

    #[test]
    fn repeated_activation_with_open_window_never_duplicates() {
        let host = FakeHost::default();
        let lifecycle = lifecycle();
        lifecycle.on_ready(&host, quiet).expect("ready");

        for _ in 0..5 {
            assert!(!lifecycle.on_activate(&host, quiet).expect("activate"));
        }
        assert_eq!(host.open_window_count(), 1);
    }

    #[test]
    fn activation_with_zero_windows_recreates_main_window() {
        let host = FakeHost::default();
        let lifecycle = lifecycle();
        lifecycle.on_ready(&host, quiet).expect("ready");
        host.user_closes_all();

        assert!(lifecycle.on_activate(&host, quiet).expect("activate"));
        assert_eq!(host.open_window_count(), 1);
    }

    #[test]
    fn create_window_is_noop_when_main_window_exists() {
        let host = FakeHost::default();
        let lifecycle = lifecycle();

        assert!(lifecycle.create_window(&host, quiet).expect("first create"));
        assert!(!lifecycle.create_window(&host, quiet).expect("second create"));
        assert_eq!(host.open_window_count(), 1);
    }

    #[test]
    fn on_ready_propagates_window_build_failure() {
        let host = FakeHost::default();
        *host.fail_next_build.borrow_mut() = true;

        let result = lifecycle().on_ready(&host, quiet);
        assert!(matches!(result, Err(ShellError::WindowBuild(_))));
        assert_eq!(host.open_window_count(), 0);
    }

    #[test]
    fn all_windows_closed_quits_on_standard_platform() {
        assert_eq!(
            on_all_windows_closed(ShellPlatform::Standard, quiet),
            ExitDecision::Quit
        );
    }

    #[test]
    fn all_windows_closed_stays_resident_on_persistent_platform() {
        assert_eq!(
            on_all_windows_closed(ShellPlatform::Persistent, quiet),
            ExitDecision::StayResident
        );
    }

    #[test]
    fn persistent_platform_close_then_activate_restores_one_window() {
        let host = FakeHost::default();
        let lifecycle = lifecycle();
        lifecycle.on_ready(&host, quiet).expect("ready");

        host.user_closes_all();
        assert_eq!(
            on_all_windows_closed(ShellPlatform::Persistent, quiet),
            ExitDecision::StayResident
        );
        assert_eq!(host.open_window_count(), 0);

        assert!(lifecycle.on_activate(&host, quiet).expect("activate"));
        assert_eq!(host.open_window_count(), 1);
    }

    #[test]
    fn explicit_exit_code_quits_even_on_persistent_platform() {
        assert_eq!(
            exit_decision_for(Some(0), ShellPlatform::Persistent, quiet),
            ExitDecision::Quit
        );
    }

    #[test]
    fn implicit_exit_stays_resident_on_persistent_platform() {
        assert_eq!(
            exit_decision_for(None, ShellPlatform::Persistent, quiet),
            ExitDecision::StayResident
        );
    }

    #[test]
    fn implicit_exit_quits_on_standard_platform() {
        assert_eq!(
            exit_decision_for(None, ShellPlatform::Standard, quiet),
            ExitDecision::Quit
        );
    }
}
