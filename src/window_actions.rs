use tauri::{AppHandle, Manager};

use crate::{
    main_window, window_host::WindowHost, window_lifecycle::WindowLifecycle, MAIN_WINDOW_LABEL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SecondInstanceAction {
    FocusExisting,
    Recreate,
}

fn decide_second_instance<H>(host: &H) -> SecondInstanceAction
where
    H: WindowHost,
{
    if host.has_window(MAIN_WINDOW_LABEL) {
        SecondInstanceAction::FocusExisting
    } else {
        SecondInstanceAction::Recreate
    }
}

/// Platform activation: dock click on macOS.
pub fn activate_app<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let lifecycle = app_handle.state::<WindowLifecycle>();
    if let Err(error) = lifecycle.on_activate(app_handle, &log) {
        log(&format!("failed to recreate main window on activate: {error}"));
    }
}

/// A second launch brings the existing window forward instead of opening another.
pub fn handle_second_instance<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str) + Copy,
{
    log("second instance launched, forwarding to running shell");
    match decide_second_instance(app_handle) {
        SecondInstanceAction::FocusExisting => {
            if !main_window::focus_main_window(app_handle, log) {
                activate_app(app_handle, log);
            }
        }
        SecondInstanceAction::Recreate => activate_app(app_handle, log),
    }
}
