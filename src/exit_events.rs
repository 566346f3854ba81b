use tauri::{AppHandle, ExitRequestApi};

use crate::{append_shutdown_log, window_lifecycle, ExitDecision, ShellPlatform};

pub fn handle_exit_requested(_app_handle: &AppHandle, code: Option<i32>, api: &ExitRequestApi) {
    let decision =
        window_lifecycle::exit_decision_for(code, ShellPlatform::current(), append_shutdown_log);
    match decision {
        ExitDecision::StayResident => api.prevent_exit(),
        ExitDecision::Quit => {}
    }
}

pub fn handle_exit_event(_app_handle: &AppHandle) {
    append_shutdown_log("desktop process exiting");
}
