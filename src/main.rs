#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_helpers;
mod app_runtime;
mod app_types;
mod desktop_bridge;
mod desktop_bridge_commands;
mod error;
mod exit_confirm;
mod exit_events;
mod logging;
mod main_window;
mod runtime_paths;
mod window_actions;
mod window_config;
mod window_host;
mod window_lifecycle;

pub(crate) use app_constants::*;
pub(crate) use app_helpers::{
    append_desktop_log, append_dialog_log, append_shutdown_log, append_startup_log,
    append_window_log,
};
pub(crate) use app_types::{ConfirmExitRequest, DialogQueue, ExitDecision, ShellPlatform};

fn main() {
    app_runtime::run();
}
