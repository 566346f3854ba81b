use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};

use crate::{desktop_bridge, error::ShellError, window_config::MainWindowConfig, MAIN_WINDOW_LABEL};

pub fn build_main_window<F>(
    app_handle: &AppHandle,
    config: &MainWindowConfig,
    log: F,
) -> Result<(), ShellError>
where
    F: Fn(&str),
{
    let bridge_script = desktop_bridge::bridge_script();
    let window = WebviewWindowBuilder::new(
        app_handle,
        config.label,
        WebviewUrl::App(config.view_entry.clone()),
    )
    .title(config.title)
    .inner_size(config.width, config.height)
    .min_inner_size(config.min_width, config.min_height)
    .resizable(config.resizable)
    .initialization_script(&bridge_script)
    .build()
    .map_err(|error| ShellError::WindowBuild(error.to_string()))?;

    if !config.show_menu {
        if let Err(error) = window.remove_menu() {
            log(&format!("failed to remove menu from {}: {error}", config.label));
        }
    }

    log(&format!(
        "created window {} ({}x{}, min {}x{}) loading {}",
        config.label,
        config.width,
        config.height,
        config.min_width,
        config.min_height,
        config.view_entry.display()
    ));
    Ok(())
}

pub fn focus_main_window<F>(app_handle: &AppHandle, log: F) -> bool
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        return false;
    };

    if let Err(error) = window.unminimize() {
        log(&format!("failed to unminimize main window: {error}"));
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
    true
}
