use tauri::{webview::PageLoadEvent, AppHandle, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_startup_log, append_window_log, exit_events,
    window_config::MainWindowConfig, window_lifecycle::WindowLifecycle, DialogQueue,
    DESKTOP_LOG_FILE,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        crate::logging::resolve_desktop_log_path(
            crate::runtime_paths::default_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));
    let window_config = MainWindowConfig::from_env(append_startup_log);

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _argv, _cwd| {
            crate::window_actions::handle_second_instance(app_handle, append_window_log);
        }))
        .plugin(tauri_plugin_dialog::init())
        .manage(WindowLifecycle::new(window_config))
        .manage(DialogQueue::default())
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::confirm_exit,
        ])
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                append_window_log(&format!("window destroyed: {}", window.label()));
            }
        })
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!(
                    "page-load started in {}: {}",
                    webview.label(),
                    payload.url()
                ));
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!(
                    "page-load finished in {}: {}",
                    webview.label(),
                    payload.url()
                ));
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            let lifecycle = app_handle.state::<WindowLifecycle>();
            if let Err(error) = lifecycle.on_ready(&app_handle, append_window_log) {
                show_startup_error(&app_handle, &error.to_string());
            }
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                crate::window_actions::activate_app(app_handle, append_window_log);
            }
            RunEvent::ExitRequested { code, api, .. } => {
                exit_events::handle_exit_requested(app_handle, code, &api);
            }
            RunEvent::Exit => {
                exit_events::handle_exit_event(app_handle);
            }
            _ => {}
        });
}

fn show_startup_error(app_handle: &AppHandle, message: &str) {
    append_startup_log(&format!("startup failed: {message}"));
    eprintln!("Audio Forms startup failed: {message}");
    app_handle.exit(1);
}
