use tauri::{AppHandle, State};

use crate::{
    append_dialog_log, error::ShellError, exit_confirm, ConfirmExitRequest, DialogQueue,
};

/// Backs the view's `confirm-exit` channel.
#[tauri::command]
pub(crate) async fn confirm_exit(
    app_handle: AppHandle,
    queue: State<'_, DialogQueue>,
    message: String,
) -> Result<bool, ShellError> {
    let prompt = exit_confirm::NativeConfirmPrompt::new(&app_handle);
    exit_confirm::confirm_exit_with(
        &prompt,
        queue.inner(),
        ConfirmExitRequest { message },
        append_dialog_log,
    )
    .await
}
