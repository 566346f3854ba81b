use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};
use tokio::sync::oneshot;

use crate::{error::ShellError, ConfirmExitRequest, DialogQueue, CONFIRM_EXIT_DIALOG_TITLE};

pub(crate) type AnswerCallback = Box<dyn FnOnce(bool) + Send + 'static>;

/// Something that can put a Yes/No question in front of the user.
///
/// Implementations call `on_answer` exactly once with `true` for "Yes". Dropping
/// the callback without calling it means the dialog could not be shown.
pub(crate) trait ConfirmPrompt {
    fn prompt(&self, request: &ConfirmExitRequest, on_answer: AnswerCallback);
}

pub(crate) struct NativeConfirmPrompt<'a> {
    app_handle: &'a AppHandle,
}

impl<'a> NativeConfirmPrompt<'a> {
    pub(crate) fn new(app_handle: &'a AppHandle) -> Self {
        Self { app_handle }
    }
}

impl ConfirmPrompt for NativeConfirmPrompt<'_> {
    fn prompt(&self, request: &ConfirmExitRequest, on_answer: AnswerCallback) {
        // Closing the dialog is reported by the host as "No".
        self.app_handle
            .dialog()
            .message(request.message.clone())
            .title(CONFIRM_EXIT_DIALOG_TITLE)
            .kind(MessageDialogKind::Info)
            .buttons(MessageDialogButtons::YesNo)
            .show(on_answer);
    }
}

pub(crate) async fn confirm_exit_with<P, F>(
    prompt: &P,
    queue: &DialogQueue,
    request: ConfirmExitRequest,
    log: F,
) -> Result<bool, ShellError>
where
    P: ConfirmPrompt + Sync,
    F: Fn(&str) + Send,
{
    let _turn = queue.turn.lock().await;

    log(&format!("showing exit confirmation: {}", request.message));
    let (answer_tx, answer_rx) = oneshot::channel();
    prompt.prompt(
        &request,
        Box::new(move |confirmed| {
            let _ = answer_tx.send(confirmed);
        }),
    );

    match answer_rx.await {
        Ok(confirmed) => {
            log(&format!(
                "exit confirmation answered: {}",
                if confirmed { "yes" } else { "no" }
            ));
            Ok(confirmed)
        }
        Err(_) => {
            log("exit confirmation dialog closed without an answer");
            Err(ShellError::DialogUnavailable)
        }
    }
}
