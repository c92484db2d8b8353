use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

use crate::actions::{self, ActionOutcome, ConfirmPrompt, DoneNotice, Interaction};
use crate::error::{AppError, AppResult};
use crate::shell::SystemShell;
use crate::terminal;

/// Native message dialogs, parented to the main window so they stay modal.
struct NativeDialogs {
    window: tauri::WebviewWindow,
}

impl Interaction for NativeDialogs {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self.window
            .dialog()
            .message(prompt.message)
            .title(prompt.title)
            .kind(MessageDialogKind::Warning)
            .buttons(MessageDialogButtons::YesNo)
            .parent(&self.window)
            .blocking_show()
    }

    fn inform(&self, notice: &DoneNotice) {
        self.window
            .dialog()
            .message(notice.message)
            .title(notice.title)
            .kind(MessageDialogKind::Info)
            .buttons(MessageDialogButtons::Ok)
            .parent(&self.window)
            .blocking_show();
    }
}

/// Run one maintenance action to completion. Blocking dialogs and process
/// waits may not run on the main thread, hence async.
#[tauri::command]
pub async fn run_action(window: tauri::WebviewWindow, id: String) -> AppResult<ActionOutcome> {
    let action = actions::find(&id).ok_or_else(|| AppError::UnknownAction(id))?;
    let dialogs = NativeDialogs { window };
    Ok(actions::execute(
        action,
        &terminal::resolve(),
        &SystemShell,
        &dialogs,
    ))
}
