// ============================================
// MAINTENANCE ACTIONS
// Dispatch table and execution flow for the
// five command buttons
// ============================================

use serde::Serialize;

use crate::shell::Shell;

// ============================================
// TYPES
// ============================================

/// Yes/No prompt shown before a destructive action runs.
#[derive(Debug, Clone, Copy)]
pub struct ConfirmPrompt {
    pub title: &'static str,
    pub message: &'static str,
}

/// Informational dialog shown after an action ran. It is shown
/// unconditionally; none of the actions verify that the command succeeded.
#[derive(Debug, Clone, Copy)]
pub struct DoneNotice {
    pub title: &'static str,
    pub message: &'static str,
}

/// One entry of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct MaintenanceAction {
    pub id: &'static str,
    pub label: &'static str,
    /// Fixed command line, run through `sh -c`.
    pub command: &'static str,
    /// Wrap the command in `<terminal> -e` so the user can watch it and
    /// authenticate against sudo.
    pub in_terminal: bool,
    /// Second command to run when the primary exits unsuccessfully. Its own
    /// exit status is ignored.
    pub fallback: Option<&'static str>,
    pub confirm: Option<ConfirmPrompt>,
    pub done: Option<DoneNotice>,
}

/// How an action invocation ended. `Declined` means the user answered No to
/// the confirmation prompt and nothing was spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionOutcome {
    Completed,
    Declined,
}

/// Modal dialogs raised while an action executes. The desktop build backs
/// this with native message dialogs; tests record the calls instead.
pub trait Interaction {
    /// Blocking Yes/No question; `true` means the user accepted.
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
    /// Blocking informational dialog.
    fn inform(&self, notice: &DoneNotice);
}

// ============================================
// DISPATCH TABLE
// ============================================

pub static ACTIONS: &[MaintenanceAction] = &[
    MaintenanceAction {
        id: "update",
        label: "Update System",
        command: "sudo pacman -Syu",
        in_terminal: true,
        fallback: None,
        confirm: None,
        done: Some(DoneNotice {
            title: "Update",
            message: "System update command launched in terminal.",
        }),
    },
    MaintenanceAction {
        id: "sound",
        label: "Reset Sound",
        command: "systemctl --user restart pipewire.service wireplumber.service",
        in_terminal: false,
        fallback: Some("pulseaudio -k"),
        confirm: None,
        done: Some(DoneNotice {
            title: "Sound Reset",
            message: "Audio services have been restarted.",
        }),
    },
    MaintenanceAction {
        id: "network",
        label: "Reset Network",
        command: "sudo systemctl restart NetworkManager",
        in_terminal: true,
        fallback: None,
        confirm: None,
        done: Some(DoneNotice {
            title: "Network Reset",
            message: "NetworkManager restart command launched in terminal.",
        }),
    },
    MaintenanceAction {
        id: "poweroff",
        label: "Shutdown",
        command: "systemctl poweroff",
        in_terminal: false,
        fallback: None,
        confirm: Some(ConfirmPrompt {
            title: "Shutdown",
            message: "Are you sure you want to power off this computer?",
        }),
        done: None,
    },
    MaintenanceAction {
        id: "reboot",
        label: "Restart",
        command: "systemctl reboot",
        in_terminal: false,
        fallback: None,
        confirm: Some(ConfirmPrompt {
            title: "Restart",
            message: "Are you sure you want to restart this computer?",
        }),
        done: None,
    },
];

/// Look up a dispatch-table entry by id.
pub fn find(id: &str) -> Option<&'static MaintenanceAction> {
    ACTIONS.iter().find(|action| action.id == id)
}

// ============================================
// EXECUTION
// ============================================

impl MaintenanceAction {
    /// Full command line for this action, wrapped in the given terminal
    /// emulator when the user is expected to watch it run.
    pub fn command_line(&self, terminal: &str) -> String {
        if self.in_terminal {
            format!("{} -e {}", terminal, self.command)
        } else {
            self.command.to_string()
        }
    }
}

/// Run one action to completion: confirmation gate, blocking spawn, optional
/// fallback, unconditional result dialog. Pure orchestration over the
/// `Shell` and `Interaction` seams, with no Tauri types involved, so the
/// whole flow is unit testable.
pub fn execute(
    action: &MaintenanceAction,
    terminal: &str,
    shell: &dyn Shell,
    ui: &dyn Interaction,
) -> ActionOutcome {
    if let Some(prompt) = &action.confirm {
        if !ui.confirm(prompt) {
            log::info!("action `{}` declined", action.id);
            return ActionOutcome::Declined;
        }
    }

    let command = action.command_line(terminal);
    log::info!("action `{}`: running `{command}`", action.id);
    if !shell.run(&command) {
        if let Some(fallback) = action.fallback {
            log::warn!("action `{}`: primary failed, running `{fallback}`", action.id);
            shell.run(fallback);
        }
    }

    if let Some(notice) = &action.done {
        ui.inform(notice);
    }
    ActionOutcome::Completed
}
