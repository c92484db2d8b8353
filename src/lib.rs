// ============================================
// COMMAND CENTER - TAURI APP
// IPC commands exposed to the web UI
// ============================================

mod actions;
mod commands;
mod error;
mod shell;
mod system;
mod terminal;

use commands::*;
use shell::SystemShell;
use system::SystemInfo;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::init();
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Captured once at startup; the info panel never refreshes.
            app.manage(SystemInfo::gather(&SystemShell));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![get_system_info, run_action])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
