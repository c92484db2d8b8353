use crate::system::SystemInfo;

/// Return the snapshot captured at startup. The panel never refreshes, so
/// this is a plain read of managed state.
#[tauri::command]
pub fn get_system_info(info: tauri::State<'_, SystemInfo>) -> SystemInfo {
    info.inner().clone()
}
