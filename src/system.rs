// ============================================
// SYSTEM INFO
// Host information shown in the info panel
// ============================================

use serde::Serialize;

use crate::shell::Shell;

const KERNEL_PROBE: &str = "uname -sr";
const UPTIME_PROBE: &str = "uptime -p";

/// Host information captured once at startup
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub kernel: String,
    pub uptime: String,
}

impl SystemInfo {
    /// Gather host information. A failed probe yields an empty string and
    /// the panel shows it as-is.
    pub fn gather(shell: &dyn Shell) -> Self {
        let info = Self {
            hostname: hostname::get()
                .map(|h| h.to_string_lossy().to_string())
                .unwrap_or_else(|_| "unknown".to_string()),
            kernel: trim_trailing_newlines(&shell.capture(KERNEL_PROBE)).to_string(),
            uptime: trim_trailing_newlines(&shell.capture(UPTIME_PROBE)).to_string(),
        };
        log::debug!("gathered {info:?}");
        info
    }
}

/// Strip trailing newline and carriage-return characters. Nothing else is
/// touched: leading whitespace, interior newlines and trailing spaces stay.
pub fn trim_trailing_newlines(s: &str) -> &str {
    s.trim_end_matches(['\n', '\r'])
}
