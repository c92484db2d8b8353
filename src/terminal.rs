use std::env;

const TERMINAL_VAR: &str = "TERMINAL";
const DEFAULT_TERMINAL: &str = "xterm";

/// Terminal emulator used to host the interactive privileged commands.
/// Resolved at click time: `$TERMINAL` when set and non-empty, else `xterm`.
pub fn resolve() -> String {
    resolve_from(env::var(TERMINAL_VAR).ok())
}

pub fn resolve_from(value: Option<String>) -> String {
    value
        .filter(|term| !term.is_empty())
        .unwrap_or_else(|| DEFAULT_TERMINAL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_the_environment_value_when_set() {
        assert_eq!(resolve_from(Some("kitty".to_string())), "kitty");
    }

    #[test]
    fn falls_back_to_xterm_when_unset() {
        assert_eq!(resolve_from(None), "xterm");
    }

    #[test]
    fn falls_back_to_xterm_when_empty() {
        assert_eq!(resolve_from(Some(String::new())), "xterm");
    }
}
