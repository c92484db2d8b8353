use std::process::{Command, Stdio};

/// Seam over synchronous shell execution so the action flows and the info
/// panel can be exercised in tests without spawning real processes.
pub trait Shell {
    /// Run `command_line` through `sh -c`, discarding all output, and block
    /// until it exits. Returns whether the command exited successfully; a
    /// spawn failure counts as an unsuccessful exit.
    fn run(&self, command_line: &str) -> bool;

    /// Run `command_line` through `sh -c` and capture its raw standard
    /// output, blocking until it exits. Standard error is discarded and the
    /// exit status is ignored; spawn failures degrade to an empty string.
    fn capture(&self, command_line: &str) -> String;
}

/// The real thing: blocking `std::process` spawns via `sh -c`.
pub struct SystemShell;

impl Shell for SystemShell {
    fn run(&self, command_line: &str) -> bool {
        log::debug!("running `{command_line}`");
        match Command::new("sh")
            .arg("-c")
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) => status.success(),
            Err(e) => {
                log::warn!("failed to spawn `{command_line}`: {e}");
                false
            }
        }
    }

    fn capture(&self, command_line: &str) -> String {
        log::debug!("capturing `{command_line}`");
        match Command::new("sh")
            .arg("-c")
            .arg(command_line)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => String::from_utf8_lossy(&output.stdout).into_owned(),
            Err(e) => {
                log::warn!("failed to spawn `{command_line}`: {e}");
                String::new()
            }
        }
    }
}
