//! Join and copy actions
//!
//! One-shot side effects on the selected server:
//! - Join: hand the connect URL to the OS opener, then check back later
//! - Copy: put the address on the clipboard

use anyhow::{Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

use crate::{logic, App};

impl App {
    pub(crate) fn join_selected_server(&mut self) {
        let Some(address) = self.model.selected_server().map(|s| s.address.clone()) else {
            return;
        };
        self.join_server(&address);
    }

    pub(crate) fn copy_selected_address(&mut self) {
        let Some(address) = self.model.selected_server().map(|s| s.address.clone()) else {
            return;
        };
        self.copy_address(&address);
    }

    /// Launch the game client via its protocol handler
    ///
    /// Nothing reports back whether the client started. After
    /// `launch_check_delay` the terminal focus is inspected and, if it never
    /// moved to the game, a manual-connect hint is shown.
    pub(crate) fn join_server(&mut self, address: &str) {
        let url = logic::launch::build_connect_url(&self.launch_protocol, self.app_id, address);
        info!(%url, "Joining server");

        match self.spawn_opener(&url) {
            Ok(()) => {
                self.model.show_toast(format!("Launching game: {}", address));
                self.schedule_launch_check(address.to_string());
            }
            Err(e) => {
                warn!(error = %format!("{:#}", e), %url, "Failed to launch game client");
                self.model
                    .ui
                    .show_hint(logic::launch::launch_failed_message(address));
            }
        }
    }

    fn spawn_opener(&self, url: &str) -> Result<()> {
        let mut command = match self.open_command {
            Some(ref open_cmd) => tokio::process::Command::new(open_cmd),
            None => {
                let (program, args) = logic::platform::default_open_command();
                let mut command = tokio::process::Command::new(program);
                command.args(args);
                command
            }
        };
        command.arg(url);

        spawn_reaped(command).with_context(|| format!("Failed to run opener for {}", url))
    }

    /// Fire-and-forget timer; if the app is gone by then the send just fails
    fn schedule_launch_check(&self, address: String) {
        let tx = self.launch_check_tx.clone();
        let delay = self.launch_check_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(address);
        });
    }

    pub(crate) fn handle_launch_check(&mut self, address: &str) {
        let focused = self.model.ui.terminal_focused;
        debug!(address, focused, "Launch check");

        if logic::launch::should_show_launch_hint(focused) {
            self.model
                .ui
                .show_hint(logic::launch::launch_hint_message(address));
        }
    }

    /// Copy a server address to the clipboard
    pub(crate) fn copy_address(&mut self, address: &str) {
        let result = match self.clipboard_command.clone() {
            Some(clipboard_cmd) => Self::copy_with_command(&clipboard_cmd, address),
            None => self.copy_with_system_clipboard(address),
        };

        match result {
            Ok(()) => {
                info!(address, "Copied address to clipboard");
                self.model
                    .show_toast(logic::launch::copy_success_message(address));
            }
            Err(e) => {
                warn!(error = %format!("{:#}", e), address, "Clipboard write failed");
                self.model
                    .ui
                    .show_hint(logic::launch::copy_failed_message(address));
            }
        }
    }

    /// Use user-configured clipboard command (text sent via stdin)
    fn copy_with_command(clipboard_cmd: &str, text: &str) -> Result<()> {
        let mut child = Command::new(clipboard_cmd)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to execute clipboard command '{}'", clipboard_cmd))?;

        let written = match child.stdin.take() {
            // Dropping stdin closes it, signalling EOF
            Some(mut stdin) => stdin
                .write_all(text.as_bytes())
                .context("Failed to write to clipboard command"),
            None => Ok(()),
        };

        // Reap the child even when the write failed
        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for clipboard command '{}'", clipboard_cmd))?;
        written?;

        if !status.success() {
            anyhow::bail!("Clipboard command '{}' exited with {}", clipboard_cmd, status);
        }

        Ok(())
    }

    fn copy_with_system_clipboard(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new().context("Clipboard unavailable")?);
        }

        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .context("Failed to set clipboard text"),
            None => anyhow::bail!("Clipboard unavailable"),
        }
    }
}

/// Spawn a detached program and reap it in the background
///
/// The opener may stay around as long as the game runs, so nothing waits on
/// it in the foreground. A non-zero exit is only logged.
fn spawn_reaped(mut command: tokio::process::Command) -> Result<()> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    tokio::spawn(async move {
        match child.wait().await {
            Ok(status) if !status.success() => warn!(%status, "Opener exited with failure"),
            Ok(_) => debug!("Opener exited"),
            Err(e) => warn!(error = %e, "Failed to wait for opener"),
        }
    });

    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_command_success() {
        assert!(App::copy_with_command("cat", "192.0.2.1:27015").is_ok());
    }

    #[test]
    fn test_clipboard_command_failure_is_reported() {
        let result = App::copy_with_command("false", "192.0.2.1:27015");
        assert!(result.is_err());
    }

    #[test]
    fn test_clipboard_command_missing_program() {
        assert!(App::copy_with_command("quickplaytui-no-such-clipboard", "x").is_err());
    }

    #[tokio::test]
    async fn test_spawn_reaped_runs_and_reports_missing_program() {
        assert!(spawn_reaped(tokio::process::Command::new("true")).is_ok());
        assert!(spawn_reaped(tokio::process::Command::new("quickplaytui-no-such-opener")).is_err());
    }
}
