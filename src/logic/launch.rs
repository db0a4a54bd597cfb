//! Join/copy helpers
//!
//! Builds the protocol URL handed to the game client and the user-facing
//! texts for the manual fallback. Launching itself is fire-and-forget: the
//! only signal we get back is whether the terminal kept focus.

/// Protocol URL that asks the client to connect, e.g.
/// `steam://run/440//+connect 1.2.3.4:27015`
pub fn build_connect_url(protocol: &str, app_id: u32, address: &str) -> String {
    format!("{}://run/{}//+connect {}", protocol, app_id, address)
}

/// Console command the player can type by hand
pub fn manual_connect_command(address: &str) -> String {
    format!("connect {}", address)
}

/// Shown when the terminal still has focus after the launch delay
pub fn launch_hint_message(address: &str) -> String {
    format!(
        "If the game did not start, open the console and type: {}",
        manual_connect_command(address)
    )
}

/// Shown when the opener could not be spawned at all
pub fn launch_failed_message(address: &str) -> String {
    format!(
        "Error: Could not join the server. Connect manually in the console: {}",
        manual_connect_command(address)
    )
}

pub fn copy_success_message(address: &str) -> String {
    format!(
        "Copied {} - paste it in the console after \"connect\"",
        address
    )
}

pub fn copy_failed_message(address: &str) -> String {
    format!("Error: Could not copy. Please copy manually: {}", address)
}

/// Whether the deferred launch check should surface the manual hint
///
/// A client that launched normally steals focus from the terminal. Terminals
/// that never report focus changes leave `focused` at its initial `true`, so
/// the hint errs on the side of showing.
pub fn should_show_launch_hint(terminal_focused: bool) -> bool {
    terminal_focused
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_connect_url() {
        assert_eq!(
            build_connect_url("steam", 440, "1.2.3.4:27015"),
            "steam://run/440//+connect 1.2.3.4:27015"
        );
    }

    #[test]
    fn test_messages_contain_literal_address() {
        let address = "169.254.10.2:27016";
        assert!(launch_hint_message(address).contains("connect 169.254.10.2:27016"));
        assert!(launch_failed_message(address).contains("connect 169.254.10.2:27016"));
        assert!(copy_failed_message(address).contains(address));
        assert!(copy_success_message(address).contains(address));
    }

    #[test]
    fn test_failure_messages_use_error_styling() {
        // The toast renders red when the text starts with "Error:"
        assert!(launch_failed_message("x").starts_with("Error:"));
        assert!(copy_failed_message("x").starts_with("Error:"));
        assert!(!copy_success_message("x").starts_with("Error:"));
    }

    #[test]
    fn test_launch_hint_only_while_focused() {
        assert!(should_show_launch_hint(true));
        assert!(!should_show_launch_hint(false));
    }
}
