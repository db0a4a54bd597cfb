use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend base URL; `/servers` is appended
    pub api_url: String,
    /// Program used to hand the connect URL to the OS (platform default if unset)
    pub open_command: Option<String>,
    /// Program that receives the address on stdin (system clipboard if unset)
    pub clipboard_command: Option<String>,
    pub vim_mode: bool,
    /// Protocol of the connect URL
    pub launch_protocol: String,
    /// Game id passed to the launcher
    pub app_id: u32,
    /// Seconds before checking whether the game took focus
    pub launch_check_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            open_command: None,
            clipboard_command: None,
            vim_mode: false,
            launch_protocol: "steam".to_string(),
            app_id: 440,
            launch_check_secs: 3,
            request_timeout_secs: 15,
        }
    }
}

fn default_api_url() -> String {
    "https://truequickplay-api.onrender.com/api".to_string()
}
