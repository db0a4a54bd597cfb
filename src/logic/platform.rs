//! Platform defaults for handing URLs to the OS

/// Program and leading arguments used to open a URL when no
/// `open_command` is configured
pub fn default_open_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "windows") {
        // Empty title argument so `start` does not treat the URL as one
        ("cmd", &["/C", "start", ""])
    } else if cfg!(target_os = "macos") {
        ("open", &[])
    } else {
        ("xdg-open", &[])
    }
}
