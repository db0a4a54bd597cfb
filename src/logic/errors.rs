use anyhow::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Decode,       // Body was not a server list
    Other,
}

impl ErrorType {
    /// Short label for the status bar
    pub fn as_str(&self) -> &str {
        match self {
            ErrorType::ConnectionRefused => "Backend unreachable",
            ErrorType::Timeout => "Request timed out",
            ErrorType::NotFound => "Endpoint not found",
            ErrorType::ServerError => "Backend error",
            ErrorType::NetworkError => "Network error",
            ErrorType::Decode => "Unexpected response",
            ErrorType::Other => "Error",
        }
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // Check HTTP status and decode failures first (via reqwest error chain)
    if let Some(reqwest_err) = error.downcast_ref::<reqwest::Error>() {
        if let Some(status) = reqwest_err.status() {
            return match status.as_u16() {
                404 => ErrorType::NotFound,
                500..=599 => ErrorType::ServerError,
                _ => ErrorType::Other,
            };
        }
        if reqwest_err.is_timeout() {
            return ErrorType::Timeout;
        }
        if reqwest_err.is_decode() {
            return ErrorType::Decode;
        }
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for display - show the root cause, not the context wrapper
pub fn format_error_message(error: &Error) -> String {
    // Walk the error chain to find reqwest::Error (most informative for network errors)
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    // If no reqwest error found, walk the chain to get the deepest (root cause) error
    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

/// User-facing message for a failed server list fetch
pub fn fetch_failure_message(error: &Error) -> String {
    format!(
        "Could not load servers ({}). Press r to retry.",
        classify_error(error).as_str()
    )
}
