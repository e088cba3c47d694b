//! Human-readable messages for load/save errors shown by error states

/// Extract an HTTP status code from messages like `HTTP 404` or
/// `HTTP error: 500 Internal Server Error`
pub fn http_status(error: &str) -> Option<u16> {
    let rest = error.trim().strip_prefix("HTTP")?;
    let rest = rest.trim_start_matches(|c: char| c == ':' || c == ' ' || c.is_alphabetic());
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.len() == 3 {
        digits.parse().ok()
    } else {
        None
    }
}

/// Map a raw error string to the message shown to users
pub fn get_error_message(error: &str) -> String {
    let error = error.trim();
    if error.is_empty() {
        return "Something went wrong.".to_string();
    }

    match http_status(error) {
        Some(404) => return "The requested item could not be found.".to_string(),
        Some(401) | Some(403) => {
            return "You do not have permission to view this.".to_string();
        }
        Some(408) | Some(504) => return "The server took too long to respond.".to_string(),
        Some(code) if code >= 500 => {
            return "The server ran into a problem. Please try again.".to_string();
        }
        _ => {}
    }

    let lower = error.to_lowercase();
    if lower.contains("failed to fetch")
        || lower.contains("network")
        || lower.contains("connection refused")
    {
        return "Could not reach the server. Check your connection.".to_string();
    }
    if lower.contains("json") || lower.contains("expected") {
        return "The server sent an unexpected response.".to_string();
    }

    error.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_status_formats() {
        assert_eq!(http_status("HTTP 404"), Some(404));
        assert_eq!(http_status("HTTP error: 503 Service Unavailable"), Some(503));
        assert_eq!(http_status("timeout"), None);
    }

    #[test]
    fn maps_known_failures() {
        assert_eq!(
            get_error_message("HTTP 404"),
            "The requested item could not be found."
        );
        assert_eq!(
            get_error_message("HTTP error: 403"),
            "You do not have permission to view this."
        );
        assert_eq!(
            get_error_message("HTTP 502"),
            "The server ran into a problem. Please try again."
        );
        assert_eq!(
            get_error_message("Network error: Failed to fetch"),
            "Could not reach the server. Check your connection."
        );
        assert_eq!(get_error_message("  "), "Something went wrong.");
    }

    #[test]
    fn passes_other_messages_through() {
        assert_eq!(get_error_message("Quota exceeded"), "Quota exceeded");
    }
}
