use std::error::Error as _;

use ec_core::TransportError;

/// Maps a reqwest failure onto the transport taxonomy.
pub fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if let Some(status) = error.status() {
        TransportError::Status(status.as_u16())
    } else if error.is_decode() {
        TransportError::Decode(describe(&error))
    } else {
        TransportError::Unreachable(describe(&error))
    }
}

/// reqwest's own message hides the cause (refused, DNS, TLS).
fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
