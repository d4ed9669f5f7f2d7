use teloxide::{ApiError, RequestError};

/// Telegram answered with a `400 Bad Request`, e.g. because a chat id does
/// not resolve to a chat the bot can see.
#[must_use]
pub fn is_bad_request(err: &RequestError) -> bool {
    match err {
        // unrecognized errors keep telegram's description as is
        RequestError::Api(ApiError::Unknown(message)) => message.starts_with("Bad Request"),
        RequestError::Api(api_error) => api_error.to_string().starts_with("Bad Request"),
        _ => false,
    }
}
