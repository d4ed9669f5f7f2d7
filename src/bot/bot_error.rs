use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("teloxide error")]
    Teloxide(teloxide::RequestError),

    #[error("a timeout occured")]
    Timeout,

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The bot is configured with something telegram does not accept.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("chat with dev id {chat_id} not found")]
    DevChatNotFound { chat_id: i64 },
}

impl From<teloxide::RequestError> for BotError {
    fn from(value: teloxide::RequestError) -> Self {
        match value {
            teloxide::RequestError::Network(reqwest_err) if reqwest_err.is_timeout() => {
                Self::Timeout
            }
            err => Self::Teloxide(err),
        }
    }
}

macro_rules! impl_other_error {
    ($error_type:ty) => {
        impl From<$error_type> for BotError {
            fn from(value: $error_type) -> Self {
                Self::Other(anyhow::anyhow!(value))
            }
        }
    };
}

impl_other_error!(std::io::Error);
impl_other_error!(toml::de::Error);
impl_other_error!(toml::ser::Error);

#[cfg(test)]
mod tests {
    use teloxide::ApiError;

    use super::*;

    #[test]
    fn configuration_error_names_the_chat() {
        let error = BotError::from(ConfigurationError::DevChatNotFound {
            chat_id: -10042,
        });
        assert_eq!(error.to_string(), "chat with dev id -10042 not found");
    }

    #[test]
    fn api_errors_stay_teloxide_errors() {
        let error = BotError::from(teloxide::RequestError::Api(ApiError::BotBlocked));
        assert!(matches!(
            error,
            BotError::Teloxide(teloxide::RequestError::Api(ApiError::BotBlocked))
        ));
    }
}
