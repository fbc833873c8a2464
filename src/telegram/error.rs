use thiserror::Error;

/// Errors returned while talking to the Telegram Bot API.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Non-2xx status or an envelope with `"ok": false`.
    #[error("Telegram API error (status {status}): {description}")]
    Api { status: u16, description: String },

    /// Built with the URL stripped, since it carries the bot token.
    #[error("network error: {0}")]
    Network(reqwest::Error),
}

impl From<reqwest::Error> for TelegramError {
    fn from(err: reqwest::Error) -> Self {
        TelegramError::Network(err.without_url())
    }
}
