use thiserror::Error;

use crate::practicum::ApiError;
use crate::telegram::TelegramError;

/// Every failure the bot can hit, from startup to delivery.
///
/// Display texts end up in the chat verbatim, so they are written for the
/// student reading them, not for the log.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("Переменные окружения недоступны: {0}")]
    Configuration(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("От API получен пустой ответ.")]
    EmptyResponse,

    #[error("Некорректный ответ API: {0}")]
    Shape(String),

    #[error("В ответе API нет поля '{0}'.")]
    MissingField(&'static str),

    #[error("Неизвестный статус работы '{0}'.")]
    UnknownStatus(String),

    #[error("Нет работ на проверке.")]
    NoSubmissions,

    #[error("Ошибка '{source}' при отправке сообщения '{message}'.")]
    DeliverySend {
        message: String,
        #[source]
        source: TelegramError,
    },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
