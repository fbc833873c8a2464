//! Configuração do bot carregada das variáveis de ambiente.
//!
//! A struct [`Config`] reúne as três credenciais obrigatórias e alguns
//! parâmetros opcionais. Credenciais ausentes ou vazias impedem o início
//! do loop de polling.

use std::time::Duration;

use crate::error::BotError;

pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

// Variáveis obrigatórias, na ordem em que aparecem no erro.
const REQUIRED: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Configuração de nível superior do bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Token OAuth da API Practicum.
    pub practicum_token: String,
    /// Token do bot do Telegram.
    pub telegram_token: String,
    /// Chat que recebe as notificações.
    pub telegram_chat_id: String,
    /// URL do endpoint de status das tarefas.
    pub endpoint: String,
    /// Host da Telegram Bot API.
    pub telegram_api_url: String,
    /// Intervalo entre duas consultas.
    pub retry_time: Duration,
    /// Timeout de cada requisição HTTP.
    pub request_timeout: Duration,
}

// Valor padrão do intervalo de polling: 10 minutos.
fn default_retry_time() -> Duration {
    Duration::from_secs(600)
}

// Valor padrão do timeout por requisição: 30s.
fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Config {
    /// Lê a configuração do ambiente do processo.
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lê a configuração através de uma função de busca arbitrária.
    /// Valores vazios contam como ausentes.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<&str> = REQUIRED
            .iter()
            .copied()
            .filter(|&key| get(key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(BotError::Configuration(missing.join(", ")));
        }

        let retry_time = match get("RETRY_TIME") {
            Some(raw) => parse_secs("RETRY_TIME", &raw)?,
            None => default_retry_time(),
        };
        let request_timeout = match get("REQUEST_TIMEOUT") {
            Some(raw) => parse_secs("REQUEST_TIMEOUT", &raw)?,
            None => default_request_timeout(),
        };

        Ok(Self {
            practicum_token: get("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: get("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: get("TELEGRAM_CHAT_ID").unwrap_or_default(),
            endpoint: get("PRACTICUM_ENDPOINT").unwrap_or_else(|| ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL").unwrap_or_else(|| TELEGRAM_API_URL.to_string()),
            retry_time,
            request_timeout,
        })
    }
}

fn parse_secs(key: &str, raw: &str) -> Result<Duration, BotError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(BotError::Configuration(format!(
            "{key} должно быть положительным числом секунд, получено '{raw}'"
        ))),
    }
}
