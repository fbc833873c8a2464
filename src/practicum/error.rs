//! Erros do cliente da API Practicum.
//!
//! Cada variante corresponde a um ponto de falha de uma única requisição:
//! rede, status HTTP inesperado ou corpo que não é JSON.

use thiserror::Error;

/// Falhas de uma requisição ao endpoint de status das tarefas.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A requisição nem chegou a receber resposta (DNS, conexão, timeout).
    #[error("Сбой '{0}' при запросе к эндпоинту.")]
    Transport(#[from] reqwest::Error),

    /// O servidor respondeu com algo diferente de 200.
    #[error("Эндпоинт {endpoint} с параметрами from_date={from_date} вернул статус {status}, а не 200.")]
    UnexpectedStatus {
        status: u16,
        endpoint: String,
        from_date: i64,
    },

    /// O corpo da resposta não pôde ser interpretado como JSON.
    #[error("Сбой '{0}' при переводе ответа в JSON.")]
    Decode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_display_includes_params() {
        let err = ApiError::UnexpectedStatus {
            status: 404,
            endpoint: "https://example.test/api/".into(),
            from_date: 1_700_000_000,
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("from_date=1700000000"));
        assert!(text.contains("https://example.test/api/"));
    }

    #[test]
    fn decode_display() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = ApiError::Decode(source);
        assert!(err.to_string().starts_with("Сбой '"));
    }
}
