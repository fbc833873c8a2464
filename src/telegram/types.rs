//! Tipos de dados para o método `sendMessage` da Telegram Bot API.

use serde::{Deserialize, Serialize};

/// Corpo da requisição `sendMessage`.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    /// Identificador do chat de destino.
    pub chat_id: String,
    /// Texto da mensagem.
    pub text: String,
}

/// Envelope de resposta comum a todos os métodos da Bot API.
///
/// O campo `result` é ignorado: só interessa saber se o envio foi aceito.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageResponse {
    pub ok: bool,
    /// Motivo legível da falha quando `ok` é `false`.
    #[serde(default)]
    pub description: Option<String>,
}
