use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 统一的错误响应结构，只携带一条可读消息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "api.ts")]
pub struct ErrorResponse {
    #[serde(rename = "mensagem")]
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_single_message_field() {
        let body = serde_json::to_value(ErrorResponse::new("Curso não encontrado")).unwrap();
        assert_eq!(body, serde_json::json!({ "mensagem": "Curso não encontrado" }));
    }
}
