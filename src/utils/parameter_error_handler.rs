//! 请求参数解析错误处理
//!
//! 把 actix-web 的 JSON 与路径参数解析错误转换为统一的 `{"mensagem": ...}` 响应。

use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::ErrorResponse;

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    debug!("Rejected JSON payload: {}", err);
    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type deve ser application/json.".to_string(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Corpo da requisição muito grande.".to_string()
        }
        JsonPayloadError::Deserialize(e) => format!("JSON inválido: {e}"),
        _ => "JSON inválido.".to_string(),
    };
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(message));
    InternalError::from_response(err, response).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    debug!("Rejected path parameter: {}", err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new("ID inválido."));
    InternalError::from_response(err, response).into()
}
