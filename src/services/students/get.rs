use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::ErrorResponse;

pub async fn get_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(student)),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new("Aluno não encontrado")))
        }
        Err(e) => {
            error!("Failed to get student {}: {}", student_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Erro ao buscar aluno.")))
        }
    }
}
