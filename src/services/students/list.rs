use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::ErrorResponse;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_students().await {
        Ok(students) => Ok(HttpResponse::Ok().json(students)),
        Err(e) => {
            error!("Failed to list students: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Erro ao listar alunos.")))
        }
    }
}
