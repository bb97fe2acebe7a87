use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::ErrorResponse;

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_courses().await {
        Ok(courses) => Ok(HttpResponse::Ok().json(courses)),
        Err(e) => {
            error!("Failed to list courses: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Erro ao listar cursos.")))
        }
    }
}
