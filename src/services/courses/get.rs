use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::ErrorResponse;

pub async fn get_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(course)),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new("Curso não encontrado")))
        }
        Err(e) => {
            error!("Failed to get course {}: {}", course_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Erro ao buscar curso.")))
        }
    }
}
