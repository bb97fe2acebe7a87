use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::models::ErrorResponse;

pub async fn list_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_enrollments_with_details().await {
        Ok(enrollments) => Ok(HttpResponse::Ok().json(enrollments)),
        Err(e) => {
            error!("Failed to list enrollments: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Erro ao listar matrículas.")))
        }
    }
}
