use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::EnrollmentService;
use crate::models::ErrorResponse;

pub async fn delete_enrollment(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_enrollment(enrollment_id).await {
        Ok(()) => {
            info!("Enrollment {} deleted", enrollment_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Err(e) => {
            warn!("Enrollment {} deletion failed: {}", enrollment_id, e);
            Ok(HttpResponse::NotFound().json(ErrorResponse::new("Matrícula não encontrada.")))
        }
    }
}
