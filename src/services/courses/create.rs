use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::{ErrorResponse, courses::requests::CreateCourseRequest};

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!("Course {} created with id {}", course.name, course.id);
            Ok(HttpResponse::Created().json(course))
        }
        Err(e) => {
            error!("Course creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Erro ao criar curso.")))
        }
    }
}
