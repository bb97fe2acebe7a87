use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::CourseService;
use crate::models::{ErrorResponse, courses::requests::UpdateCourseRequest};

pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    update_data: UpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 课程更新的任何存储错误都按"未找到"处理
    match storage.update_course(course_id, update_data).await {
        Ok(course) => Ok(HttpResponse::Ok().json(course)),
        Err(e) => {
            warn!("Course {} update failed: {}", course_id, e);
            Ok(HttpResponse::NotFound().json(ErrorResponse::new("Curso não encontrado")))
        }
    }
}
