use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::CourseService;
use crate::models::ErrorResponse;

// 不检查课程下是否还有选课，选课记录随课程一起删除
pub async fn delete_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 课程删除的任何存储错误都按"未找到"处理
    match storage.delete_course(course_id).await {
        Ok(()) => {
            info!("Course {} deleted", course_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Err(e) => {
            warn!("Course {} deletion failed: {}", course_id, e);
            Ok(HttpResponse::NotFound().json(ErrorResponse::new("Curso não encontrado")))
        }
    }
}
