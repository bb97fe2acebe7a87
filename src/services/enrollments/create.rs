use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::EnrollmentService;
use crate::errors::AcademyError;
use crate::models::{ErrorResponse, enrollments::requests::CreateEnrollmentRequest};

pub async fn create_enrollment(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_data: CreateEnrollmentRequest,
) -> ActixResult<HttpResponse> {
    // 两个 ID 都必须提供且非零，校验在访问存储之前完成
    let present = |id: Option<i64>| id.filter(|&id| id != 0);
    let (Some(student_id), Some(course_id)) = (
        present(enrollment_data.student_id),
        present(enrollment_data.course_id),
    ) else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            "alunoId e cursoId são obrigatórios.",
        )));
    };

    let storage = service.get_storage(request)?;

    match storage.create_enrollment(student_id, course_id).await {
        Ok(enrollment) => {
            info!(
                "Student {} enrolled in course {} (enrollment {})",
                student_id, course_id, enrollment.id
            );
            Ok(HttpResponse::Created().json(enrollment))
        }
        // 不区分是学生还是课程不存在
        Err(AcademyError::ForeignKeyViolation(msg)) | Err(AcademyError::NotFound(msg)) => {
            warn!(
                "Enrollment rejected for student {} / course {}: {}",
                student_id, course_id, msg
            );
            Ok(HttpResponse::NotFound().json(ErrorResponse::new("Aluno ou Curso não encontrado.")))
        }
        Err(e) => {
            error!("Enrollment creation failed: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Erro ao criar matrícula.")))
        }
    }
}
