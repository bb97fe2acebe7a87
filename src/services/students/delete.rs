use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::StudentService;
use crate::errors::AcademyError;
use crate::models::ErrorResponse;

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_student(student_id).await {
        Ok(()) => {
            info!("Student {} deleted", student_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Err(AcademyError::NotFound(_)) => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new("Aluno não encontrado.")))
        }
        // 学生仍有选课，外键拒绝删除
        Err(AcademyError::ForeignKeyViolation(msg)) => {
            warn!("Student {} still has enrollments: {}", student_id, msg);
            Ok(HttpResponse::Conflict().json(ErrorResponse::new(
                "Aluno não pode ser deletado pois possui matrículas ativas.",
            )))
        }
        Err(e) => {
            error!("Student {} deletion failed: {}", student_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Erro ao deletar aluno.")))
        }
    }
}
