use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, warn};

use super::StudentService;
use crate::errors::AcademyError;
use crate::models::{ErrorResponse, students::requests::UpdateStudentRequest};

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.update_student(student_id, update_data).await {
        Ok(student) => Ok(HttpResponse::Ok().json(student)),
        Err(AcademyError::NotFound(_)) => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new("Aluno não encontrado")))
        }
        Err(AcademyError::UniqueViolation(msg)) => {
            warn!("Student {} update rejected, duplicate email: {}", student_id, msg);
            Ok(HttpResponse::Conflict().json(ErrorResponse::new("Email já cadastrado.")))
        }
        Err(e) => {
            error!("Student {} update failed: {}", student_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Erro ao atualizar aluno.")))
        }
    }
}
