use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::StudentService;
use crate::errors::AcademyError;
use crate::models::{ErrorResponse, students::requests::CreateStudentRequest};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student {} created with id {}", student.email, student.id);
            Ok(HttpResponse::Created().json(student))
        }
        Err(AcademyError::UniqueViolation(msg)) => {
            warn!("Student creation rejected, duplicate email: {}", msg);
            Ok(HttpResponse::Conflict().json(ErrorResponse::new("Email já cadastrado.")))
        }
        Err(e) => {
            error!("Student creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Erro ao criar aluno.")))
        }
    }
}
