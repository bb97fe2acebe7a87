use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::services::StudentService;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(&req, student_data.into_inner())
        .await
}

pub async fn get_student(req: HttpRequest, student_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .get_student(&req, student_id.into_inner())
        .await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: web::Path<i64>,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, student_id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .delete_student(&req, student_id.into_inner())
        .await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/alunos")
            .route("", web::get().to(list_students))
            .route("", web::post().to(create_student))
            .route("/{id}", web::get().to(get_student))
            .route("/{id}", web::put().to(update_student))
            .route("/{id}", web::delete().to(delete_student)),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::{Value, json};

    use crate::models::courses::requests::CreateCourseRequest;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::routes::configure_routes;
    use crate::storage::Storage;
    use crate::test_support::sqlite_storage;

    fn new_student(name: &str, email: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_list_students_empty() {
        let storage = sqlite_storage().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_routes),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/alunos").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_create_student() {
        let storage = sqlite_storage().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/alunos")
            .set_json(json!({ "nome": "Aluno Teste", "email": "aluno@teste.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["nome"], "Aluno Teste");
        assert_eq!(body["email"], "aluno@teste.com");
        assert!(body["id"].is_i64());
    }

    #[actix_web::test]
    async fn test_create_student_accepts_english_field_names() {
        let storage = sqlite_storage().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/alunos")
            .set_json(json!({ "name": "Student", "email": "student@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["nome"], "Student");
    }

    #[actix_web::test]
    async fn test_create_student_duplicate_email() {
        let storage = sqlite_storage().await;
        storage
            .create_student(new_student("Primeiro", "repetido@teste.com"))
            .await
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/alunos")
            .set_json(json!({ "nome": "Segundo", "email": "repetido@teste.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["mensagem"], "Email já cadastrado.");
        assert_eq!(storage.list_students().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_create_student_stores_email_verbatim() {
        let storage = sqlite_storage().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/alunos")
            .set_json(json!({ "nome": "Aluno", "email": "sem-arroba" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "sem-arroba");

        let req = test::TestRequest::post()
            .uri("/alunos")
            .set_json(json!({ "nome": "Aluno" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_student() {
        let storage = sqlite_storage().await;
        let student = storage
            .create_student(new_student("Aluno Busca", "busca@teste.com"))
            .await
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/alunos/{}", student.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "id": student.id, "nome": "Aluno Busca", "email": "busca@teste.com" })
        );

        let req = test::TestRequest::get().uri("/alunos/9999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["mensagem"], "Aluno não encontrado");
    }

    #[actix_web::test]
    async fn test_update_student() {
        let storage = sqlite_storage().await;
        let student = storage
            .create_student(new_student("Nome Antigo", "antigo@teste.com"))
            .await
            .unwrap();
        storage
            .create_student(new_student("Outro", "ocupado@teste.com"))
            .await
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/alunos/{}", student.id))
            .set_json(json!({ "nome": "Nome Novo" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["nome"], "Nome Novo");
        assert_eq!(body["email"], "antigo@teste.com");

        let req = test::TestRequest::put()
            .uri(&format!("/alunos/{}", student.id))
            .set_json(json!({ "email": "ocupado@teste.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::put()
            .uri("/alunos/9999")
            .set_json(json!({ "nome": "Fantasma" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_student() {
        let storage = sqlite_storage().await;
        let student = storage
            .create_student(new_student("Aluno para Deletar", "deletar@teste.com"))
            .await
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/alunos/{}", student.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(storage.get_student_by_id(student.id).await.unwrap().is_none());

        let req = test::TestRequest::delete().uri("/alunos/9999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["mensagem"], "Aluno não encontrado.");
    }

    #[actix_web::test]
    async fn test_delete_student_with_enrollments_conflicts() {
        let storage = sqlite_storage().await;
        let student = storage
            .create_student(new_student("Aluno Matriculado", "matriculado@teste.com"))
            .await
            .unwrap();
        let course = storage
            .create_course(CreateCourseRequest {
                name: "Curso Ativo".into(),
            })
            .await
            .unwrap();
        storage
            .create_enrollment(student.id, course.id)
            .await
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/alunos/{}", student.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["mensagem"],
            "Aluno não pode ser deletado pois possui matrículas ativas."
        );
        assert!(storage.get_student_by_id(student.id).await.unwrap().is_some());
        assert_eq!(storage.list_enrollments_with_details().await.unwrap().len(), 1);
    }
}
