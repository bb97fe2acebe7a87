use std::sync::Arc;

use crate::models::{
    courses::{
        entities::Course,
        requests::{CreateCourseRequest, UpdateCourseRequest},
    },
    enrollments::entities::{Enrollment, EnrollmentDetail},
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 持久化网关
///
/// 失败时返回的 `AcademyError` 已按种类区分：
/// `NotFound`（记录不存在）、`UniqueViolation`（唯一约束）、
/// `ForeignKeyViolation`（外键约束），其余均为 `DatabaseOperation`。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 列出全部课程
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 更新课程，不存在时返回 NotFound
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Course>;
    // 删除课程，不存在时返回 NotFound
    async fn delete_course(&self, id: i64) -> Result<()>;

    /// 学生管理方法
    // 创建学生，邮箱重复时返回 UniqueViolation
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 列出全部学生
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 更新学生
    async fn update_student(&self, id: i64, update: UpdateStudentRequest) -> Result<Student>;
    // 删除学生，仍有选课时返回 ForeignKeyViolation
    async fn delete_student(&self, id: i64) -> Result<()>;

    /// 选课管理方法
    // 创建选课，学生或课程不存在时返回 ForeignKeyViolation
    async fn create_enrollment(&self, student_id: i64, course_id: i64) -> Result<Enrollment>;
    // 列出全部选课，附带学生和课程
    async fn list_enrollments_with_details(&self) -> Result<Vec<EnrollmentDetail>>;
    // 删除选课
    async fn delete_enrollment(&self, id: i64) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
