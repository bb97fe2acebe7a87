//! 测试辅助：内存 SQLite 存储与可注入错误的假存储

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::DatabaseConfig;
use crate::errors::{AcademyError, Result};
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
use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};

/// 每次调用都得到一个全新的、已迁移的内存数据库
pub async fn sqlite_storage() -> Arc<dyn Storage> {
    let storage = SeaOrmStorage::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory sqlite storage");
    Arc::new(storage)
}

/// 记录调用次数；设置了 `failure` 时每个操作都返回该错误
#[derive(Default)]
pub struct FakeStorage {
    calls: AtomicUsize,
    failure: Option<AcademyError>,
}

impl FakeStorage {
    pub fn failing(err: AcademyError) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failure: Some(err),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl Storage for FakeStorage {
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.record()?;
        Ok(Course {
            id: 1,
            name: course.name,
        })
    }

    async fn get_course_by_id(&self, _id: i64) -> Result<Option<Course>> {
        self.record()?;
        Ok(None)
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.record()?;
        Ok(Vec::new())
    }

    async fn update_course(&self, id: i64, _update: UpdateCourseRequest) -> Result<Course> {
        self.record()?;
        Err(AcademyError::not_found(format!("course {id}")))
    }

    async fn delete_course(&self, _id: i64) -> Result<()> {
        self.record()
    }

    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.record()?;
        Ok(Student {
            id: 1,
            name: student.name,
            email: student.email,
        })
    }

    async fn get_student_by_id(&self, _id: i64) -> Result<Option<Student>> {
        self.record()?;
        Ok(None)
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.record()?;
        Ok(Vec::new())
    }

    async fn update_student(&self, id: i64, _update: UpdateStudentRequest) -> Result<Student> {
        self.record()?;
        Err(AcademyError::not_found(format!("student {id}")))
    }

    async fn delete_student(&self, _id: i64) -> Result<()> {
        self.record()
    }

    async fn create_enrollment(&self, student_id: i64, course_id: i64) -> Result<Enrollment> {
        self.record()?;
        Ok(Enrollment {
            id: 1,
            enrolled_at: chrono::Utc::now(),
            student_id,
            course_id,
        })
    }

    async fn list_enrollments_with_details(&self) -> Result<Vec<EnrollmentDetail>> {
        self.record()?;
        Ok(Vec::new())
    }

    async fn delete_enrollment(&self, _id: i64) -> Result<()> {
        self.record()
    }
}
