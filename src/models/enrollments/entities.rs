use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::courses::entities::Course;
use crate::models::students::entities::Student;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct Enrollment {
    // 选课ID
    pub id: i64,
    // 选课时间
    #[serde(rename = "dataMatricula")]
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
    // 学生ID
    #[serde(rename = "alunoId")]
    pub student_id: i64,
    // 课程ID
    #[serde(rename = "cursoId")]
    pub course_id: i64,
}

// 带学生和课程完整信息的选课记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct EnrollmentDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub enrollment: Enrollment,
    #[serde(rename = "aluno")]
    pub student: Student,
    #[serde(rename = "curso")]
    pub course: Course,
}
