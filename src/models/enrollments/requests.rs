use serde::Deserialize;
use ts_rs::TS;

// 创建选课请求
//
// 两个 ID 缺失时由服务层返回 400
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct CreateEnrollmentRequest {
    #[serde(rename = "alunoId", alias = "studentId")]
    pub student_id: Option<i64>,
    #[serde(rename = "cursoId", alias = "courseId")]
    pub course_id: Option<i64>,
}
