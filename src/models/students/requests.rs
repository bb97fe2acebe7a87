use serde::Deserialize;
use ts_rs::TS;

// 创建学生请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct CreateStudentRequest {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    pub email: String,
}

// 更新学生请求，未提供的字段保持不变
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct UpdateStudentRequest {
    #[serde(rename = "nome", alias = "name")]
    pub name: Option<String>,
    pub email: Option<String>,
}
