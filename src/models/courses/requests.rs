use serde::Deserialize;
use ts_rs::TS;

// 创建课程请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct CreateCourseRequest {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
}

// 更新课程请求，未提供的字段保持不变
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct UpdateCourseRequest {
    #[serde(rename = "nome", alias = "name")]
    pub name: Option<String>,
}
