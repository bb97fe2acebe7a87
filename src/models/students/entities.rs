use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct Student {
    // 学生ID
    pub id: i64,
    // 学生姓名
    #[serde(rename = "nome")]
    pub name: String,
    // 邮箱（全局唯一）
    pub email: String,
}
