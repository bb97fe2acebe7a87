use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 课程名称
    #[serde(rename = "nome")]
    pub name: String,
}
