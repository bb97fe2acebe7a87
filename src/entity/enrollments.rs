//! 选课实体（学生与课程的关联）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "matriculas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub data_matricula: i64, // 毫秒时间戳
    pub aluno_id: i64,
    pub curso_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::AlunoId",
        to = "super::students::Column::Id",
        on_delete = "NoAction"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CursoId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_enrollment(self) -> crate::models::enrollments::entities::Enrollment {
        use crate::models::enrollments::entities::Enrollment;
        use chrono::{DateTime, Utc};

        Enrollment {
            id: self.id,
            enrolled_at: DateTime::<Utc>::from_timestamp_millis(self.data_matricula)
                .unwrap_or_default(),
            student_id: self.aluno_id,
            course_id: self.curso_id,
        }
    }
}
