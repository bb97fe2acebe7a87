//! 学生存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{AcademyError, Result};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let model = ActiveModel {
            nome: Set(req.name),
            email: Set(req.email),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建学生失败"))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询学生失败"))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let students = Students::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询学生列表失败"))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Student> {
        // 先检查学生是否存在
        let existing = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询学生失败"))?
            .ok_or_else(|| AcademyError::not_found(format!("学生 {id} 不存在")))?;

        if update.name.is_none() && update.email.is_none() {
            return Ok(existing.into_student());
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.nome = Set(name);
        }

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(db_error("更新学生失败"))?;

        Ok(result.into_student())
    }

    /// 删除学生
    ///
    /// 学生仍有选课时数据库外键拒绝删除，返回 `ForeignKeyViolation`。
    pub async fn delete_student_impl(&self, id: i64) -> Result<()> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除学生失败"))?;

        if result.rows_affected == 0 {
            return Err(AcademyError::not_found(format!("学生 {id} 不存在")));
        }
        Ok(())
    }
}
