//! 课程存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{AcademyError, Result};
use crate::models::courses::{
    entities::Course,
    requests::{CreateCourseRequest, UpdateCourseRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let model = ActiveModel {
            nome: Set(req.name),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建课程失败"))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询课程失败"))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出全部课程
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询课程列表失败"))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 更新课程信息
    pub async fn update_course_impl(&self, id: i64, update: UpdateCourseRequest) -> Result<Course> {
        // 先检查课程是否存在
        let existing = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询课程失败"))?
            .ok_or_else(|| AcademyError::not_found(format!("课程 {id} 不存在")))?;

        let Some(name) = update.name else {
            return Ok(existing.into_course());
        };

        let model = ActiveModel {
            id: Set(id),
            nome: Set(name),
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(db_error("更新课程失败"))?;

        Ok(result.into_course())
    }

    /// 删除课程（其选课记录由外键级联删除）
    pub async fn delete_course_impl(&self, id: i64) -> Result<()> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除课程失败"))?;

        if result.rows_affected == 0 {
            return Err(AcademyError::not_found(format!("课程 {id} 不存在")));
        }
        Ok(())
    }
}
