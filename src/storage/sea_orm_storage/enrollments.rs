//! 选课存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, db_error};
use crate::entity::courses::Column as CourseColumn;
use crate::entity::enrollments::{ActiveModel, Column};
use crate::entity::prelude::{Courses, Enrollments, Students};
use crate::errors::{AcademyError, Result};
use crate::models::enrollments::entities::{Enrollment, EnrollmentDetail};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::warn;

impl SeaOrmStorage {
    /// 创建选课
    ///
    /// 不预先检查学生和课程是否存在，由数据库外键约束判定，
    /// 失败时返回 `ForeignKeyViolation`。
    pub async fn create_enrollment_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp_millis();

        let model = ActiveModel {
            data_matricula: Set(now),
            aluno_id: Set(student_id),
            curso_id: Set(course_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建选课失败"))?;

        Ok(result.into_enrollment())
    }

    /// 列出全部选课，并带上对应的学生和课程
    pub async fn list_enrollments_with_details_impl(&self) -> Result<Vec<EnrollmentDetail>> {
        let rows = Enrollments::find()
            .find_also_related(Students)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询选课列表失败"))?;

        let mut course_ids: Vec<i64> = rows.iter().map(|(e, _)| e.curso_id).collect();
        course_ids.sort_unstable();
        course_ids.dedup();

        let courses: HashMap<i64, _> = if course_ids.is_empty() {
            HashMap::new()
        } else {
            Courses::find()
                .filter(CourseColumn::Id.is_in(course_ids))
                .all(&self.db)
                .await
                .map_err(db_error("查询选课课程失败"))?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        let details = rows
            .into_iter()
            .filter_map(|(enrollment, student)| {
                let course = courses.get(&enrollment.curso_id).cloned();
                match (student, course) {
                    (Some(student), Some(course)) => Some(EnrollmentDetail {
                        enrollment: enrollment.into_enrollment(),
                        student: student.into_student(),
                        course: course.into_course(),
                    }),
                    _ => {
                        warn!(
                            "Enrollment {} references a missing student or course, skipping",
                            enrollment.id
                        );
                        None
                    }
                }
            })
            .collect();

        Ok(details)
    }

    /// 删除选课
    pub async fn delete_enrollment_impl(&self, id: i64) -> Result<()> {
        let result = Enrollments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除选课失败"))?;

        if result.rows_affected == 0 {
            return Err(AcademyError::not_found(format!("选课 {id} 不存在")));
        }
        Ok(())
    }
}
