pub mod courses;

pub mod students;

pub mod enrollments;

pub mod system;

pub use courses::configure_course_routes;
pub use enrollments::configure_enrollment_routes;
pub use students::configure_student_routes;
pub use system::configure_system_routes;

use actix_web::web;

use crate::utils::{json_error_handler, path_error_handler};

/// 注册参数错误处理器和全部业务路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler)) // 设置JSON错误处理器
        .app_data(web::PathConfig::default().error_handler(path_error_handler)) // 设置路径参数错误处理器
        .configure(configure_system_routes) // 配置根路径
        .configure(configure_course_routes) // 配置课程相关路由
        .configure(configure_student_routes) // 配置学生相关路由
        .configure(configure_enrollment_routes); // 配置选课相关路由
}
