use actix_web::{HttpResponse, web};

use crate::config::AppConfig;

// 服务根路径，返回系统名称
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(AppConfig::get().app.system_name.clone())
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}
