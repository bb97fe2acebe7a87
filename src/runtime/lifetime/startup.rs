use crate::errors::{AcademyError, Result};
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
/// 包括 TLS 加密后端、存储连接与数据库迁移
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // 远程数据库（PostgreSQL/MySQL）的 TLS 连接需要默认加密后端
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage()
        .await
        .map_err(|e| e.with_context("Failed to create storage backend"))?;
    warn!("Storage backend initialized and migrations completed");

    Ok(StartupContext { storage })
}

/// 启动失败时的统一输出
pub fn report_startup_error(err: &AcademyError) {
    #[cfg(debug_assertions)]
    eprintln!("{}", err.format_colored());
    #[cfg(not(debug_assertions))]
    eprintln!("{}", err.format_simple());
}
