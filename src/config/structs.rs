use serde::{Deserialize, Serialize};

/// 全局配置，各节对应 config.toml 中的同名表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

/// 服务名称、运行环境与日志级别
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    // 根路径返回的服务名称
    pub system_name: String,
    // development / production
    pub environment: String,
    // tracing EnvFilter 语法
    pub log_level: String,
}

impl AppSettings {
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

/// HTTP 监听与工作线程
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize, // 0 表示按 CPU 核数
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,    // 毫秒
    pub client_disconnect: u64, // 毫秒
    pub keep_alive: u64,        // 秒
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    // JSON 请求体上限（字节）
    pub max_payload_size: usize,
}

/// 数据库连接
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // sqlite://、postgres://、mysql:// 或 .db 文件路径
    pub pool_size: u32, // 最大连接数
    pub timeout: u64,   // 获取连接超时 (秒)
}

impl DatabaseConfig {
    /// 单连接的 SQLite 内存库，进程结束即丢弃
    pub fn in_memory() -> Self {
        Self {
            url: ":memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        }
    }
}

/// 跨域预检缓存时间
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub max_age: usize,
}
