use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::AppSettings;

/// 安装全局 tracing 订阅者，日志经非阻塞写入 stdout
///
/// 开发环境输出带源码位置的可读格式，其余环境输出 JSON。
/// 返回的 guard 必须持有到进程退出，否则缓冲中的日志会丢失。
pub fn init_tracing(settings: &AppSettings) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_level(true)
        .with_target(true);

    if settings.is_development() {
        builder
            .with_ansi(true)
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        builder.with_ansi(false).json().init();
    }

    guard
}
