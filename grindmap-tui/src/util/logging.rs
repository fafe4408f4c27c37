//! 文件日志
//!
//! 终端处于原始模式，不能往 stdout/stderr 写日志，所以日志写到配置目录下的文件。
//! core 通过 `log` 门面输出的记录由 tracing-subscriber 桥接过来。

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
pub const LOG_FILE_NAME: &str = "grindmap-tui.log";

/// 安装全局 subscriber
///
/// 返回的 guard 必须存活到程序结束，否则缓冲中的日志会丢失。
/// 过滤级别取自 `RUST_LOG`，默认 `info`。
pub fn init_logging(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    Ok(guard)
}
