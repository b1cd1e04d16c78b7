//! 命令行工具共用的日志初始化

use tracing_subscriber::EnvFilter;

/// 日志写到 stderr，stdout 只留给结果输出
///
/// 优先读取 `RUST_LOG`；未设置时默认 `exprtree=warn`，`verbose` 时为 `exprtree=debug`。
pub fn init(verbose: bool) {
    let default_directive = if verbose { "exprtree=debug" } else { "exprtree=warn" };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
