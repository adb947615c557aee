//! ### English
//! Optional log sink for C embedders that have no `tracing` subscriber of their own.
//!
//! ### 中文
//! 为没有自带 `tracing` subscriber 的 C 宿主提供的可选日志输出。

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[unsafe(no_mangle)]
/// ### English
/// Installs a stderr log subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already installed (by an earlier call or by the
/// embedding process); calling it again is harmless.
///
/// ### 中文
/// 安装一个输出到 stderr 的日志 subscriber，由 `RUST_LOG` 过滤（默认 `info`）。
///
/// 若全局 subscriber 已被安装（之前的调用或宿主进程），返回 `false`；重复调用无害。
pub extern "C" fn embed_view_init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}
