//! ### English
//! Error type for the embedding bridge.
//! None of these are fatal for input delivery: the view adapter logs and drops.
//!
//! ### 中文
//! 嵌入桥接层的错误类型。
//! 对输入派发而言均非致命：view 适配层只记录日志并丢弃。

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// ### English
    /// The engine side of a queued engine sink was dropped.
    ///
    /// ### 中文
    /// 队列式引擎接收端已被 drop。
    #[error("engine command receiver has been dropped")]
    EngineDisconnected,

    /// ### English
    /// A required embedder callback was NULL.
    ///
    /// ### 中文
    /// 宿主提供的必需回调为 NULL。
    #[error("required embedder callback `{0}` is missing")]
    MissingCallback(&'static str),

    /// ### English
    /// View flags contained bits this build does not understand.
    ///
    /// ### 中文
    /// view flags 中包含当前版本无法识别的位。
    #[error("unknown view flag bits {0:#x}")]
    InvalidViewFlags(u32),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
