//! ### English
//! Bitflags controlling optional view behaviors.
//!
//! These are passed through the C ABI as a `u32` bitmask and folded into `ViewConfig`.
//!
//! ### 中文
//! 控制 view 可选行为的位标志（bitflags）。
//!
//! 通过 C ABI 以 `u32` 位掩码传入，并合并进 `ViewConfig`。

/// ### English
/// The host already reports view-local coordinates with a top-left origin (Y grows downward),
/// so no Y flip is applied. Without this flag the host is assumed bottom-up.
///
/// ### 中文
/// 宿主上报的 view 本地坐标已是左上角原点（Y 向下增长），因此不做 Y 翻转。
/// 未设置时默认宿主坐标为自下而上。
pub const EMBED_VIEW_FLAG_TOP_DOWN_COORDINATES: u32 = 1 << 0;

/// ### English
/// Disables Control+click → right-click emulation for the primary button.
///
/// ### 中文
/// 关闭主键 Control+点击 → 右键 的模拟。
pub const EMBED_VIEW_FLAG_NO_CONTROL_CLICK: u32 = 1 << 1;

/// ### English
/// Forwards every resize to the engine, even when the device-pixel size did not change.
///
/// ### 中文
/// 每次 resize 都转发给引擎，即使设备像素尺寸没有变化。
pub const EMBED_VIEW_FLAG_RESIZE_ALWAYS: u32 = 1 << 2;

/// ### English
/// Union of all flags understood by this build.
///
/// ### 中文
/// 当前版本可识别的全部标志位的并集。
pub const EMBED_VIEW_FLAG_ALL: u32 = EMBED_VIEW_FLAG_TOP_DOWN_COORDINATES
    | EMBED_VIEW_FLAG_NO_CONTROL_CLICK
    | EMBED_VIEW_FLAG_RESIZE_ALWAYS;
