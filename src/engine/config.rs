//! ### English
//! Per-view configuration.
//!
//! ### 中文
//! 每个 view 的配置。

use super::error::{BridgeError, Result};
use super::flags::{
    EMBED_VIEW_FLAG_ALL, EMBED_VIEW_FLAG_NO_CONTROL_CLICK, EMBED_VIEW_FLAG_RESIZE_ALWAYS,
    EMBED_VIEW_FLAG_TOP_DOWN_COORDINATES,
};

/// ### English
/// Vertical origin convention of the host's view-local coordinates.
///
/// ### 中文
/// 宿主 view 本地坐标的纵向原点约定。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CoordinateOrigin {
    /// ### English
    /// Origin at bottom-left, Y grows upward (AppKit). Positions are flipped.
    ///
    /// ### 中文
    /// 原点在左下角，Y 向上增长（AppKit）。位置需要翻转。
    #[default]
    BottomLeft,
    /// ### English
    /// Origin at top-left, Y grows downward (UIKit). Positions pass through.
    ///
    /// ### 中文
    /// 原点在左上角，Y 向下增长（UIKit）。位置原样传递。
    TopLeft,
}

/// ### English
/// Tunables for one embedded view.
///
/// ### 中文
/// 单个嵌入 view 的可调参数。
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    /// ### English
    /// Host coordinate origin convention.
    ///
    /// ### 中文
    /// 宿主坐标原点约定。
    pub origin: CoordinateOrigin,
    /// ### English
    /// Reinterpret Control + primary press as a secondary press.
    ///
    /// ### 中文
    /// 将 Control + 主键按下解释为副键按下。
    pub emulate_right_click: bool,
    /// ### English
    /// Skip the "size unchanged" check before notifying the engine.
    ///
    /// ### 中文
    /// 通知引擎前跳过“尺寸未变化”检查。
    pub resize_always: bool,
    /// ### English
    /// Delta of one wheel notch when the host reports precise (high-resolution) deltas.
    ///
    /// ### 中文
    /// 宿主上报高精度增量时，一格滚轮对应的增量。
    pub wheel_tick_delta: f64,
    /// ### English
    /// Lower bound applied to every wheel `factor`.
    ///
    /// ### 中文
    /// 所有滚轮 `factor` 的下限。
    pub min_wheel_factor: f64,
    /// ### English
    /// Backing scale used when neither the window nor the primary screen reports one.
    ///
    /// ### 中文
    /// 窗口与主屏幕都无法提供缩放时使用的 backing scale。
    pub fallback_scale: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            origin: CoordinateOrigin::BottomLeft,
            emulate_right_click: true,
            resize_always: false,
            wheel_tick_delta: 120.0,
            min_wheel_factor: 1.0,
            fallback_scale: 1.0,
        }
    }
}

impl ViewConfig {
    /// ### English
    /// Builds a config from `EMBED_VIEW_FLAG_*` bits on top of the defaults.
    /// Unknown bits are rejected so a newer embedder cannot silently lose behavior.
    ///
    /// ### 中文
    /// 在默认配置基础上应用 `EMBED_VIEW_FLAG_*` 位。
    /// 未知位会被拒绝，避免较新的宿主静默丢失行为。
    pub fn from_flags(view_flags: u32) -> Result<Self> {
        let unknown = view_flags & !EMBED_VIEW_FLAG_ALL;
        if unknown != 0 {
            return Err(BridgeError::InvalidViewFlags(unknown));
        }

        let origin = if view_flags & EMBED_VIEW_FLAG_TOP_DOWN_COORDINATES != 0 {
            CoordinateOrigin::TopLeft
        } else {
            CoordinateOrigin::BottomLeft
        };

        Ok(Self {
            origin,
            emulate_right_click: view_flags & EMBED_VIEW_FLAG_NO_CONTROL_CLICK == 0,
            resize_always: view_flags & EMBED_VIEW_FLAG_RESIZE_ALWAYS != 0,
            ..Self::default()
        })
    }
}
