//! ### English
//! Host-side view queries and raw host input notifications.
//!
//! The host platform owns the native view; the bridge only reads its geometry through
//! `HostView` and its global pointer state through `PointerState`.
//!
//! ### 中文
//! 宿主侧 view 查询接口与原始宿主输入通知。
//!
//! 原生 view 由宿主平台持有；桥接层仅通过 `HostView` 读取几何信息，
//! 通过 `PointerState` 读取全局指针状态。

use bitflags::bitflags;
use dpi::{LogicalPosition, LogicalSize};

use super::event::Modifiers;

/// ### English
/// Rectangle in host points (the view's bounds, or the surface frame).
///
/// ### 中文
/// 以宿主点为单位的矩形（view 的 bounds 或 surface 的 frame）。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: LogicalPosition<f64>,
    pub size: LogicalSize<f64>,
}

impl Rect {
    pub fn from_size(size: LogicalSize<f64>) -> Self {
        Self {
            origin: LogicalPosition::new(0.0, 0.0),
            size,
        }
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::from_size(LogicalSize::new(0.0, 0.0))
    }
}

/// ### English
/// Geometry queries against the native hosting view.
///
/// ### 中文
/// 对原生宿主 view 的几何查询。
pub trait HostView {
    /// ### English
    /// Current bounds in points.
    ///
    /// ### 中文
    /// 当前 bounds（单位：点）。
    fn bounds(&self) -> Rect;

    /// ### English
    /// Backing scale of the window the view lives in, or `None` while detached.
    ///
    /// ### 中文
    /// view 所在窗口的 backing scale；未附加到窗口时为 `None`。
    fn window_backing_scale(&self) -> Option<f64>;

    /// ### English
    /// Backing scale of the primary display, if one is known.
    ///
    /// ### 中文
    /// 主显示器的 backing scale（若已知）。
    fn main_screen_backing_scale(&self) -> Option<f64> {
        None
    }

    /// ### English
    /// Converts a point from window coordinates into this view's coordinates,
    /// still in the host's own vertical convention.
    ///
    /// ### 中文
    /// 将窗口坐标中的点转换为本 view 坐标（仍保持宿主的纵向约定）。
    fn convert_from_window(&self, point: LogicalPosition<f64>) -> LogicalPosition<f64>;
}

/// ### English
/// Out-of-band "which mouse buttons are down right now" query.
/// Bit 0 = left, bit 1 = right, bit 2 = middle; higher bits are ignored.
///
/// ### 中文
/// 带外查询“当前按下了哪些鼠标键”。
/// bit 0 = 左键，bit 1 = 右键，bit 2 = 中键；更高位忽略。
pub trait PointerState {
    fn pressed_mouse_buttons(&self) -> u32;
}

bitflags! {
    /// ### English
    /// Host modifier flag bits (device-independent part of the host's modifier word).
    ///
    /// ### 中文
    /// 宿主修饰键标志位（宿主修饰字中与设备无关的部分）。
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct HostModifierFlags: u64 {
        const CAPS_LOCK = 1 << 16;
        const SHIFT = 1 << 17;
        const CONTROL = 1 << 18;
        const OPTION = 1 << 19;
        const COMMAND = 1 << 20;
        const NUMERIC_PAD = 1 << 21;
        const HELP = 1 << 22;
        const FUNCTION = 1 << 23;
    }
}

impl HostModifierFlags {
    /// ### English
    /// Projects host flags onto the engine's four modifiers.
    ///
    /// ### 中文
    /// 将宿主标志投影到引擎的四个修饰键上。
    pub fn to_modifiers(self) -> Modifiers {
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::CTRL, self.contains(Self::CONTROL));
        modifiers.set(Modifiers::SHIFT, self.contains(Self::SHIFT));
        modifiers.set(Modifiers::ALT, self.contains(Self::OPTION));
        modifiers.set(Modifiers::META, self.contains(Self::COMMAND));
        modifiers
    }
}

/// ### English
/// Raw key-down / key-up notification.
///
/// ### 中文
/// 原始按键按下/抬起通知。
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct HostKeyEvent {
    pub key_code: u16,
    pub modifier_flags: HostModifierFlags,
    pub is_repeat: bool,
}

/// ### English
/// Stylus sample attached to a pointer event of the tablet-point subtype.
///
/// ### 中文
/// 附加在数位板点子类型指针事件上的手写笔采样。
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TabletPoint {
    /// ### English
    /// Pressure in `0.0..=1.0`.
    ///
    /// ### 中文
    /// 压力，范围 `0.0..=1.0`。
    pub pressure: f32,
    /// ### English
    /// Tilt in `-1.0..=1.0` on each axis.
    ///
    /// ### 中文
    /// 两个轴上的倾斜，范围 `-1.0..=1.0`。
    pub tilt: (f64, f64),
}

/// ### English
/// Raw mouse button / drag notification.
///
/// ### 中文
/// 原始鼠标按键/拖拽通知。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostMouseEvent {
    pub location_in_window: LogicalPosition<f64>,
    pub modifier_flags: HostModifierFlags,
    pub click_count: u32,
    /// ### English
    /// Per-event displacement, already in the engine's Y-down sense.
    ///
    /// ### 中文
    /// 单次事件位移，已是引擎的 Y 向下方向。
    pub delta: (f64, f64),
    pub tablet: Option<TabletPoint>,
}

impl Default for HostMouseEvent {
    fn default() -> Self {
        Self {
            location_in_window: LogicalPosition::new(0.0, 0.0),
            modifier_flags: HostModifierFlags::empty(),
            click_count: 0,
            delta: (0.0, 0.0),
            tablet: None,
        }
    }
}

/// ### English
/// Raw scroll-wheel notification; either axis may be zero.
///
/// ### 中文
/// 原始滚轮通知；任一轴都可能为 0。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostScrollEvent {
    pub location_in_window: LogicalPosition<f64>,
    pub modifier_flags: HostModifierFlags,
    pub scrolling_delta_x: f64,
    pub scrolling_delta_y: f64,
    pub has_precise_scrolling_deltas: bool,
}

impl Default for HostScrollEvent {
    fn default() -> Self {
        Self {
            location_in_window: LogicalPosition::new(0.0, 0.0),
            modifier_flags: HostModifierFlags::empty(),
            scrolling_delta_x: 0.0,
            scrolling_delta_y: 0.0,
            has_precise_scrolling_deltas: false,
        }
    }
}

/// ### English
/// Which native button hook fired.
///
/// ### 中文
/// 触发的是哪个原生按键回调。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostButton {
    Left,
    Right,
    Middle,
    /// ### English
    /// Any other host button number (e.g. side buttons).
    ///
    /// ### 中文
    /// 其它宿主按键编号（例如侧键）。
    Other(u8),
}
