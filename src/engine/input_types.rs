//! ### English
//! C ABI input event types.
//! Kept as POD (plain-old-data) so a C engine can read them without any Rust types.
//!
//! ### 中文
//! C ABI 输入事件类型。
//! 保持为 POD（纯数据结构），C 侧引擎无需任何 Rust 类型即可读取。

use super::event::{InputEvent, KeyEvent, MouseButtonEvent, MouseMotionEvent};

/// ### English
/// One translated event in a single struct. Fields not used by `kind` are zero.
///
/// ### 中文
/// 单个转换后事件结构体。与 `kind` 无关的字段为 0。
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EmbedViewInputEvent {
    /// ### English
    /// Event kind (one of `EMBED_VIEW_INPUT_KIND_*`).
    ///
    /// ### 中文
    /// 事件类型（`EMBED_VIEW_INPUT_KIND_*` 之一）。
    pub kind: u32,
    pub window_id: i32,
    /// ### English
    /// `Modifiers` bits (`1` shift, `2` ctrl, `4` alt, `8` meta).
    ///
    /// ### 中文
    /// `Modifiers` 位（`1` shift，`2` ctrl，`4` alt，`8` meta）。
    pub modifiers: u32,
    /// ### English
    /// `0` = released, otherwise pressed (key and button events).
    ///
    /// ### 中文
    /// `0` = 松开，其它 = 按下（键盘与按键事件）。
    pub pressed: u8,
    /// ### English
    /// Key auto-repeat flag.
    ///
    /// ### 中文
    /// 按键自动重复标记。
    pub echo: u8,
    pub double_click: u8,

    /// ### English
    /// Engine physical key code.
    ///
    /// ### 中文
    /// 引擎物理键码。
    pub physical_keycode: u32,
    /// ### English
    /// Key location (`0` = unspecified, `1` = left, `2` = right).
    ///
    /// ### 中文
    /// 按键位置（`0` = 未指定，`1` = 左，`2` = 右）。
    pub key_location: u32,

    /// ### English
    /// Engine mouse button index (`0` = none/unclassified, `1` left, `2` right, `3` middle,
    /// `4..=7` wheel up/down/left/right).
    ///
    /// ### 中文
    /// 引擎鼠标按键索引（`0` = 无/未分类，`1` 左，`2` 右，`3` 中，`4..=7` 滚轮上/下/左/右）。
    pub button_index: u32,
    /// ### English
    /// Held buttons (`1` left, `2` right, `4` middle).
    ///
    /// ### 中文
    /// 按住的按键（`1` 左，`2` 右，`4` 中）。
    pub button_mask: u32,
    /// ### English
    /// Wheel intensity.
    ///
    /// ### 中文
    /// 滚轮强度。
    pub factor: f64,

    /// ### English
    /// Pointer X in window-local points (top-left origin).
    ///
    /// ### 中文
    /// 指针 X（窗口本地点，左上角原点）。
    pub x: f32,
    /// ### English
    /// Pointer Y in window-local points (top-left origin).
    ///
    /// ### 中文
    /// 指针 Y（窗口本地点，左上角原点）。
    pub y: f32,
    pub relative_x: f32,
    pub relative_y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub pressure: f32,
    pub tilt_x: f32,
    pub tilt_y: f32,
}

/// ### English
/// Input kind: keyboard.
///
/// ### 中文
/// 输入类型：键盘。
pub const EMBED_VIEW_INPUT_KIND_KEY: u32 = 1;

/// ### English
/// Input kind: mouse button (including wheel clicks).
///
/// ### 中文
/// 输入类型：鼠标按键（包括滚轮点击）。
pub const EMBED_VIEW_INPUT_KIND_MOUSE_BUTTON: u32 = 2;

/// ### English
/// Input kind: mouse motion. Only ever delivered through the motion callback.
///
/// ### 中文
/// 输入类型：鼠标移动。只会通过移动回调派发。
pub const EMBED_VIEW_INPUT_KIND_MOUSE_MOTION: u32 = 3;

impl From<&KeyEvent> for EmbedViewInputEvent {
    fn from(ev: &KeyEvent) -> Self {
        Self {
            kind: EMBED_VIEW_INPUT_KIND_KEY,
            window_id: ev.window_id.0,
            modifiers: ev.modifiers.bits(),
            pressed: ev.pressed as u8,
            echo: ev.echo as u8,
            physical_keycode: ev.physical_keycode.code(),
            key_location: ev.location as u32,
            ..Self::default()
        }
    }
}

impl From<&MouseButtonEvent> for EmbedViewInputEvent {
    fn from(ev: &MouseButtonEvent) -> Self {
        Self {
            kind: EMBED_VIEW_INPUT_KIND_MOUSE_BUTTON,
            window_id: ev.window_id.0,
            modifiers: ev.modifiers.bits(),
            pressed: ev.pressed as u8,
            double_click: ev.double_click as u8,
            button_index: ev.button_index as u32,
            button_mask: ev.button_mask.bits(),
            factor: ev.factor,
            x: ev.position.x,
            y: ev.position.y,
            ..Self::default()
        }
    }
}

impl From<&MouseMotionEvent> for EmbedViewInputEvent {
    fn from(ev: &MouseMotionEvent) -> Self {
        Self {
            kind: EMBED_VIEW_INPUT_KIND_MOUSE_MOTION,
            window_id: ev.window_id.0,
            modifiers: ev.modifiers.bits(),
            button_mask: ev.button_mask.bits(),
            x: ev.position.x,
            y: ev.position.y,
            relative_x: ev.relative.x,
            relative_y: ev.relative.y,
            velocity_x: ev.velocity.x,
            velocity_y: ev.velocity.y,
            pressure: ev.pressure,
            tilt_x: ev.tilt.x,
            tilt_y: ev.tilt.y,
            ..Self::default()
        }
    }
}

impl From<&InputEvent> for EmbedViewInputEvent {
    fn from(ev: &InputEvent) -> Self {
        match ev {
            InputEvent::Key(ev) => ev.into(),
            InputEvent::MouseButton(ev) => ev.into(),
            InputEvent::MouseMotion(ev) => ev.into(),
        }
    }
}
