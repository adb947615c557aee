//! ### English
//! Engine-side input events produced by the translator.
//! Positions are in the target window's local space: top-left origin, Y grows downward,
//! device-independent points.
//!
//! ### 中文
//! 由转换器生成的引擎侧输入事件。
//! 位置位于目标窗口本地空间：左上角原点，Y 向下增长，单位为设备无关点。

use bitflags::bitflags;

use super::button_mask::ButtonMask;
use super::key::{Key, KeyLocation, MouseButton};

/// ### English
/// Window identifier in the engine's window-id space. The bridge only queries ids, never allocates.
///
/// ### 中文
/// 引擎窗口 ID 空间中的窗口标识。桥接层只查询 ID，从不分配。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct WindowId(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

bitflags! {
    /// ### English
    /// Modifier keys held while an event happened.
    ///
    /// ### 中文
    /// 事件发生时按住的修饰键。
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
    }
}

/// ### English
/// Keyboard event keyed by physical position.
///
/// ### 中文
/// 以物理位置标识的键盘事件。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyEvent {
    pub window_id: WindowId,
    pub physical_keycode: Key,
    pub modifiers: Modifiers,
    /// ### English
    /// OS auto-repeat.
    ///
    /// ### 中文
    /// 系统自动重复。
    pub echo: bool,
    pub pressed: bool,
    pub location: KeyLocation,
}

impl KeyEvent {
    pub fn ctrl_pressed(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    pub fn shift_pressed(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    pub fn alt_pressed(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    pub fn meta_pressed(&self) -> bool {
        self.modifiers.contains(Modifiers::META)
    }
}

/// ### English
/// Mouse button transition; also used for synthesized wheel "clicks".
///
/// ### 中文
/// 鼠标按键状态变化；也用于合成的滚轮“点击”。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseButtonEvent {
    pub window_id: WindowId,
    pub button_index: MouseButton,
    pub pressed: bool,
    pub position: Vector2,
    /// ### English
    /// Equal to `position`: a single embedded window has no separate global space.
    ///
    /// ### 中文
    /// 与 `position` 相同：单窗口嵌入没有独立的全局空间。
    pub global_position: Vector2,
    pub button_mask: ButtonMask,
    pub modifiers: Modifiers,
    pub double_click: bool,
    /// ### English
    /// Wheel intensity (`>= 1.0` for wheel buttons, `1.0` otherwise).
    ///
    /// ### 中文
    /// 滚轮强度（滚轮按键为 `>= 1.0`，其它为 `1.0`）。
    pub factor: f64,
}

/// ### English
/// Pointer motion. Never submitted to the engine's standard input pipeline; see `MotionHandlerSlot`.
///
/// ### 中文
/// 指针移动。绝不提交到引擎的标准输入管线；参见 `MotionHandlerSlot`。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseMotionEvent {
    pub window_id: WindowId,
    pub position: Vector2,
    pub global_position: Vector2,
    pub relative: Vector2,
    pub velocity: Vector2,
    pub button_mask: ButtonMask,
    pub modifiers: Modifiers,
    /// ### English
    /// Normalized stylus pressure (`0.0` for non-tablet input).
    ///
    /// ### 中文
    /// 归一化的手写笔压力（非数位板输入为 `0.0`）。
    pub pressure: f32,
    pub tilt: Vector2,
}

/// ### English
/// One translated event.
///
/// ### 中文
/// 一个转换后的事件。
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    MouseButton(MouseButtonEvent),
    MouseMotion(MouseMotionEvent),
}

impl InputEvent {
    pub fn window_id(&self) -> WindowId {
        match self {
            InputEvent::Key(ev) => ev.window_id,
            InputEvent::MouseButton(ev) => ev.window_id,
            InputEvent::MouseMotion(ev) => ev.window_id,
        }
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(value: KeyEvent) -> Self {
        InputEvent::Key(value)
    }
}

impl From<MouseButtonEvent> for InputEvent {
    fn from(value: MouseButtonEvent) -> Self {
        InputEvent::MouseButton(value)
    }
}

impl From<MouseMotionEvent> for InputEvent {
    fn from(value: MouseMotionEvent) -> Self {
        InputEvent::MouseMotion(value)
    }
}
