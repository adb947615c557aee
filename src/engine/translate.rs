//! ### English
//! Translation from raw host input notifications to engine input events.
//!
//! Translation is infallible: anything that cannot be classified yields no event.
//! The only state kept across calls is the Control-click decision of the primary button.
//!
//! ### 中文
//! 原始宿主输入通知到引擎输入事件的转换。
//!
//! 转换不会失败：无法分类的输入不产生事件。
//! 跨调用保留的唯一状态是主键的 Control+点击 判定。

use dpi::LogicalPosition;
use tracing::{debug, trace};

use super::button_mask::current_button_mask;
use super::config::{CoordinateOrigin, ViewConfig};
use super::event::{KeyEvent, MouseButtonEvent, MouseMotionEvent, Vector2, WindowId};
use super::host::{
    HostButton, HostKeyEvent, HostModifierFlags, HostMouseEvent, HostScrollEvent, HostView,
    PointerState,
};
use super::key::MouseButton;
use super::keyboard::{key_location, physical_key};

/// ### English
/// Stateful input translator for one hosting view.
///
/// ### 中文
/// 单个宿主 view 的有状态输入转换器。
#[derive(Debug, Clone)]
pub struct InputTranslator {
    origin: CoordinateOrigin,
    emulate_right_click: bool,
    wheel_tick_delta: f64,
    min_wheel_factor: f64,
    /// ### English
    /// Set when the last primary press was delivered as a secondary press;
    /// consumed by the matching primary release.
    ///
    /// ### 中文
    /// 上一次主键按下被作为副键按下派发时置位；
    /// 由与之配对的主键抬起消费。
    right_click_emulated: bool,
}

impl Default for InputTranslator {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}

impl InputTranslator {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            origin: config.origin,
            emulate_right_click: config.emulate_right_click,
            wheel_tick_delta: config.wheel_tick_delta,
            min_wheel_factor: config.min_wheel_factor,
            right_click_emulated: false,
        }
    }

    /// ### English
    /// Whether a primary press is currently being reported as a secondary button.
    ///
    /// ### 中文
    /// 当前主键按下是否正被作为副键上报。
    pub fn right_click_emulated(&self) -> bool {
        self.right_click_emulated
    }

    /// ### English
    /// Translates a key transition. Returns `None` for host key codes with no engine key.
    ///
    /// ### 中文
    /// 转换一次按键状态变化。对没有引擎按键对应的宿主键码返回 `None`。
    pub fn translate_key(
        &self,
        window_id: WindowId,
        event: &HostKeyEvent,
        pressed: bool,
    ) -> Option<KeyEvent> {
        let Some(physical_keycode) = physical_key(event.key_code) else {
            trace!(key_code = event.key_code, "dropping unmapped key");
            return None;
        };

        Some(KeyEvent {
            window_id,
            physical_keycode,
            modifiers: event.modifier_flags.to_modifiers(),
            echo: event.is_repeat,
            pressed,
            location: key_location(event.key_code),
        })
    }

    /// ### English
    /// Converts a window-space host location into the engine's top-left, Y-down view space.
    ///
    /// ### 中文
    /// 将窗口空间的宿主位置转换为引擎的左上原点、Y 向下的 view 空间。
    pub fn view_position(
        &self,
        view: &impl HostView,
        location_in_window: LogicalPosition<f64>,
    ) -> Vector2 {
        let local = view.convert_from_window(location_in_window);
        let y = match self.origin {
            CoordinateOrigin::BottomLeft => view.bounds().size.height - local.y,
            CoordinateOrigin::TopLeft => local.y,
        };
        Vector2::new(local.x as f32, y as f32)
    }

    /// ### English
    /// Translates a button transition.
    ///
    /// #### Parameters
    /// - `button`: Native button that fired (`Other` is delivered as `MouseButton::None`).
    /// - `out_of_stream`: Synthesized event; never carries double-click semantics.
    ///
    /// ### 中文
    /// 转换一次按键状态变化。
    ///
    /// #### 参数
    /// - `button`：触发的原生按键（`Other` 会以 `MouseButton::None` 派发）。
    /// - `out_of_stream`：合成事件；永远不带双击语义。
    #[allow(clippy::too_many_arguments)]
    pub fn translate_button(
        &self,
        view: &impl HostView,
        pointer: &impl PointerState,
        window_id: WindowId,
        event: &HostMouseEvent,
        button: HostButton,
        pressed: bool,
        out_of_stream: bool,
    ) -> MouseButtonEvent {
        let button_index = match button {
            HostButton::Left => MouseButton::Left,
            HostButton::Right => MouseButton::Right,
            HostButton::Middle => MouseButton::Middle,
            HostButton::Other(_) => MouseButton::None,
        };

        let position = self.view_position(view, event.location_in_window);
        let double_click =
            !out_of_stream && button == HostButton::Left && pressed && event.click_count >= 2;

        debug!(
            ?button,
            ?button_index,
            pressed,
            x = position.x,
            y = position.y,
            "mouse button"
        );

        MouseButtonEvent {
            window_id,
            button_index,
            pressed,
            position,
            global_position: position,
            button_mask: current_button_mask(pointer),
            modifiers: event.modifier_flags.to_modifiers(),
            double_click,
            factor: 1.0,
        }
    }

    /// ### English
    /// Primary press. With Control held (and emulation enabled) it is delivered as a secondary
    /// press and the decision is remembered for the matching release.
    ///
    /// ### 中文
    /// 主键按下。按住 Control（且启用模拟）时作为副键按下派发，
    /// 并记住该判定供配对的抬起使用。
    pub fn primary_button_down(
        &mut self,
        view: &impl HostView,
        pointer: &impl PointerState,
        window_id: WindowId,
        event: &HostMouseEvent,
    ) -> MouseButtonEvent {
        self.right_click_emulated =
            self.emulate_right_click && event.modifier_flags.contains(HostModifierFlags::CONTROL);
        let button = if self.right_click_emulated {
            HostButton::Right
        } else {
            HostButton::Left
        };
        self.translate_button(view, pointer, window_id, event, button, true, false)
    }

    /// ### English
    /// Primary release. Uses the decision remembered at press time, never this event's modifiers.
    ///
    /// ### 中文
    /// 主键抬起。使用按下时记住的判定，而不是本事件自身的修饰键。
    pub fn primary_button_up(
        &mut self,
        view: &impl HostView,
        pointer: &impl PointerState,
        window_id: WindowId,
        event: &HostMouseEvent,
    ) -> MouseButtonEvent {
        let button = if std::mem::take(&mut self.right_click_emulated) {
            HostButton::Right
        } else {
            HostButton::Left
        };
        self.translate_button(view, pointer, window_id, event, button, false, false)
    }

    /// ### English
    /// Translates a drag of any button into a motion event.
    /// Hosts that only report a delta get it as both `relative` and `velocity`.
    ///
    /// ### 中文
    /// 将任意按键的拖拽转换为移动事件。
    /// 只提供位移的宿主，其位移同时用作 `relative` 与 `velocity`。
    pub fn translate_motion(
        &self,
        view: &impl HostView,
        pointer: &impl PointerState,
        window_id: WindowId,
        event: &HostMouseEvent,
    ) -> MouseMotionEvent {
        let position = self.view_position(view, event.location_in_window);
        let relative = Vector2::new(event.delta.0 as f32, event.delta.1 as f32);

        let (pressure, tilt) = match event.tablet {
            Some(tablet) => (
                tablet.pressure,
                Vector2::new(tablet.tilt.0 as f32, tablet.tilt.1 as f32),
            ),
            None => (0.0, Vector2::ZERO),
        };

        MouseMotionEvent {
            window_id,
            position,
            global_position: position,
            relative,
            velocity: relative,
            button_mask: current_button_mask(pointer),
            modifiers: event.modifier_flags.to_modifiers(),
            pressure,
            tilt,
        }
    }

    /// ### English
    /// Translates a scroll event into wheel-button presses, `[vertical, horizontal]`.
    /// Each present press must be delivered together with its release; see `wheel_click`.
    ///
    /// ### 中文
    /// 将滚轮事件转换为滚轮按键按下，顺序为 `[纵向, 横向]`。
    /// 每个存在的按下都必须与其抬起一起派发；参见 `wheel_click`。
    pub fn translate_scroll(
        &self,
        view: &impl HostView,
        pointer: &impl PointerState,
        window_id: WindowId,
        event: &HostScrollEvent,
    ) -> [Option<MouseButtonEvent>; 2] {
        let position = self.view_position(view, event.location_in_window);
        let button_mask = current_button_mask(pointer);
        let modifiers = event.modifier_flags.to_modifiers();

        let press = |delta: f64, positive: MouseButton, negative: MouseButton| {
            if delta == 0.0 || delta.is_nan() {
                return None;
            }
            Some(MouseButtonEvent {
                window_id,
                button_index: if delta > 0.0 { positive } else { negative },
                pressed: true,
                position,
                global_position: position,
                button_mask,
                modifiers,
                double_click: false,
                factor: self.wheel_factor(delta, event.has_precise_scrolling_deltas),
            })
        };

        [
            press(
                event.scrolling_delta_y,
                MouseButton::WheelUp,
                MouseButton::WheelDown,
            ),
            press(
                event.scrolling_delta_x,
                MouseButton::WheelLeft,
                MouseButton::WheelRight,
            ),
        ]
    }

    fn wheel_factor(&self, delta: f64, precise: bool) -> f64 {
        let magnitude = if precise {
            delta.abs() / self.wheel_tick_delta
        } else {
            delta.abs()
        };
        magnitude.max(self.min_wheel_factor)
    }
}

/// ### English
/// Expands a wheel press into its press/release pair.
///
/// ### 中文
/// 将一次滚轮按下展开为按下/抬起对。
#[inline]
pub fn wheel_click(press: MouseButtonEvent) -> [MouseButtonEvent; 2] {
    let release = MouseButtonEvent {
        pressed: false,
        ..press
    };
    [press, release]
}
