//! ### English
//! C ABI bindings for host input hooks.
//!
//! ### 中文
//! 宿主输入回调相关的 C ABI 绑定。

use dpi::LogicalPosition;

use super::{EmbedViewHandle, view_mut};
use crate::engine::{HostKeyEvent, HostModifierFlags, HostMouseEvent, HostScrollEvent, TabletPoint};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
/// ### English
/// Raw key notification.
///
/// ### 中文
/// 原始键盘通知。
pub struct EmbedViewKeyEvent {
    /// ### English
    /// Host virtual key code.
    ///
    /// ### 中文
    /// 宿主虚拟键码。
    pub key_code: u16,
    /// ### English
    /// OS auto-repeat (`0` = false, otherwise true).
    ///
    /// ### 中文
    /// 系统自动重复（`0` = false，其它 = true）。
    pub is_repeat: u8,
    /// ### English
    /// Host modifier-flag word (device-independent bits 16..=23).
    ///
    /// ### 中文
    /// 宿主修饰键标志字（设备无关位 16..=23）。
    pub modifier_flags: u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
/// ### English
/// Raw mouse button / drag notification.
///
/// ### 中文
/// 原始鼠标按键/拖拽通知。
pub struct EmbedViewMouseEvent {
    /// ### English
    /// Location in window coordinates (host origin convention).
    ///
    /// ### 中文
    /// 窗口坐标中的位置（宿主原点约定）。
    pub x: f64,
    pub y: f64,
    pub modifier_flags: u64,
    pub click_count: u32,
    /// ### English
    /// Buttons held right now (bit 0 left, bit 1 right, bit 2 middle).
    ///
    /// ### 中文
    /// 当前按住的按键（bit 0 左，bit 1 右，bit 2 中）。
    pub pressed_buttons: u32,
    /// ### English
    /// Per-event displacement, Y down.
    ///
    /// ### 中文
    /// 单次事件位移，Y 向下。
    pub delta_x: f64,
    pub delta_y: f64,
    /// ### English
    /// `0` for ordinary mice; otherwise `pressure` and `tilt_*` are valid.
    ///
    /// ### 中文
    /// 普通鼠标为 `0`；否则 `pressure` 与 `tilt_*` 有效。
    pub is_tablet: u8,
    pub pressure: f32,
    pub tilt_x: f64,
    pub tilt_y: f64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
/// ### English
/// Raw scroll-wheel notification.
///
/// ### 中文
/// 原始滚轮通知。
pub struct EmbedViewScrollEvent {
    pub x: f64,
    pub y: f64,
    pub modifier_flags: u64,
    pub pressed_buttons: u32,
    pub scrolling_delta_x: f64,
    pub scrolling_delta_y: f64,
    /// ### English
    /// `0` = line-based wheel, otherwise pixel-precise trackpad deltas.
    ///
    /// ### 中文
    /// `0` = 按行的滚轮，其它 = 像素精度的触控板 delta。
    pub has_precise_scrolling_deltas: u8,
}

impl From<&EmbedViewKeyEvent> for HostKeyEvent {
    fn from(ev: &EmbedViewKeyEvent) -> Self {
        Self {
            key_code: ev.key_code,
            modifier_flags: HostModifierFlags::from_bits_retain(ev.modifier_flags),
            is_repeat: ev.is_repeat != 0,
        }
    }
}

impl From<&EmbedViewMouseEvent> for HostMouseEvent {
    fn from(ev: &EmbedViewMouseEvent) -> Self {
        Self {
            location_in_window: LogicalPosition::new(ev.x, ev.y),
            modifier_flags: HostModifierFlags::from_bits_retain(ev.modifier_flags),
            click_count: ev.click_count,
            delta: (ev.delta_x, ev.delta_y),
            tablet: (ev.is_tablet != 0).then_some(TabletPoint {
                pressure: ev.pressure,
                tilt: (ev.tilt_x, ev.tilt_y),
            }),
        }
    }
}

impl From<&EmbedViewScrollEvent> for HostScrollEvent {
    fn from(ev: &EmbedViewScrollEvent) -> Self {
        Self {
            location_in_window: LogicalPosition::new(ev.x, ev.y),
            modifier_flags: HostModifierFlags::from_bits_retain(ev.modifier_flags),
            scrolling_delta_x: ev.scrolling_delta_x,
            scrolling_delta_y: ev.scrolling_delta_y,
            has_precise_scrolling_deltas: ev.has_precise_scrolling_deltas != 0,
        }
    }
}

/// ### English
/// Host button numbers above 255 are clamped; they are delivered unclassified either way.
///
/// ### 中文
/// 大于 255 的宿主按键编号会被截到 255；无论如何都以未分类方式派发。
fn button_number(button: u32) -> u8 {
    u8::try_from(button).unwrap_or(u8::MAX)
}

#[unsafe(no_mangle)]
/// ### English
/// Key down (`pressed != 0`) or key up. Unmapped keys are dropped.
///
/// ### 中文
/// 按键按下（`pressed != 0`）或松开。未映射的按键会被丢弃。
pub unsafe extern "C" fn embed_view_key(
    view: *mut EmbedViewHandle,
    event: *const EmbedViewKeyEvent,
    pressed: u8,
) {
    let (Some(view), Some(event)) = (unsafe { view_mut(view) }, unsafe { event.as_ref() }) else {
        return;
    };

    let event = HostKeyEvent::from(event);
    if pressed != 0 {
        view.key_down(&event);
    } else {
        view.key_up(&event);
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Mouse button down/up.
///
/// #### Parameters
/// - `button`: Host button number (`0` = primary, `1` = secondary, `2` = middle, others
///   unclassified). Primary clicks with Control held are delivered as right clicks unless the
///   view was created with `EMBED_VIEW_FLAG_NO_CONTROL_CLICK`.
/// - `pressed`: `0` = up, otherwise down.
///
/// ### 中文
/// 鼠标按键按下/松开。
///
/// #### 参数
/// - `button`：宿主按键编号（`0` = 主键，`1` = 副键，`2` = 中键，其它为未分类）。
///   按住 Control 的主键点击会作为右键派发，除非 view 创建时指定了
///   `EMBED_VIEW_FLAG_NO_CONTROL_CLICK`。
/// - `pressed`：`0` = 松开，其它 = 按下。
pub unsafe extern "C" fn embed_view_mouse_button(
    view: *mut EmbedViewHandle,
    event: *const EmbedViewMouseEvent,
    button: u32,
    pressed: u8,
) {
    let (Some(view), Some(event)) = (unsafe { view_mut(view) }, unsafe { event.as_ref() }) else {
        return;
    };

    view.host_mut().pressed_buttons = event.pressed_buttons;
    let event = HostMouseEvent::from(event);
    match (button, pressed != 0) {
        (0, true) => view.mouse_down(&event),
        (0, false) => view.mouse_up(&event),
        (1, true) => view.right_mouse_down(&event),
        (1, false) => view.right_mouse_up(&event),
        (n, true) => view.other_mouse_down(&event, button_number(n)),
        (n, false) => view.other_mouse_up(&event, button_number(n)),
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Pointer moved with `button` held. Delivered only to the motion callback, never to the engine's
/// input pipeline.
///
/// ### 中文
/// 按住 `button` 时指针移动。只派发给移动回调，绝不进入引擎输入管线。
pub unsafe extern "C" fn embed_view_mouse_dragged(
    view: *mut EmbedViewHandle,
    event: *const EmbedViewMouseEvent,
    button: u32,
) {
    let (Some(view), Some(event)) = (unsafe { view_mut(view) }, unsafe { event.as_ref() }) else {
        return;
    };

    view.host_mut().pressed_buttons = event.pressed_buttons;
    let event = HostMouseEvent::from(event);
    match button {
        0 => view.mouse_dragged(&event),
        1 => view.right_mouse_dragged(&event),
        _ => view.other_mouse_dragged(&event),
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Scroll wheel / trackpad scroll. Each non-zero axis becomes one wheel press/release pair.
///
/// ### 中文
/// 滚轮/触控板滚动。每个非零轴生成一对滚轮按下/松开事件。
pub unsafe extern "C" fn embed_view_scroll_wheel(
    view: *mut EmbedViewHandle,
    event: *const EmbedViewScrollEvent,
) {
    let (Some(view), Some(event)) = (unsafe { view_mut(view) }, unsafe { event.as_ref() }) else {
        return;
    };

    view.host_mut().pressed_buttons = event.pressed_buttons;
    view.scroll_wheel(&HostScrollEvent::from(event));
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::ffi::c_void;

    use super::*;
    use crate::engine::{
        EMBED_VIEW_INPUT_KIND_KEY, EMBED_VIEW_INPUT_KIND_MOUSE_BUTTON,
        EMBED_VIEW_INPUT_KIND_MOUSE_MOTION, EmbedViewInputEvent,
    };
    use crate::ffi::engine::EmbedViewEngineApi;
    use crate::ffi::motion::embed_view_set_motion_callback;
    use crate::ffi::surface::EmbedViewSurfaceApi;
    use crate::ffi::view::{
        embed_view_create, embed_view_destroy, embed_view_set_backing_scale,
        embed_view_set_bounds,
    };

    #[derive(Default)]
    struct Embedder {
        events: RefCell<Vec<EmbedViewInputEvent>>,
        motion: RefCell<Vec<EmbedViewInputEvent>>,
        resizes: RefCell<Vec<(u32, u32, i32)>>,
        drawable: Cell<(u32, u32)>,
        attached: Cell<bool>,
        removals: Cell<u32>,
    }

    fn embedder<'a>(user_data: *mut c_void) -> &'a Embedder {
        unsafe { &*(user_data as *const Embedder) }
    }

    unsafe extern "C" fn parse_input_event(
        user_data: *mut c_void,
        event: *const EmbedViewInputEvent,
    ) -> bool {
        embedder(user_data).events.borrow_mut().push(unsafe { *event });
        true
    }

    unsafe extern "C" fn resize_window(user_data: *mut c_void, w: u32, h: u32, id: i32) -> bool {
        embedder(user_data).resizes.borrow_mut().push((w, h, id));
        true
    }

    unsafe extern "C" fn main_window_id(_: *mut c_void) -> i32 {
        4
    }

    unsafe extern "C" fn set_frame(_: *mut c_void, _: f64, _: f64, _: f64, _: f64) {}

    unsafe extern "C" fn set_contents_scale(_: *mut c_void, _: f64) {}

    unsafe extern "C" fn set_drawable_size(user_data: *mut c_void, w: u32, h: u32) {
        embedder(user_data).drawable.set((w, h));
    }

    unsafe extern "C" fn has_parent(user_data: *mut c_void) -> bool {
        embedder(user_data).attached.get()
    }

    unsafe extern "C" fn remove_from_parent(user_data: *mut c_void) {
        let embedder = embedder(user_data);
        embedder.attached.set(false);
        embedder.removals.set(embedder.removals.get() + 1);
    }

    unsafe extern "C" fn on_motion(user_data: *mut c_void, event: *const EmbedViewInputEvent) {
        embedder(user_data).motion.borrow_mut().push(unsafe { *event });
    }

    fn create(embedder: &Embedder, flags: u32) -> *mut EmbedViewHandle {
        create_sized(embedder, 100.0, 100.0, 0.0, flags)
    }

    fn create_sized(
        embedder: &Embedder,
        width: f64,
        height: f64,
        window_scale: f64,
        flags: u32,
    ) -> *mut EmbedViewHandle {
        let user_data = embedder as *const Embedder as *mut c_void;
        let engine = EmbedViewEngineApi {
            user_data,
            parse_input_event: Some(parse_input_event),
            resize_window: Some(resize_window),
            main_window_id: Some(main_window_id),
        };
        let surface = EmbedViewSurfaceApi {
            user_data,
            set_frame: Some(set_frame),
            set_contents_scale: Some(set_contents_scale),
            set_drawable_size: Some(set_drawable_size),
            has_parent: Some(has_parent),
            remove_from_parent: Some(remove_from_parent),
        };
        unsafe {
            embed_view_create(
                &engine,
                &surface,
                0.0,
                0.0,
                width,
                height,
                window_scale,
                0.0,
                flags,
            )
        }
    }

    #[test]
    fn unknown_flags_reject_creation() {
        let embedder = Embedder::default();
        assert!(create(&embedder, 1 << 31).is_null());
    }

    #[test]
    fn creating_inside_a_window_reports_the_size() {
        let embedder = Embedder::default();
        let view = create_sized(&embedder, 400.0, 300.0, 2.0, 0);
        assert!(!view.is_null());
        assert_eq!(embedder.drawable.get(), (800, 600));
        assert_eq!(*embedder.resizes.borrow(), vec![(800, 600, 4)]);

        unsafe { embed_view_set_backing_scale(view, 2.0, 0.0) };
        assert_eq!(embedder.resizes.borrow().len(), 1);

        unsafe { embed_view_destroy(view) };
    }

    struct SelfClearing {
        view: *mut EmbedViewHandle,
        calls: Cell<u32>,
    }

    unsafe extern "C" fn clear_on_first_motion(
        user_data: *mut c_void,
        _: *const EmbedViewInputEvent,
    ) {
        let state = unsafe { &*(user_data as *const SelfClearing) };
        state.calls.set(state.calls.get() + 1);
        unsafe { embed_view_set_motion_callback(state.view, None, std::ptr::null_mut()) };
    }

    #[test]
    fn motion_callback_can_unregister_itself() {
        let embedder = Embedder::default();
        let view = create(&embedder, 0);
        let state = SelfClearing {
            view,
            calls: Cell::new(0),
        };
        let drag = EmbedViewMouseEvent::default();

        unsafe {
            embed_view_set_motion_callback(
                view,
                Some(clear_on_first_motion),
                &state as *const SelfClearing as *mut c_void,
            );
            embed_view_mouse_dragged(view, &drag, 0);
            embed_view_mouse_dragged(view, &drag, 0);
        }

        assert_eq!(state.calls.get(), 1);
        assert!(embedder.events.borrow().is_empty());

        unsafe { embed_view_destroy(view) };
    }

    #[test]
    fn geometry_changes_reach_surface_and_engine() {
        let embedder = Embedder::default();
        embedder.attached.set(true);
        let view = create(&embedder, 0);
        assert!(!view.is_null());
        assert_eq!(embedder.drawable.get(), (100, 100));

        unsafe {
            embed_view_set_backing_scale(view, 2.0, 2.0);
            embed_view_set_bounds(view, 0.0, 0.0, 400.0, 300.0);
            embed_view_set_bounds(view, 0.0, 0.0, 400.0, 300.0);
        }
        assert_eq!(embedder.drawable.get(), (800, 600));
        assert_eq!(*embedder.resizes.borrow(), vec![(200, 200, 4), (800, 600, 4)]);

        unsafe { embed_view_destroy(view) };
        assert_eq!(embedder.removals.get(), 1);
    }

    #[test]
    fn input_hooks_produce_pod_events() {
        let embedder = Embedder::default();
        let view = create(&embedder, 0);

        let key = EmbedViewKeyEvent {
            key_code: 0x38,
            is_repeat: 0,
            modifier_flags: 1 << 17,
        };
        let click = EmbedViewMouseEvent {
            x: 10.0,
            y: 5.0,
            modifier_flags: 1 << 18,
            click_count: 1,
            pressed_buttons: 1,
            ..EmbedViewMouseEvent::default()
        };
        let scroll = EmbedViewScrollEvent {
            scrolling_delta_y: 0.5,
            ..EmbedViewScrollEvent::default()
        };
        unsafe {
            embed_view_key(view, &key, 1);
            embed_view_mouse_button(view, &click, 0, 1);
            embed_view_mouse_button(view, &EmbedViewMouseEvent::default(), 0, 0);
            embed_view_scroll_wheel(view, &scroll);
        }

        let events = embedder.events.borrow();
        let kinds: Vec<_> = events.iter().map(|ev| ev.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EMBED_VIEW_INPUT_KIND_KEY,
                EMBED_VIEW_INPUT_KIND_MOUSE_BUTTON,
                EMBED_VIEW_INPUT_KIND_MOUSE_BUTTON,
                EMBED_VIEW_INPUT_KIND_MOUSE_BUTTON,
                EMBED_VIEW_INPUT_KIND_MOUSE_BUTTON,
            ]
        );
        assert_eq!((events[0].key_location, events[0].modifiers), (1, 1));
        // Control-click: right button down and up.
        assert_eq!((events[1].button_index, events[1].pressed), (2, 1));
        assert_eq!((events[1].x, events[1].y), (10.0, 95.0));
        assert_eq!(events[1].button_mask, 1);
        assert_eq!((events[2].button_index, events[2].pressed), (2, 0));
        // Coarse wheel up, factor floored to 1.
        assert_eq!((events[3].button_index, events[3].factor), (4, 1.0));
        assert_eq!(events[4].pressed, 0);

        unsafe { embed_view_destroy(view) };
    }

    #[test]
    fn drags_only_reach_the_motion_callback() {
        let embedder = Embedder::default();
        let view = create(&embedder, 0);
        let drag = EmbedViewMouseEvent {
            x: 3.0,
            y: 40.0,
            delta_x: 1.5,
            pressed_buttons: 0b100,
            ..EmbedViewMouseEvent::default()
        };

        unsafe {
            embed_view_mouse_dragged(view, &drag, 2);
            embed_view_set_motion_callback(
                view,
                Some(on_motion),
                &embedder as *const Embedder as *mut c_void,
            );
            embed_view_mouse_dragged(view, &drag, 2);
            embed_view_set_motion_callback(view, None, std::ptr::null_mut());
            embed_view_mouse_dragged(view, &drag, 2);
        }

        assert!(embedder.events.borrow().is_empty());
        let motion = embedder.motion.borrow();
        assert_eq!(motion.len(), 1);
        assert_eq!(motion[0].kind, EMBED_VIEW_INPUT_KIND_MOUSE_MOTION);
        assert_eq!((motion[0].x, motion[0].y), (3.0, 60.0));
        assert_eq!(motion[0].relative_x, 1.5);
        assert_eq!(motion[0].button_mask, 4);

        unsafe { embed_view_destroy(view) };
    }
}
