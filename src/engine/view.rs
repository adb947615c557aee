//! ### English
//! Host view adapter: the integration point the native view forwards its callbacks into.
//!
//! Lifecycle hooks go to the surface synchronizer, input hooks go to the translator, and translated
//! events go to the engine pipeline (or, for motion, to the registered motion handler).
//!
//! ### 中文
//! 宿主 view 适配层：原生 view 将其回调转发到这里。
//!
//! 生命周期回调交给 surface 同步器，输入回调交给转换器；转换后的事件送入引擎管线
//! （移动事件则交给已注册的移动处理器）。

use tracing::{trace, warn};

use super::config::ViewConfig;
use super::engine_api::EmbeddedEngine;
use super::event::{InputEvent, WindowId};
use super::host::{HostButton, HostKeyEvent, HostMouseEvent, HostScrollEvent, HostView, PointerState};
use super::motion::MotionHandlerSlot;
use super::surface::{PresentableSurface, SurfaceGeometry, SurfaceSync};
use super::translate::{InputTranslator, wheel_click};

/// ### English
/// One embedded engine view hosted inside a native view.
///
/// All hooks take `&mut self` and are expected on the host's main thread, one at a time.
///
/// ### 中文
/// 托管在原生 view 中的一个内嵌引擎 view。
///
/// 所有回调都以 `&mut self` 调用，预期在宿主主线程上逐个执行。
pub struct EmbedView<E, S, H>
where
    E: EmbeddedEngine,
    S: PresentableSurface,
    H: HostView + PointerState,
{
    engine: E,
    host: H,
    surface: SurfaceSync<S>,
    translator: InputTranslator,
    motion: MotionHandlerSlot,
}

impl<E, S, H> EmbedView<E, S, H>
where
    E: EmbeddedEngine,
    S: PresentableSurface,
    H: HostView + PointerState,
{
    /// ### English
    /// Creates the adapter and applies the initial surface geometry (the engine is not notified
    /// until the first bounds/window change).
    ///
    /// #### Parameters
    /// - `engine`: Embedded engine sink.
    /// - `surface`: Presentable surface, already attached under the host view's layer.
    /// - `host`: Host view geometry and pointer state.
    /// - `motion`: Motion handler slot shared with the embedder.
    /// - `config`: Per-view tunables.
    ///
    /// ### 中文
    /// 创建适配层并应用初始 surface 几何（直到第一次 bounds/窗口变化才通知引擎）。
    ///
    /// #### 参数
    /// - `engine`：内嵌引擎接收端。
    /// - `surface`：可呈现 surface，已附加在宿主 view 的图层下。
    /// - `host`：宿主 view 几何与指针状态。
    /// - `motion`：与宿主共享的移动处理器槽。
    /// - `config`：每个 view 的可调参数。
    pub fn new(engine: E, surface: S, host: H, motion: MotionHandlerSlot, config: &ViewConfig) -> Self {
        let surface = SurfaceSync::new(surface, &host, config.fallback_scale, config.resize_always);
        Self {
            engine,
            host,
            surface,
            translator: InputTranslator::new(config),
            motion,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// ### English
    /// Mutable host access, for hosts that mirror native state into `H` before firing a hook.
    ///
    /// ### 中文
    /// 可变访问宿主状态，供在触发回调前把原生状态同步到 `H` 的宿主使用。
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn surface(&self) -> &S {
        self.surface.surface()
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.surface.geometry()
    }

    pub fn motion_handlers(&self) -> &MotionHandlerSlot {
        &self.motion
    }

    /// ### English
    /// Target window for every translated event.
    ///
    /// ### 中文
    /// 所有转换后事件的目标窗口。
    pub fn window_id(&self) -> WindowId {
        self.engine.main_window_id()
    }

    /// ### English
    /// The view takes keyboard focus; a rendering surface without focus would drop all keys.
    ///
    /// ### 中文
    /// view 接受键盘焦点；没有焦点的渲染 surface 会丢掉所有按键。
    pub fn accepts_first_responder(&self) -> bool {
        true
    }

    /// ### English
    /// The first click into an inactive window is delivered, not swallowed by activation.
    ///
    /// ### 中文
    /// 点击非激活窗口的第一次点击会被派发，而不会被激活动作吞掉。
    pub fn accepts_first_mouse(&self) -> bool {
        true
    }

    /// ### English
    /// Bounds changed (layout or live resize).
    ///
    /// ### 中文
    /// bounds 发生变化（布局或实时 resize）。
    pub fn bounds_did_change(&mut self) {
        self.resync();
    }

    /// ### English
    /// View attached to or detached from a window, or the window's backing scale changed.
    ///
    /// ### 中文
    /// view 附加到/脱离窗口，或窗口的 backing scale 发生变化。
    pub fn view_did_move_to_window(&mut self) {
        self.resync();
    }

    fn resync(&mut self) {
        self.surface.sync_geometry(&self.host);
        let window_id = self.window_id();
        self.surface
            .notify_engine_resize(&self.host, &self.engine, window_id);
    }

    pub fn key_down(&mut self, event: &HostKeyEvent) {
        self.process_key(event, true);
    }

    pub fn key_up(&mut self, event: &HostKeyEvent) {
        self.process_key(event, false);
    }

    fn process_key(&mut self, event: &HostKeyEvent, pressed: bool) {
        let window_id = self.window_id();
        if let Some(key) = self.translator.translate_key(window_id, event, pressed) {
            self.submit(key.into());
        }
    }

    pub fn mouse_down(&mut self, event: &HostMouseEvent) {
        let window_id = self.window_id();
        let ev = self
            .translator
            .primary_button_down(&self.host, &self.host, window_id, event);
        self.submit(ev.into());
    }

    pub fn mouse_up(&mut self, event: &HostMouseEvent) {
        let window_id = self.window_id();
        let ev = self
            .translator
            .primary_button_up(&self.host, &self.host, window_id, event);
        self.submit(ev.into());
    }

    pub fn right_mouse_down(&mut self, event: &HostMouseEvent) {
        self.process_button(event, HostButton::Right, true);
    }

    pub fn right_mouse_up(&mut self, event: &HostMouseEvent) {
        self.process_button(event, HostButton::Right, false);
    }

    /// ### English
    /// Middle and any further buttons. `button_number` 2 is the middle button; others are
    /// delivered with an unclassified index.
    ///
    /// ### 中文
    /// 中键及其它更多按键。`button_number` 为 2 表示中键；其它按键以未分类索引派发。
    pub fn other_mouse_down(&mut self, event: &HostMouseEvent, button_number: u8) {
        self.process_button(event, other_button(button_number), true);
    }

    pub fn other_mouse_up(&mut self, event: &HostMouseEvent, button_number: u8) {
        self.process_button(event, other_button(button_number), false);
    }

    fn process_button(&mut self, event: &HostMouseEvent, button: HostButton, pressed: bool) {
        let window_id = self.window_id();
        let ev = self.translator.translate_button(
            &self.host, &self.host, window_id, event, button, pressed, false,
        );
        self.submit(ev.into());
    }

    pub fn mouse_dragged(&mut self, event: &HostMouseEvent) {
        trace!("mouse dragged");
        self.process_motion(event);
    }

    pub fn right_mouse_dragged(&mut self, event: &HostMouseEvent) {
        self.process_motion(event);
    }

    pub fn other_mouse_dragged(&mut self, event: &HostMouseEvent) {
        self.process_motion(event);
    }

    fn process_motion(&mut self, event: &HostMouseEvent) {
        let window_id = self.window_id();
        let motion = self
            .translator
            .translate_motion(&self.host, &self.host, window_id, event);
        self.motion.dispatch(motion);
    }

    pub fn scroll_wheel(&mut self, event: &HostScrollEvent) {
        let window_id = self.window_id();
        let presses = self
            .translator
            .translate_scroll(&self.host, &self.host, window_id, event);
        for press in presses.into_iter().flatten() {
            for ev in wheel_click(press) {
                self.submit(ev.into());
            }
        }
    }

    fn submit(&self, event: InputEvent) {
        let window_id = event.window_id();
        if let Err(err) = self.engine.parse_input_event(event) {
            warn!(window_id = window_id.0, %err, "engine rejected input event, dropping");
        }
    }
}

fn other_button(button_number: u8) -> HostButton {
    match button_number {
        2 => HostButton::Middle,
        n => HostButton::Other(n),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use dpi::{LogicalPosition, LogicalSize, PhysicalSize};

    use super::*;
    use crate::engine::button_mask::ButtonMask;
    use crate::engine::event::{MouseMotionEvent, Vector2};
    use crate::engine::host::{HostModifierFlags, Rect};
    use crate::engine::key::{Key, MouseButton};
    use crate::engine::surface::tests::{FakeSurface, RecordingEngine};
    use crate::engine::translate::tests::FakeHost;

    type TestView<'a> = EmbedView<&'a RecordingEngine, FakeSurface, FakeHost>;

    fn view(engine: &RecordingEngine, host: FakeHost) -> TestView<'_> {
        EmbedView::new(
            engine,
            FakeSurface::default(),
            host,
            MotionHandlerSlot::new(),
            &ViewConfig::default(),
        )
    }

    fn mouse_at(x: f64, y: f64) -> HostMouseEvent {
        HostMouseEvent {
            location_in_window: LogicalPosition::new(x, y),
            ..HostMouseEvent::default()
        }
    }

    fn buttons(engine: &RecordingEngine) -> Vec<(MouseButton, bool)> {
        engine
            .events
            .borrow()
            .iter()
            .filter_map(|ev| match ev {
                InputEvent::MouseButton(mb) => Some((mb.button_index, mb.pressed)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn focus_and_first_mouse_are_accepted() {
        let engine = RecordingEngine::default();
        let view = view(&engine, FakeHost::sized(10.0, 10.0));
        assert!(view.accepts_first_responder());
        assert!(view.accepts_first_mouse());
    }

    #[test]
    fn construction_applies_geometry_without_notifying() {
        let engine = RecordingEngine::default();
        let mut host = FakeHost::sized(400.0, 300.0);
        host.screen_scale = Some(2.0);
        let view = view(&engine, host);

        assert_eq!(view.surface().drawable, Some(PhysicalSize::new(800, 600)));
        assert!(engine.resizes.borrow().is_empty());
    }

    #[test]
    fn attaching_to_a_scaled_window_resizes_once() {
        let engine = RecordingEngine::default();
        let mut view = view(&engine, FakeHost::sized(400.0, 300.0));

        view.host_mut().window_scale = Some(2.0);
        view.view_did_move_to_window();
        view.bounds_did_change();

        assert_eq!(view.geometry().drawable_size, PhysicalSize::new(800, 600));
        assert_eq!(
            *engine.resizes.borrow(),
            vec![(PhysicalSize::new(800, 600), WindowId(0))]
        );

        view.host_mut().bounds = Rect::from_size(LogicalSize::new(500.0, 300.0));
        view.bounds_did_change();
        assert_eq!(engine.resizes.borrow().len(), 2);
        assert_eq!(engine.resizes.borrow()[1].0, PhysicalSize::new(1000, 600));
    }

    #[test]
    fn keys_reach_the_pipeline_and_unmapped_keys_do_not() {
        let engine = RecordingEngine::default();
        let mut view = view(&engine, FakeHost::sized(10.0, 10.0));

        view.key_down(&HostKeyEvent {
            key_code: 0x0c,
            ..HostKeyEvent::default()
        });
        view.key_up(&HostKeyEvent {
            key_code: 0x3f,
            ..HostKeyEvent::default()
        });
        view.key_up(&HostKeyEvent {
            key_code: 0x0c,
            ..HostKeyEvent::default()
        });

        let events = engine.events.borrow();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|ev| ev.window_id() == WindowId(0)));
        match (events[0], events[1]) {
            (InputEvent::Key(down), InputEvent::Key(up)) => {
                assert_eq!(down.physical_keycode, Key::Q);
                assert!(down.pressed);
                assert_eq!(up.physical_keycode, Key::Q);
                assert!(!up.pressed);
            }
            other => panic!("unexpected events {other:?}"),
        }
    }

    #[test]
    fn control_click_pair_is_delivered_as_right_button() {
        let engine = RecordingEngine::default();
        let mut view = view(&engine, FakeHost::sized(100.0, 100.0));

        view.mouse_down(&HostMouseEvent {
            modifier_flags: HostModifierFlags::CONTROL,
            ..mouse_at(10.0, 10.0)
        });
        view.mouse_up(&mouse_at(10.0, 10.0));
        view.mouse_down(&mouse_at(10.0, 10.0));
        view.mouse_up(&HostMouseEvent {
            modifier_flags: HostModifierFlags::CONTROL,
            ..mouse_at(10.0, 10.0)
        });

        assert_eq!(
            buttons(&engine),
            vec![
                (MouseButton::Right, true),
                (MouseButton::Right, false),
                (MouseButton::Left, true),
                (MouseButton::Left, false),
            ]
        );
    }

    #[test]
    fn right_and_other_buttons_map_directly() {
        let engine = RecordingEngine::default();
        let mut view = view(&engine, FakeHost::sized(100.0, 100.0));

        view.right_mouse_down(&mouse_at(1.0, 1.0));
        view.right_mouse_up(&mouse_at(1.0, 1.0));
        view.other_mouse_down(&mouse_at(1.0, 1.0), 2);
        view.other_mouse_up(&mouse_at(1.0, 1.0), 2);
        view.other_mouse_down(&mouse_at(1.0, 1.0), 4);

        assert_eq!(
            buttons(&engine),
            vec![
                (MouseButton::Right, true),
                (MouseButton::Right, false),
                (MouseButton::Middle, true),
                (MouseButton::Middle, false),
                (MouseButton::None, true),
            ]
        );
    }

    #[test]
    fn drags_bypass_the_pipeline() {
        let engine = RecordingEngine::default();
        let mut host = FakeHost::sized(100.0, 100.0);
        host.pressed_buttons = 0b001;
        let mut view = view(&engine, host);

        // No handler yet: discarded silently.
        view.mouse_dragged(&mouse_at(10.0, 5.0));

        let seen: Arc<Mutex<Vec<MouseMotionEvent>>> = Arc::default();
        let sink = seen.clone();
        view.motion_handlers().register(move |ev| {
            sink.lock().unwrap().push(ev);
        });

        view.mouse_dragged(&mouse_at(10.0, 5.0));
        view.right_mouse_dragged(&mouse_at(11.0, 5.0));
        view.other_mouse_dragged(&mouse_at(12.0, 5.0));

        assert!(engine.events.borrow().is_empty());
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].position, Vector2::new(10.0, 95.0));
        assert_eq!(seen[0].button_mask, ButtonMask::LEFT);
        assert_eq!(seen[2].position, Vector2::new(12.0, 95.0));
    }

    #[test]
    fn scroll_emits_press_release_pairs_per_axis() {
        let engine = RecordingEngine::default();
        let mut view = view(&engine, FakeHost::sized(100.0, 100.0));

        view.scroll_wheel(&HostScrollEvent {
            scrolling_delta_x: -120.0,
            scrolling_delta_y: -240.0,
            has_precise_scrolling_deltas: true,
            ..HostScrollEvent::default()
        });

        assert_eq!(
            buttons(&engine),
            vec![
                (MouseButton::WheelDown, true),
                (MouseButton::WheelDown, false),
                (MouseButton::WheelRight, true),
                (MouseButton::WheelRight, false),
            ]
        );
        let events = engine.events.borrow();
        let InputEvent::MouseButton(first) = events[0] else {
            panic!("expected a button event");
        };
        assert_eq!(first.factor, 2.0);
    }
}
