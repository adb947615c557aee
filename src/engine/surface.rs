//! ### English
//! GPU-presentable surface geometry: keeps the surface frame, contents scale and drawable size
//! aligned with the hosting view, and tells the engine about device-pixel size changes.
//!
//! ### 中文
//! GPU 可呈现 surface 的几何同步：让 surface 的 frame、内容缩放与 drawable 尺寸与宿主 view
//! 保持一致，并把设备像素尺寸变化通知给引擎。

use dpi::{LogicalSize, PhysicalSize, validate_scale_factor};
use tracing::{info, warn};

use super::engine_api::EmbeddedEngine;
use super::event::WindowId;
use super::host::{HostView, Rect};

/// ### English
/// The presentable layer owned by the view (e.g. a Metal layer attached as a sublayer).
///
/// ### 中文
/// view 持有的可呈现图层（例如作为子图层附加的 Metal 图层）。
pub trait PresentableSurface {
    fn set_frame(&mut self, frame: Rect);
    fn set_contents_scale(&mut self, scale: f64);
    fn contents_scale(&self) -> f64;
    fn set_drawable_size(&mut self, size: PhysicalSize<u32>);
    /// ### English
    /// Whether the surface is still attached to its parent layer.
    ///
    /// ### 中文
    /// surface 是否仍附加在父图层上。
    fn has_parent(&self) -> bool;
    fn remove_from_parent(&mut self);
}

/// ### English
/// Snapshot of the surface geometry derived from one (bounds, scale) pair.
///
/// ### 中文
/// 由一组 (bounds, scale) 推导出的 surface 几何快照。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceGeometry {
    pub frame: Rect,
    pub backing_scale: f64,
    pub drawable_size: PhysicalSize<u32>,
}

impl SurfaceGeometry {
    pub fn new(frame: Rect, backing_scale: f64) -> Self {
        Self {
            frame,
            backing_scale,
            drawable_size: device_pixel_size(frame.size, backing_scale),
        }
    }
}

/// ### English
/// `size × scale`, truncated, clamped to at least 1×1 (also for zero, negative or NaN inputs).
///
/// ### 中文
/// `size × scale`，截断取整，并保证至少为 1×1（输入为 0、负数或 NaN 时也如此）。
pub fn device_pixel_size(size: LogicalSize<f64>, scale: f64) -> PhysicalSize<u32> {
    // `as u32` saturates: NaN and negatives become 0, then the floor lifts them to 1.
    let width = ((size.width * scale) as u32).max(1);
    let height = ((size.height * scale) as u32).max(1);
    PhysicalSize::new(width, height)
}

/// ### English
/// Backing scale for `view`: window scale, else primary screen scale, else `fallback`.
/// Non-positive or non-finite scales are skipped.
///
/// ### 中文
/// `view` 的 backing scale：优先窗口缩放，其次主屏幕缩放，最后为 `fallback`。
/// 非正数或非有限值会被跳过。
pub fn resolve_backing_scale(view: &impl HostView, fallback: f64) -> f64 {
    view.window_backing_scale()
        .filter(|scale| validate_scale_factor(*scale))
        .or_else(|| {
            view.main_screen_backing_scale()
                .filter(|scale| validate_scale_factor(*scale))
        })
        .unwrap_or(fallback)
}

/// ### English
/// Owns the presentable surface and the last size reported to the engine.
///
/// ### 中文
/// 持有可呈现 surface 以及最近一次上报给引擎的尺寸。
#[derive(Debug)]
pub struct SurfaceSync<S: PresentableSurface> {
    surface: S,
    geometry: SurfaceGeometry,
    last_resize: Option<PhysicalSize<u32>>,
    fallback_scale: f64,
    resize_always: bool,
}

impl<S: PresentableSurface> SurfaceSync<S> {
    /// ### English
    /// Takes ownership of `surface` and applies the view's current geometry immediately.
    ///
    /// ### 中文
    /// 接管 `surface` 并立即应用 view 的当前几何。
    pub fn new(surface: S, view: &impl HostView, fallback_scale: f64, resize_always: bool) -> Self {
        let mut sync = Self {
            surface,
            geometry: SurfaceGeometry::new(view.bounds(), fallback_scale),
            last_resize: None,
            fallback_scale,
            resize_always,
        };
        sync.sync_geometry(view);
        sync
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    /// ### English
    /// Last device-pixel size sent to the engine, if any.
    ///
    /// ### 中文
    /// 最近一次发送给引擎的设备像素尺寸（若有）。
    pub fn last_resize(&self) -> Option<PhysicalSize<u32>> {
        self.last_resize
    }

    /// ### English
    /// Recomputes geometry from the view's bounds and backing scale and applies it to the surface.
    /// Must run before `notify_engine_resize`, which reads the post-scale contents scale.
    ///
    /// ### 中文
    /// 根据 view 的 bounds 与 backing scale 重新计算几何并应用到 surface。
    /// 必须在 `notify_engine_resize` 之前执行，后者读取缩放后的内容缩放。
    pub fn sync_geometry(&mut self, view: &impl HostView) -> SurfaceGeometry {
        let scale = resolve_backing_scale(view, self.fallback_scale);
        let geometry = SurfaceGeometry::new(view.bounds(), scale);

        self.surface.set_frame(geometry.frame);
        self.surface.set_contents_scale(geometry.backing_scale);
        self.surface.set_drawable_size(geometry.drawable_size);
        self.geometry = geometry;
        geometry
    }

    /// ### English
    /// Sends the current device-pixel size to the engine unless it equals the last one sent.
    /// Returns `true` if the engine was notified.
    ///
    /// ### 中文
    /// 若当前设备像素尺寸与上次发送的不同，则发送给引擎。
    /// 通知了引擎时返回 `true`。
    pub fn notify_engine_resize<E: EmbeddedEngine + ?Sized>(
        &mut self,
        view: &impl HostView,
        engine: &E,
        window_id: WindowId,
    ) -> bool {
        let size = device_pixel_size(view.bounds().size, self.surface.contents_scale());
        let changed = self.last_resize != Some(size);
        if !changed && !self.resize_always {
            return false;
        }

        if changed {
            info!(
                window_id = window_id.0,
                from = ?self.last_resize,
                width = size.width,
                height = size.height,
                "resize window"
            );
        }

        match engine.resize_window(size, window_id) {
            Ok(()) => self.last_resize = Some(size),
            Err(err) => {
                // Not recorded: the same size is offered again on the next notification.
                warn!(window_id = window_id.0, %err, "engine rejected resize");
            }
        }
        true
    }
}

impl<S: PresentableSurface> Drop for SurfaceSync<S> {
    fn drop(&mut self) {
        if self.surface.has_parent() {
            self.surface.remove_from_parent();
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::engine::error::{BridgeError, Result};
    use crate::engine::event::InputEvent;
    use crate::engine::translate::tests::FakeHost;

    #[derive(Debug, Default)]
    pub(crate) struct FakeSurface {
        pub frame: Option<Rect>,
        pub scale: f64,
        pub drawable: Option<PhysicalSize<u32>>,
        pub attached: bool,
        pub removals: Rc<Cell<usize>>,
    }

    impl PresentableSurface for FakeSurface {
        fn set_frame(&mut self, frame: Rect) {
            self.frame = Some(frame);
        }

        fn set_contents_scale(&mut self, scale: f64) {
            self.scale = scale;
        }

        fn contents_scale(&self) -> f64 {
            self.scale
        }

        fn set_drawable_size(&mut self, size: PhysicalSize<u32>) {
            self.drawable = Some(size);
        }

        fn has_parent(&self) -> bool {
            self.attached
        }

        fn remove_from_parent(&mut self) {
            self.attached = false;
            self.removals.set(self.removals.get() + 1);
        }
    }

    #[derive(Debug, Default)]
    pub(crate) struct RecordingEngine {
        pub events: RefCell<Vec<InputEvent>>,
        pub resizes: RefCell<Vec<(PhysicalSize<u32>, WindowId)>>,
    }

    impl EmbeddedEngine for RecordingEngine {
        fn parse_input_event(&self, event: InputEvent) -> Result<()> {
            self.events.borrow_mut().push(event);
            Ok(())
        }

        fn resize_window(&self, size: PhysicalSize<u32>, window_id: WindowId) -> Result<()> {
            self.resizes.borrow_mut().push((size, window_id));
            Ok(())
        }

        fn main_window_id(&self) -> WindowId {
            WindowId(0)
        }
    }

    #[derive(Default)]
    struct RejectOnceEngine {
        calls: Cell<usize>,
        accepted: RefCell<Vec<PhysicalSize<u32>>>,
    }

    impl EmbeddedEngine for RejectOnceEngine {
        fn parse_input_event(&self, _: InputEvent) -> Result<()> {
            Ok(())
        }

        fn resize_window(&self, size: PhysicalSize<u32>, _: WindowId) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            if self.calls.get() == 1 {
                return Err(BridgeError::EngineDisconnected);
            }
            self.accepted.borrow_mut().push(size);
            Ok(())
        }

        fn main_window_id(&self) -> WindowId {
            WindowId(0)
        }
    }

    #[test]
    fn device_pixels_never_drop_below_one() {
        assert_eq!(
            device_pixel_size(LogicalSize::new(0.0, 0.0), 2.0),
            PhysicalSize::new(1, 1)
        );
        assert_eq!(
            device_pixel_size(LogicalSize::new(400.0, 300.0), 0.0),
            PhysicalSize::new(1, 1)
        );
        assert_eq!(
            device_pixel_size(LogicalSize::new(0.4, 10.0), 1.0),
            PhysicalSize::new(1, 10)
        );
        assert_eq!(
            device_pixel_size(LogicalSize::new(f64::NAN, -5.0), 2.0),
            PhysicalSize::new(1, 1)
        );
    }

    #[test]
    fn device_pixels_truncate_fractional_sizes() {
        assert_eq!(
            device_pixel_size(LogicalSize::new(100.5, 50.75), 1.5),
            PhysicalSize::new(150, 76)
        );
    }

    #[test]
    fn scale_falls_back_from_window_to_screen_to_default() {
        let mut host = FakeHost::sized(10.0, 10.0);
        assert_eq!(resolve_backing_scale(&host, 1.0), 1.0);

        host.screen_scale = Some(3.0);
        assert_eq!(resolve_backing_scale(&host, 1.0), 3.0);

        host.window_scale = Some(2.0);
        assert_eq!(resolve_backing_scale(&host, 1.0), 2.0);

        host.window_scale = Some(0.0);
        assert_eq!(resolve_backing_scale(&host, 1.0), 3.0);
    }

    #[test]
    fn attach_to_retina_window_notifies_engine_once() {
        let mut host = FakeHost::sized(400.0, 300.0);
        let engine = RecordingEngine::default();
        let mut sync = SurfaceSync::new(FakeSurface::default(), &host, 1.0, false);
        assert_eq!(sync.geometry().backing_scale, 1.0);

        host.window_scale = Some(2.0);
        let geometry = sync.sync_geometry(&host);
        assert_eq!(geometry.drawable_size, PhysicalSize::new(800, 600));
        assert_eq!(sync.surface().scale, 2.0);
        assert_eq!(sync.surface().drawable, Some(PhysicalSize::new(800, 600)));
        assert_eq!(
            sync.surface().frame,
            Some(Rect::from_size(LogicalSize::new(400.0, 300.0)))
        );

        assert!(sync.notify_engine_resize(&host, &engine, WindowId(0)));
        assert!(!sync.notify_engine_resize(&host, &engine, WindowId(0)));
        sync.sync_geometry(&host);
        assert!(!sync.notify_engine_resize(&host, &engine, WindowId(0)));

        assert_eq!(
            *engine.resizes.borrow(),
            vec![(PhysicalSize::new(800, 600), WindowId(0))]
        );
        assert_eq!(sync.last_resize(), Some(PhysicalSize::new(800, 600)));
    }

    #[test]
    fn each_distinct_size_is_sent_once() {
        let mut host = FakeHost::sized(100.0, 100.0);
        host.window_scale = Some(1.0);
        let engine = RecordingEngine::default();
        let mut sync = SurfaceSync::new(FakeSurface::default(), &host, 1.0, false);

        for (w, h) in [(100.0, 100.0), (100.0, 100.0), (120.0, 80.0), (120.0, 80.0), (100.0, 100.0)] {
            host.bounds = Rect::from_size(LogicalSize::new(w, h));
            sync.sync_geometry(&host);
            sync.notify_engine_resize(&host, &engine, WindowId(0));
        }

        let sizes: Vec<_> = engine.resizes.borrow().iter().map(|(s, _)| *s).collect();
        assert_eq!(
            sizes,
            vec![
                PhysicalSize::new(100, 100),
                PhysicalSize::new(120, 80),
                PhysicalSize::new(100, 100),
            ]
        );
    }

    #[test]
    fn rejected_size_is_offered_again() {
        let host = FakeHost::sized(400.0, 300.0);
        let engine = RejectOnceEngine::default();
        let mut sync = SurfaceSync::new(FakeSurface::default(), &host, 1.0, false);

        assert!(sync.notify_engine_resize(&host, &engine, WindowId(0)));
        assert_eq!(sync.last_resize(), None);
        assert!(sync.notify_engine_resize(&host, &engine, WindowId(0)));
        assert!(!sync.notify_engine_resize(&host, &engine, WindowId(0)));

        assert_eq!(engine.calls.get(), 2);
        assert_eq!(
            *engine.accepted.borrow(),
            vec![PhysicalSize::new(400, 300)]
        );
        assert_eq!(sync.last_resize(), Some(PhysicalSize::new(400, 300)));
    }

    #[test]
    fn resize_always_forwards_repeats() {
        let host = FakeHost::sized(10.0, 10.0);
        let engine = RecordingEngine::default();
        let mut sync = SurfaceSync::new(FakeSurface::default(), &host, 1.0, true);

        assert!(sync.notify_engine_resize(&host, &engine, WindowId(0)));
        assert!(sync.notify_engine_resize(&host, &engine, WindowId(0)));
        assert_eq!(engine.resizes.borrow().len(), 2);
    }

    #[test]
    fn drop_detaches_only_when_attached() {
        let host = FakeHost::sized(10.0, 10.0);

        let attached = FakeSurface {
            attached: true,
            ..FakeSurface::default()
        };
        let removals = attached.removals.clone();
        drop(SurfaceSync::new(attached, &host, 1.0, false));
        assert_eq!(removals.get(), 1);

        let detached = FakeSurface::default();
        let removals = detached.removals.clone();
        drop(SurfaceSync::new(detached, &host, 1.0, false));
        assert_eq!(removals.get(), 0);
    }
}
