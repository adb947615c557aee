//! ### English
//! C ABI bindings for view lifecycle and geometry.
//!
//! ### 中文
//! view 生命周期与几何相关的 C ABI 绑定。

use dpi::{LogicalPosition, LogicalSize};
use tracing::warn;

use super::engine::{EmbedViewEngineApi, FfiEngine};
use super::surface::{EmbedViewSurfaceApi, FfiSurface};
use super::{EmbedViewHandle, view_mut};
use crate::engine::{EmbedView, HostView, MotionHandlerSlot, PointerState, Rect, ViewConfig};

/// ### English
/// Host view state mirrored from the embedder through `embed_view_set_*` calls.
///
/// ### 中文
/// 通过 `embed_view_set_*` 调用从宿主镜像过来的宿主 view 状态。
#[derive(Debug, Default)]
pub(super) struct FfiHost {
    /// ### English
    /// View origin in window coordinates.
    ///
    /// ### 中文
    /// view 在窗口坐标中的原点。
    pub(super) origin_in_window: LogicalPosition<f64>,
    pub(super) bounds: Rect,
    pub(super) window_scale: Option<f64>,
    pub(super) screen_scale: Option<f64>,
    pub(super) pressed_buttons: u32,
}

impl HostView for FfiHost {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn window_backing_scale(&self) -> Option<f64> {
        self.window_scale
    }

    fn main_screen_backing_scale(&self) -> Option<f64> {
        self.screen_scale
    }

    fn convert_from_window(&self, point: LogicalPosition<f64>) -> LogicalPosition<f64> {
        LogicalPosition::new(
            point.x - self.origin_in_window.x,
            point.y - self.origin_in_window.y,
        )
    }
}

impl PointerState for FfiHost {
    fn pressed_mouse_buttons(&self) -> u32 {
        self.pressed_buttons
    }
}

/// `0`, negative or NaN means "unknown".
fn scale_option(scale: f64) -> Option<f64> {
    (scale > 0.0).then_some(scale)
}

#[unsafe(no_mangle)]
/// ### English
/// Creates one view.
///
/// Returns NULL if either table is NULL, a required callback is missing, or `view_flags` has
/// unknown bits. A view created inside a window (`window_scale > 0`) reports its size to the engine
/// before this returns.
///
/// #### Parameters
/// - `engine_api`: Engine callbacks; copied, the pointer need not outlive this call.
/// - `surface_api`: Surface callbacks; copied, the pointer need not outlive this call.
/// - `x`/`y`: View origin in window coordinates.
/// - `width`/`height`: View bounds in points.
/// - `window_scale`: Window backing scale (`0` = not in a window).
/// - `screen_scale`: Main screen backing scale (`0` = unknown).
/// - `view_flags`: `EMBED_VIEW_FLAG_*` bitmask.
///
/// ### 中文
/// 创建一个 view。
///
/// 任一函数表为 NULL、缺少必需回调或 `view_flags` 含未知位时返回 NULL。
/// 在窗口中创建的 view（`window_scale > 0`）会在返回前把尺寸上报给引擎。
///
/// #### 参数
/// - `engine_api`：引擎回调；会被复制，指针无需在调用后继续有效。
/// - `surface_api`：surface 回调；会被复制，指针无需在调用后继续有效。
/// - `x`/`y`：view 在窗口坐标中的原点。
/// - `width`/`height`：view 的 bounds（点）。
/// - `window_scale`：窗口 backing scale（`0` = 不在窗口中）。
/// - `screen_scale`：主屏幕 backing scale（`0` = 未知）。
/// - `view_flags`：`EMBED_VIEW_FLAG_*` 位掩码。
pub unsafe extern "C" fn embed_view_create(
    engine_api: *const EmbedViewEngineApi,
    surface_api: *const EmbedViewSurfaceApi,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    window_scale: f64,
    screen_scale: f64,
    view_flags: u32,
) -> *mut EmbedViewHandle {
    let (Some(engine_api), Some(surface_api)) = (unsafe { engine_api.as_ref() }, unsafe {
        surface_api.as_ref()
    }) else {
        return std::ptr::null_mut();
    };

    let built = ViewConfig::from_flags(view_flags).and_then(|config| {
        Ok((
            config,
            FfiEngine::new(engine_api)?,
            FfiSurface::new(surface_api)?,
        ))
    });
    let (config, engine, surface) = match built {
        Ok(parts) => parts,
        Err(err) => {
            warn!(%err, "embed_view_create failed");
            return std::ptr::null_mut();
        }
    };

    let host = FfiHost {
        origin_in_window: LogicalPosition::new(x, y),
        bounds: Rect::from_size(LogicalSize::new(width, height)),
        window_scale: scale_option(window_scale),
        screen_scale: scale_option(screen_scale),
        pressed_buttons: 0,
    };
    let attached = host.window_scale.is_some();
    let motion = MotionHandlerSlot::new();
    let mut view = EmbedView::new(engine, surface, host, motion.clone(), &config);
    if attached {
        view.view_did_move_to_window();
    }

    Box::into_raw(Box::new(EmbedViewHandle { view, motion }))
}

#[unsafe(no_mangle)]
/// ### English
/// Destroys a view created by `embed_view_create`. The surface is detached from its parent if it
/// is still attached. No callback is invoked after this returns.
///
/// ### 中文
/// 销毁由 `embed_view_create` 创建的 view。若 surface 仍处于附加状态，会将其从父级移除。
/// 返回后不会再调用任何回调。
pub unsafe extern "C" fn embed_view_destroy(view: *mut EmbedViewHandle) {
    if view.is_null() {
        return;
    }
    unsafe {
        drop(Box::from_raw(view));
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Reports a new view frame (origin in window coordinates, size in points). May notify the engine
/// of a new window size.
///
/// ### 中文
/// 报告新的 view frame（原点为窗口坐标，尺寸单位为点）。可能会通知引擎新的窗口尺寸。
pub unsafe extern "C" fn embed_view_set_bounds(
    view: *mut EmbedViewHandle,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) {
    let Some(view) = (unsafe { view_mut(view) }) else {
        return;
    };

    let host = view.host_mut();
    host.origin_in_window = LogicalPosition::new(x, y);
    host.bounds = Rect::from_size(LogicalSize::new(width, height));
    view.bounds_did_change();
}

#[unsafe(no_mangle)]
/// ### English
/// Reports that the view moved to another window (or out of one) or that the backing scale
/// changed. `window_scale = 0` means the view is not in a window.
///
/// ### 中文
/// 报告 view 移动到其它窗口（或脱离窗口）或 backing scale 发生变化。
/// `window_scale = 0` 表示 view 不在任何窗口中。
pub unsafe extern "C" fn embed_view_set_backing_scale(
    view: *mut EmbedViewHandle,
    window_scale: f64,
    screen_scale: f64,
) {
    let Some(view) = (unsafe { view_mut(view) }) else {
        return;
    };

    let host = view.host_mut();
    host.window_scale = scale_option(window_scale);
    host.screen_scale = scale_option(screen_scale);
    view.view_did_move_to_window();
}

#[unsafe(no_mangle)]
/// ### English
/// Whether the view takes keyboard focus.
///
/// ### 中文
/// view 是否接受键盘焦点。
pub unsafe extern "C" fn embed_view_accepts_first_responder(view: *mut EmbedViewHandle) -> bool {
    unsafe { view_mut(view) }.is_some_and(|view| view.accepts_first_responder())
}

#[unsafe(no_mangle)]
/// ### English
/// Whether a click into an inactive window is delivered to the view.
///
/// ### 中文
/// 点击非激活窗口时是否把该点击派发给 view。
pub unsafe extern "C" fn embed_view_accepts_first_mouse(view: *mut EmbedViewHandle) -> bool {
    unsafe { view_mut(view) }.is_some_and(|view| view.accepts_first_mouse())
}
