//! ### English
//! C ABI surface for `embed_view_bridge`.
//!
//! All exported symbols are `extern "C"` functions; structs are `#[repr(C)]`.
//! Every `embed_view_*` call on one view handle must come from the same thread (the host's main
//! thread); callbacks supplied by the embedder are invoked synchronously on that thread.
//!
//! ### 中文
//! `embed_view_bridge` 的 C ABI 接口层。
//!
//! 所有导出符号均为 `extern "C"` 函数；结构体使用 `#[repr(C)]`。
//! 同一个 view 句柄上的所有 `embed_view_*` 调用必须来自同一线程（宿主主线程）；
//! 宿主提供的回调会在该线程上同步调用。
mod abi;
mod engine;
mod input;
mod logging;
mod motion;
mod surface;
mod view;

use crate::engine::{EmbedView, MotionHandlerSlot};

use self::engine::FfiEngine;
use self::surface::FfiSurface;
use self::view::FfiHost;

#[repr(C)]
/// ### English
/// Opaque view handle owning the view adapter, its surface and its motion slot.
///
/// ### 中文
/// 不透明 view 句柄，持有 view 适配层、其 surface 与移动事件槽。
pub struct EmbedViewHandle {
    /// ### English
    /// View adapter driven by the `embed_view_*` entry points.
    ///
    /// ### 中文
    /// 由 `embed_view_*` 入口驱动的 view 适配层。
    view: EmbedView<FfiEngine, FfiSurface, FfiHost>,
    /// ### English
    /// Second handle onto the view's motion slot, reachable without borrowing `view` (the motion
    /// callback may re-register while a drag is being dispatched).
    ///
    /// ### 中文
    /// 指向 view 移动事件槽的第二个句柄，无需借用 `view` 即可访问
    /// （移动回调可能在拖拽派发期间重新注册）。
    motion: MotionHandlerSlot,
}

/// ### English
/// C ABI version for `embed_view_bridge`.
///
/// ### 中文
/// `embed_view_bridge` 的 C ABI 版本号。
const EMBED_VIEW_ABI_VERSION: u32 = 1;

/// ### English
/// Borrows the view behind a handle pointer (`None` for NULL).
///
/// # Safety
/// `handle` must be NULL or a live pointer returned by `embed_view_create`, not used concurrently.
///
/// ### 中文
/// 借用句柄指针背后的 view（NULL 返回 `None`）。
///
/// # Safety
/// `handle` 必须为 NULL 或 `embed_view_create` 返回且仍存活的指针，且不得并发使用。
unsafe fn view_mut<'a>(
    handle: *mut EmbedViewHandle,
) -> Option<&'a mut EmbedView<FfiEngine, FfiSurface, FfiHost>> {
    if handle.is_null() {
        return None;
    }
    Some(unsafe { &mut (*handle).view })
}

/// ### English
/// Borrows only the motion slot behind a handle pointer (`None` for NULL). Safe to use while
/// `view_mut` is live for the same handle.
///
/// # Safety
/// `handle` must be NULL or a live pointer returned by `embed_view_create`.
///
/// ### 中文
/// 只借用句柄指针背后的移动事件槽（NULL 返回 `None`）。同一句柄的 `view_mut` 存活时也可使用。
///
/// # Safety
/// `handle` 必须为 NULL 或 `embed_view_create` 返回且仍存活的指针。
unsafe fn motion_slot<'a>(handle: *mut EmbedViewHandle) -> Option<&'a MotionHandlerSlot> {
    if handle.is_null() {
        return None;
    }
    Some(unsafe { &(*handle).motion })
}
