//! ### English
//! C ABI binding for the pointer-motion side channel.
//!
//! ### 中文
//! 指针移动旁路通道的 C ABI 绑定。

use std::ffi::c_void;

use super::{EmbedViewHandle, motion_slot};
use crate::engine::EmbedViewInputEvent;

/// ### English
/// Receives one `EMBED_VIEW_INPUT_KIND_MOUSE_MOTION` event. The pointer is only valid for the
/// duration of the call.
///
/// ### 中文
/// 接收一个 `EMBED_VIEW_INPUT_KIND_MOUSE_MOTION` 事件。指针仅在本次调用期间有效。
pub type EmbedViewMotionFn =
    unsafe extern "C" fn(user_data: *mut c_void, event: *const EmbedViewInputEvent);

/// ### English
/// Registered C callback. Invoked only from `embed_view_mouse_dragged`, i.e. on the thread that
/// drives the view.
///
/// ### 中文
/// 已注册的 C 回调。只会在 `embed_view_mouse_dragged` 中调用，即驱动该 view 的线程上。
struct MotionCallback {
    func: EmbedViewMotionFn,
    user_data: *mut c_void,
}

// SAFETY: the callback never leaves the thread that drives the view; the embedder owns
// `user_data` and guarantees it for as long as the registration lasts.
unsafe impl Send for MotionCallback {}

impl MotionCallback {
    fn call(&self, event: &EmbedViewInputEvent) {
        unsafe { (self.func)(self.user_data, event) };
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Registers the motion callback for a view, replacing any previous one. Passing NULL `callback`
/// clears the registration; motion is then discarded.
///
/// Motion is never submitted to the engine's input pipeline; the embedder forwards it to the
/// engine on its own terms. May be called from inside the motion callback itself.
///
/// ### 中文
/// 为 view 注册移动回调，替换之前的回调。`callback` 传 NULL 表示清除注册，之后移动事件会被丢弃。
///
/// 移动事件绝不会提交到引擎输入管线；由宿主自行转发给引擎。可以在移动回调内部调用。
pub unsafe extern "C" fn embed_view_set_motion_callback(
    view: *mut EmbedViewHandle,
    callback: Option<EmbedViewMotionFn>,
    user_data: *mut c_void,
) {
    let Some(slot) = (unsafe { motion_slot(view) }) else {
        return;
    };

    match callback {
        Some(func) => {
            let callback = MotionCallback { func, user_data };
            slot.register(move |event| callback.call(&EmbedViewInputEvent::from(&event)));
        }
        None => slot.clear(),
    }
}
