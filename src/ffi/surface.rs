//! ### English
//! Presentable-surface callback table supplied by the embedder (e.g. a layer under the host view).
//!
//! ### 中文
//! 宿主提供的可呈现 surface 回调表（例如宿主 view 下的图层）。

use std::ffi::c_void;

use dpi::PhysicalSize;

use crate::engine::{BridgeError, PresentableSurface, Rect, Result};

pub type EmbedViewSetFrameFn =
    unsafe extern "C" fn(user_data: *mut c_void, x: f64, y: f64, width: f64, height: f64);
pub type EmbedViewSetContentsScaleFn = unsafe extern "C" fn(user_data: *mut c_void, scale: f64);
pub type EmbedViewSetDrawableSizeFn =
    unsafe extern "C" fn(user_data: *mut c_void, width: u32, height: u32);
pub type EmbedViewHasParentFn = unsafe extern "C" fn(user_data: *mut c_void) -> bool;
pub type EmbedViewRemoveFromParentFn = unsafe extern "C" fn(user_data: *mut c_void);

#[repr(C)]
#[derive(Clone, Copy)]
/// ### English
/// Surface vtable. All callbacks are required. `remove_from_parent` is called at most once, when
/// the view is destroyed while the surface is still attached.
///
/// ### 中文
/// surface 函数表。所有回调均为必需。`remove_from_parent` 最多调用一次：
/// 在 view 销毁且 surface 仍处于附加状态时调用。
pub struct EmbedViewSurfaceApi {
    pub user_data: *mut c_void,
    pub set_frame: Option<EmbedViewSetFrameFn>,
    pub set_contents_scale: Option<EmbedViewSetContentsScaleFn>,
    pub set_drawable_size: Option<EmbedViewSetDrawableSizeFn>,
    pub has_parent: Option<EmbedViewHasParentFn>,
    pub remove_from_parent: Option<EmbedViewRemoveFromParentFn>,
}

/// ### English
/// `PresentableSurface` over a validated `EmbedViewSurfaceApi`. The contents scale is mirrored
/// locally so reads never cross the ABI.
///
/// ### 中文
/// 基于已校验 `EmbedViewSurfaceApi` 的 `PresentableSurface`。contents scale 在本地镜像，
/// 读取时无需跨越 ABI。
pub(super) struct FfiSurface {
    user_data: *mut c_void,
    set_frame: EmbedViewSetFrameFn,
    set_contents_scale: EmbedViewSetContentsScaleFn,
    set_drawable_size: EmbedViewSetDrawableSizeFn,
    has_parent: EmbedViewHasParentFn,
    remove_from_parent: EmbedViewRemoveFromParentFn,
    contents_scale: f64,
}

impl FfiSurface {
    pub(super) fn new(api: &EmbedViewSurfaceApi) -> Result<Self> {
        Ok(Self {
            user_data: api.user_data,
            set_frame: api.set_frame.ok_or(BridgeError::MissingCallback("set_frame"))?,
            set_contents_scale: api
                .set_contents_scale
                .ok_or(BridgeError::MissingCallback("set_contents_scale"))?,
            set_drawable_size: api
                .set_drawable_size
                .ok_or(BridgeError::MissingCallback("set_drawable_size"))?,
            has_parent: api.has_parent.ok_or(BridgeError::MissingCallback("has_parent"))?,
            remove_from_parent: api
                .remove_from_parent
                .ok_or(BridgeError::MissingCallback("remove_from_parent"))?,
            contents_scale: 1.0,
        })
    }
}

impl PresentableSurface for FfiSurface {
    fn set_frame(&mut self, frame: Rect) {
        unsafe {
            (self.set_frame)(
                self.user_data,
                frame.origin.x,
                frame.origin.y,
                frame.size.width,
                frame.size.height,
            )
        };
    }

    fn set_contents_scale(&mut self, scale: f64) {
        self.contents_scale = scale;
        unsafe { (self.set_contents_scale)(self.user_data, scale) };
    }

    fn contents_scale(&self) -> f64 {
        self.contents_scale
    }

    fn set_drawable_size(&mut self, size: PhysicalSize<u32>) {
        unsafe { (self.set_drawable_size)(self.user_data, size.width, size.height) };
    }

    fn has_parent(&self) -> bool {
        unsafe { (self.has_parent)(self.user_data) }
    }

    fn remove_from_parent(&mut self) {
        unsafe { (self.remove_from_parent)(self.user_data) };
    }
}
