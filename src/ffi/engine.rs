//! ### English
//! Engine callback table supplied by the embedder.
//!
//! ### 中文
//! 宿主提供的引擎回调表。

use std::ffi::c_void;

use dpi::PhysicalSize;

use crate::engine::{BridgeError, EmbedViewInputEvent, EmbeddedEngine, InputEvent, Result, WindowId};

/// ### English
/// Submits one event to the engine's input pipeline. Returns `false` if the engine rejected it.
///
/// ### 中文
/// 向引擎输入管线提交一个事件。引擎拒绝时返回 `false`。
pub type EmbedViewParseInputEventFn =
    unsafe extern "C" fn(user_data: *mut c_void, event: *const EmbedViewInputEvent) -> bool;

/// ### English
/// Resizes an engine window in device pixels. Returns `false` if the engine rejected it.
///
/// ### 中文
/// 以设备像素调整引擎窗口大小。引擎拒绝时返回 `false`。
pub type EmbedViewResizeWindowFn =
    unsafe extern "C" fn(user_data: *mut c_void, width: u32, height: u32, window_id: i32) -> bool;

/// ### English
/// Returns the engine's main window id.
///
/// ### 中文
/// 返回引擎主窗口 ID。
pub type EmbedViewMainWindowIdFn = unsafe extern "C" fn(user_data: *mut c_void) -> i32;

#[repr(C)]
#[derive(Clone, Copy)]
/// ### English
/// Engine vtable. All three callbacks are required; `user_data` is passed back untouched and must
/// outlive the view.
///
/// ### 中文
/// 引擎函数表。三个回调均为必需；`user_data` 原样回传，生命周期必须长于 view。
pub struct EmbedViewEngineApi {
    pub user_data: *mut c_void,
    pub parse_input_event: Option<EmbedViewParseInputEventFn>,
    pub resize_window: Option<EmbedViewResizeWindowFn>,
    pub main_window_id: Option<EmbedViewMainWindowIdFn>,
}

/// ### English
/// `EmbeddedEngine` over a validated `EmbedViewEngineApi`.
///
/// ### 中文
/// 基于已校验 `EmbedViewEngineApi` 的 `EmbeddedEngine`。
pub(super) struct FfiEngine {
    user_data: *mut c_void,
    parse_input_event: EmbedViewParseInputEventFn,
    resize_window: EmbedViewResizeWindowFn,
    main_window_id: EmbedViewMainWindowIdFn,
}

impl FfiEngine {
    pub(super) fn new(api: &EmbedViewEngineApi) -> Result<Self> {
        Ok(Self {
            user_data: api.user_data,
            parse_input_event: api
                .parse_input_event
                .ok_or(BridgeError::MissingCallback("parse_input_event"))?,
            resize_window: api
                .resize_window
                .ok_or(BridgeError::MissingCallback("resize_window"))?,
            main_window_id: api
                .main_window_id
                .ok_or(BridgeError::MissingCallback("main_window_id"))?,
        })
    }
}

impl EmbeddedEngine for FfiEngine {
    fn parse_input_event(&self, event: InputEvent) -> Result<()> {
        let pod = EmbedViewInputEvent::from(&event);
        if unsafe { (self.parse_input_event)(self.user_data, &pod) } {
            Ok(())
        } else {
            Err(BridgeError::EngineDisconnected)
        }
    }

    fn resize_window(&self, size: PhysicalSize<u32>, window_id: WindowId) -> Result<()> {
        if unsafe { (self.resize_window)(self.user_data, size.width, size.height, window_id.0) } {
            Ok(())
        } else {
            Err(BridgeError::EngineDisconnected)
        }
    }

    fn main_window_id(&self) -> WindowId {
        WindowId(unsafe { (self.main_window_id)(self.user_data) })
    }
}
