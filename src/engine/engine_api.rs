//! ### English
//! The embedded engine as seen by the bridge.
//!
//! ### 中文
//! 桥接层眼中的内嵌引擎。

use dpi::PhysicalSize;

use super::error::Result;
use super::event::{InputEvent, WindowId};

/// ### English
/// Operations the bridge consumes from the embedded engine.
/// The engine receives values only; it never gets references to host objects.
///
/// ### 中文
/// 桥接层从内嵌引擎使用的操作。
/// 引擎只接收值，从不持有宿主对象的引用。
pub trait EmbeddedEngine {
    /// ### English
    /// Submits one event into the engine's standard input pipeline (FIFO).
    /// Never called with `InputEvent::MouseMotion`.
    ///
    /// ### 中文
    /// 向引擎标准输入管线提交一个事件（FIFO）。
    /// 永远不会以 `InputEvent::MouseMotion` 调用。
    fn parse_input_event(&self, event: InputEvent) -> Result<()>;

    /// ### English
    /// Resizes the engine window to `size` device pixels.
    ///
    /// ### 中文
    /// 将引擎窗口调整为 `size` 设备像素。
    fn resize_window(&self, size: PhysicalSize<u32>, window_id: WindowId) -> Result<()>;

    /// ### English
    /// Id of the engine's main window, the target of every translated event.
    ///
    /// ### 中文
    /// 引擎主窗口的 ID，所有转换后事件的目标。
    fn main_window_id(&self) -> WindowId;
}

impl<E: EmbeddedEngine + ?Sized> EmbeddedEngine for &E {
    fn parse_input_event(&self, event: InputEvent) -> Result<()> {
        (**self).parse_input_event(event)
    }

    fn resize_window(&self, size: PhysicalSize<u32>, window_id: WindowId) -> Result<()> {
        (**self).resize_window(size, window_id)
    }

    fn main_window_id(&self) -> WindowId {
        (**self).main_window_id()
    }
}
