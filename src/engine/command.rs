//! ### English
//! Queued engine sink: the host thread pushes commands, the engine's frame loop drains them.
//!
//! ### 中文
//! 队列式引擎接收端：宿主线程推送命令，引擎帧循环批量 drain。

use crossbeam_channel as channel;
use dpi::PhysicalSize;

use super::engine_api::EmbeddedEngine;
use super::error::{BridgeError, Result};
use super::event::{InputEvent, MouseMotionEvent, WindowId};
use super::motion::MotionHandler;

/// ### English
/// Commands sent from the host thread to the engine's frame loop, in submission order.
///
/// ### 中文
/// 从宿主线程发送到引擎帧循环的命令，按提交顺序排列。
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCommand {
    /// ### English
    /// Event for the engine's standard input pipeline.
    ///
    /// ### 中文
    /// 提交到引擎标准输入管线的事件。
    Input(InputEvent),
    /// ### English
    /// Window resize in device pixels.
    ///
    /// ### 中文
    /// 以设备像素为单位的窗口 resize。
    ResizeWindow {
        size: PhysicalSize<u32>,
        window_id: WindowId,
    },
    /// ### English
    /// Pointer motion forwarded by `QueuedEngine::motion_forwarder`. The frame loop must apply it
    /// directly (e.g. viewport pointer update) and never feed it to the standard input pipeline.
    ///
    /// ### 中文
    /// 由 `QueuedEngine::motion_forwarder` 转发的指针移动。帧循环必须直接处理
    /// （例如更新视口指针），绝不能送入标准输入管线。
    Motion(MouseMotionEvent),
}

/// ### English
/// `EmbeddedEngine` backed by an unbounded crossbeam channel.
///
/// ### 中文
/// 基于无界 crossbeam channel 的 `EmbeddedEngine`。
#[derive(Clone, Debug)]
pub struct QueuedEngine {
    tx: channel::Sender<EngineCommand>,
    main_window_id: WindowId,
}

/// ### English
/// Engine-side end of a `QueuedEngine`.
///
/// ### 中文
/// `QueuedEngine` 的引擎侧端点。
#[derive(Debug)]
pub struct EngineCommandReceiver {
    rx: channel::Receiver<EngineCommand>,
}

/// ### English
/// Creates a connected sink/receiver pair targeting `main_window_id`.
///
/// ### 中文
/// 创建一对相连的发送端/接收端，目标窗口为 `main_window_id`。
pub fn queued_engine(main_window_id: WindowId) -> (QueuedEngine, EngineCommandReceiver) {
    let (tx, rx) = channel::unbounded();
    (QueuedEngine { tx, main_window_id }, EngineCommandReceiver { rx })
}

impl QueuedEngine {
    fn send(&self, command: EngineCommand) -> Result<()> {
        self.tx
            .send(command)
            .map_err(|_| BridgeError::EngineDisconnected)
    }

    /// ### English
    /// Builds a motion handler that forwards into the dedicated `EngineCommand::Motion` lane.
    /// Register it on the view's `MotionHandlerSlot`.
    ///
    /// ### 中文
    /// 构造一个把移动事件转发到专用 `EngineCommand::Motion` 通道的处理器。
    /// 将其注册到 view 的 `MotionHandlerSlot` 上。
    pub fn motion_forwarder(&self) -> MotionHandler {
        let tx = self.tx.clone();
        Box::new(move |event| {
            let _ = tx.send(EngineCommand::Motion(event));
        })
    }
}

impl EmbeddedEngine for QueuedEngine {
    fn parse_input_event(&self, event: InputEvent) -> Result<()> {
        self.send(EngineCommand::Input(event))
    }

    fn resize_window(&self, size: PhysicalSize<u32>, window_id: WindowId) -> Result<()> {
        self.send(EngineCommand::ResizeWindow { size, window_id })
    }

    fn main_window_id(&self) -> WindowId {
        self.main_window_id
    }
}

impl EngineCommandReceiver {
    /// ### English
    /// Drains every command queued so far without blocking (call once per frame).
    ///
    /// ### 中文
    /// 非阻塞地 drain 目前已排队的所有命令（每帧调用一次）。
    pub fn drain(&self) -> impl Iterator<Item = EngineCommand> + '_ {
        self.rx.try_iter()
    }

    pub fn try_recv(&self) -> Option<EngineCommand> {
        self.rx.try_recv().ok()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
