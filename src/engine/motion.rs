//! ### English
//! Side channel for pointer-motion events.
//!
//! Motion must not go through the engine's standard input pipeline: in embedded mode the engine
//! reacts to motion by changing the cursor shape through its embedded display server, which is not
//! safe from this context and crashes the process. The embedder registers one handler instead and
//! forwards motion into the engine on its own terms.
//!
//! ### 中文
//! 指针移动事件的旁路通道。
//!
//! 移动事件不能走引擎的标准输入管线：嵌入模式下引擎会因移动事件通过内嵌 display server
//! 修改光标形状，而这在当前上下文中不安全，会导致进程崩溃。因此由宿主注册一个处理器，
//! 自行把移动事件转发给引擎。

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::trace;

use super::event::MouseMotionEvent;

/// ### English
/// Boxed motion handler.
///
/// ### 中文
/// 装箱的移动事件处理器。
pub type MotionHandler = Box<dyn FnMut(MouseMotionEvent) + Send + 'static>;

/// ### English
/// Single registration slot for the motion handler (last writer wins).
///
/// Cloning yields another handle onto the same slot, so the embedder can keep one handle and give
/// another to the view at construction time. Registering from several hosts at once is not a
/// supported use; the slot stays memory-safe but which handler wins is unspecified.
///
/// ### 中文
/// 移动事件处理器的单一注册槽（后写者生效）。
///
/// clone 得到指向同一槽位的另一个句柄，宿主可自留一个句柄，并在构造时把另一个交给 view。
/// 多个宿主同时注册不受支持；槽位依然内存安全，但最终生效的处理器不确定。
#[derive(Clone, Default)]
pub struct MotionHandlerSlot {
    inner: Arc<Mutex<SlotState>>,
}

#[derive(Default)]
struct SlotState {
    handler: Option<MotionHandler>,
    /// Bumped by every `register`/`clear`.
    generation: u64,
}

impl SlotState {
    fn replace(&mut self, handler: Option<MotionHandler>) {
        self.handler = handler;
        self.generation = self.generation.wrapping_add(1);
    }
}

impl MotionHandlerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// ### English
    /// Installs `handler`, replacing any previous one.
    ///
    /// ### 中文
    /// 安装 `handler`，替换之前的处理器。
    pub fn register<F>(&self, handler: F)
    where
        F: FnMut(MouseMotionEvent) + Send + 'static,
    {
        self.lock().replace(Some(Box::new(handler)));
    }

    /// ### English
    /// Removes the current handler; later motion is discarded.
    ///
    /// ### 中文
    /// 移除当前处理器；之后的移动事件会被丢弃。
    pub fn clear(&self) {
        self.lock().replace(None);
    }

    pub fn is_registered(&self) -> bool {
        self.lock().handler.is_some()
    }

    /// ### English
    /// Hands one motion event to the handler. Returns `false` (event discarded) when none is set.
    ///
    /// The handler runs without the slot locked, so it may register or clear on this same slot.
    /// A replacement made while it runs wins over the handler being put back.
    ///
    /// ### 中文
    /// 把一个移动事件交给处理器。未注册时返回 `false`（事件被丢弃）。
    ///
    /// 处理器运行期间槽位不加锁，因此处理器可以在同一槽位上注册或清除。
    /// 运行期间发生的替换优先于放回原处理器。
    pub fn dispatch(&self, event: MouseMotionEvent) -> bool {
        let (handler, generation) = {
            let mut state = self.lock();
            (state.handler.take(), state.generation)
        };
        let Some(mut handler) = handler else {
            trace!("no motion handler registered, dropping motion event");
            return false;
        };

        handler(event);

        let mut state = self.lock();
        if state.generation == generation && state.handler.is_none() {
            state.handler = Some(handler);
        }
        true
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for MotionHandlerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionHandlerSlot")
            .field("registered", &self.is_registered())
            .finish()
    }
}
