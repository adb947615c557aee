/// ### English
/// Embedding bridge core (key tables, input translation, surface sync, and the view adapter).
///
/// ### 中文
/// 嵌入桥接层核心（键码表、输入转换、surface 同步与 view 适配层）。
pub mod button_mask;
pub mod command;
pub mod config;
pub mod engine_api;
pub mod error;
pub mod event;
pub mod flags;
pub mod host;
pub mod input_types;
pub mod key;
pub mod keyboard;
pub mod motion;
pub mod surface;
pub mod translate;
pub mod view;

pub use button_mask::{ButtonMask, current_button_mask};
pub use command::{EngineCommand, EngineCommandReceiver, QueuedEngine, queued_engine};
pub use config::{CoordinateOrigin, ViewConfig};
pub use engine_api::EmbeddedEngine;
pub use error::{BridgeError, Result};
pub use event::{
    InputEvent, KeyEvent, Modifiers, MouseButtonEvent, MouseMotionEvent, Vector2, WindowId,
};
pub use host::{
    HostButton, HostKeyEvent, HostModifierFlags, HostMouseEvent, HostScrollEvent, HostView,
    PointerState, Rect, TabletPoint,
};
pub use input_types::{
    EMBED_VIEW_INPUT_KIND_KEY, EMBED_VIEW_INPUT_KIND_MOUSE_BUTTON,
    EMBED_VIEW_INPUT_KIND_MOUSE_MOTION, EmbedViewInputEvent,
};
pub use key::{Key, KeyLocation, MouseButton};
pub use keyboard::{key_location, physical_key};
pub use motion::{MotionHandler, MotionHandlerSlot};
pub use surface::{
    PresentableSurface, SurfaceGeometry, SurfaceSync, device_pixel_size, resolve_backing_scale,
};
pub use translate::{InputTranslator, wheel_click};
pub use view::EmbedView;
