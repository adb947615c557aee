use crate::engine::flags;
use crate::engine::{
    EMBED_VIEW_INPUT_KIND_KEY, EMBED_VIEW_INPUT_KIND_MOUSE_BUTTON,
    EMBED_VIEW_INPUT_KIND_MOUSE_MOTION,
};

#[unsafe(no_mangle)]
/// ### English
/// Returns the C ABI version.
///
/// ### 中文
/// 返回 C ABI 版本号。
pub extern "C" fn embed_view_abi_version() -> u32 {
    super::EMBED_VIEW_ABI_VERSION
}

#[unsafe(no_mangle)]
/// ### English
/// Returns `EMBED_VIEW_FLAG_TOP_DOWN_COORDINATES`.
/// (Constant getter; avoids relying on C headers.)
///
/// ### 中文
/// 返回 `EMBED_VIEW_FLAG_TOP_DOWN_COORDINATES`。
/// （常量获取函数；避免依赖 C 头文件。）
pub extern "C" fn embed_view_flag_top_down_coordinates() -> u32 {
    flags::EMBED_VIEW_FLAG_TOP_DOWN_COORDINATES
}

#[unsafe(no_mangle)]
/// ### English
/// Returns `EMBED_VIEW_FLAG_NO_CONTROL_CLICK`.
///
/// ### 中文
/// 返回 `EMBED_VIEW_FLAG_NO_CONTROL_CLICK`。
pub extern "C" fn embed_view_flag_no_control_click() -> u32 {
    flags::EMBED_VIEW_FLAG_NO_CONTROL_CLICK
}

#[unsafe(no_mangle)]
/// ### English
/// Returns `EMBED_VIEW_FLAG_RESIZE_ALWAYS`.
///
/// ### 中文
/// 返回 `EMBED_VIEW_FLAG_RESIZE_ALWAYS`。
pub extern "C" fn embed_view_flag_resize_always() -> u32 {
    flags::EMBED_VIEW_FLAG_RESIZE_ALWAYS
}

#[unsafe(no_mangle)]
/// ### English
/// Returns `EMBED_VIEW_INPUT_KIND_KEY`.
///
/// ### 中文
/// 返回 `EMBED_VIEW_INPUT_KIND_KEY`。
pub extern "C" fn embed_view_input_kind_key() -> u32 {
    EMBED_VIEW_INPUT_KIND_KEY
}

#[unsafe(no_mangle)]
/// ### English
/// Returns `EMBED_VIEW_INPUT_KIND_MOUSE_BUTTON`.
///
/// ### 中文
/// 返回 `EMBED_VIEW_INPUT_KIND_MOUSE_BUTTON`。
pub extern "C" fn embed_view_input_kind_mouse_button() -> u32 {
    EMBED_VIEW_INPUT_KIND_MOUSE_BUTTON
}

#[unsafe(no_mangle)]
/// ### English
/// Returns `EMBED_VIEW_INPUT_KIND_MOUSE_MOTION`.
///
/// ### 中文
/// 返回 `EMBED_VIEW_INPUT_KIND_MOUSE_MOTION`。
pub extern "C" fn embed_view_input_kind_mouse_motion() -> u32 {
    EMBED_VIEW_INPUT_KIND_MOUSE_MOTION
}
