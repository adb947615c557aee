/// ### English
/// `embed_view_bridge` crate root.
/// Exposes the C ABI via `ffi`; the Rust core (usable directly by Rust embedders) lives under
/// `engine`.
///
/// ### 中文
/// `embed_view_bridge` 的 crate 根。
/// 通过 `ffi` 导出 C ABI；Rust 核心（Rust 宿主可直接使用）位于 `engine` 模块。
pub mod engine;
mod ffi;

