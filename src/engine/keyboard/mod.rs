//! ### English
//! Host virtual key-code translation into the engine's physical key space.
//! Both tables are compile-time `match` tables: immutable, no initialization order.
//!
//! ### 中文
//! 宿主虚拟键码到引擎物理键空间的转换。
//! 两张表均为编译期 `match` 表：不可变，无初始化顺序问题。
mod location;
mod physical_key;

use crate::engine::key::{Key, KeyLocation};

/// ### English
/// Looks up the engine physical key for a host key code (`None` = unsupported key).
///
/// ### 中文
/// 查找宿主键码对应的引擎物理按键（`None` = 不支持的按键）。
#[inline]
pub fn physical_key(key_code: u16) -> Option<Key> {
    physical_key::host_key_to_physical(key_code)
}

/// ### English
/// Looks up the modifier side for a host key code (`Unspecified` for non-modifiers).
///
/// ### 中文
/// 查找宿主键码对应的修饰键所在侧（非修饰键为 `Unspecified`）。
#[inline]
pub fn key_location(key_code: u16) -> KeyLocation {
    location::host_key_to_location(key_code)
}
