//! ### English
//! Host virtual key code to modifier side (`KeyLocation`) mapping.
//!
//! ### 中文
//! 宿主虚拟键码到修饰键所在侧（`KeyLocation`）的映射。

use crate::engine::key::KeyLocation;

/// ### English
/// Resolves the left/right side for the eight side-specific modifier key codes.
/// Every other code reports `KeyLocation::Unspecified`.
///
/// ### 中文
/// 为八个区分左右的修饰键键码解析所在侧。
/// 其它键码一律返回 `KeyLocation::Unspecified`。
pub(in crate::engine) fn host_key_to_location(key_code: u16) -> KeyLocation {
    match key_code {
        // Control
        0x3b => KeyLocation::Left,
        0x3e => KeyLocation::Right,
        // Shift
        0x38 => KeyLocation::Left,
        0x3c => KeyLocation::Right,
        // Option
        0x3a => KeyLocation::Left,
        0x3d => KeyLocation::Right,
        // Command (right sits at the lower code)
        0x36 => KeyLocation::Right,
        0x37 => KeyLocation::Left,
        _ => KeyLocation::Unspecified,
    }
}
