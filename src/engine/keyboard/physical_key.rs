//! ### English
//! Host virtual key code to engine physical `Key` mapping.
//!
//! ### 中文
//! 宿主虚拟键码到引擎物理 `Key` 的映射。

use crate::engine::key::Key;

/// ### English
/// Maps a host virtual key code into the engine's physical key.
/// Returns `None` for codes with no engine equivalent (the event is dropped, not an error).
///
/// #### Parameters
/// - `key_code`: Host virtual key code (position-based, layout independent).
///
/// ### 中文
/// 将宿主虚拟键码映射为引擎物理按键。
/// 对没有引擎对应项的键码返回 `None`（事件被丢弃，而不是错误）。
///
/// #### 参数
/// - `key_code`：宿主虚拟键码（基于物理位置，与键盘布局无关）。
pub(in crate::engine) fn host_key_to_physical(key_code: u16) -> Option<Key> {
    let key = match key_code {
        0x00 => Key::A,
        0x01 => Key::S,
        0x02 => Key::D,
        0x03 => Key::F,
        0x04 => Key::H,
        0x05 => Key::G,
        0x06 => Key::Z,
        0x07 => Key::X,
        0x08 => Key::C,
        0x09 => Key::V,
        0x0a => Key::Section,
        0x0b => Key::B,
        0x0c => Key::Q,
        0x0d => Key::W,
        0x0e => Key::E,
        0x0f => Key::R,
        0x10 => Key::Y,
        0x11 => Key::T,
        0x12 => Key::Key1,
        0x13 => Key::Key2,
        0x14 => Key::Key3,
        0x15 => Key::Key4,
        0x16 => Key::Key6,
        0x17 => Key::Key5,
        0x18 => Key::Equal,
        0x19 => Key::Key9,
        0x1a => Key::Key7,
        0x1b => Key::Minus,
        0x1c => Key::Key8,
        0x1d => Key::Key0,
        0x1e => Key::BracketRight,
        0x1f => Key::O,
        0x20 => Key::U,
        0x21 => Key::BracketLeft,
        0x22 => Key::I,
        0x23 => Key::P,
        0x24 => Key::Enter,
        0x25 => Key::L,
        0x26 => Key::J,
        0x27 => Key::Apostrophe,
        0x28 => Key::K,
        0x29 => Key::Semicolon,
        0x2a => Key::Backslash,
        0x2b => Key::Comma,
        0x2c => Key::Slash,
        0x2d => Key::N,
        0x2e => Key::M,
        0x2f => Key::Period,
        0x30 => Key::Tab,
        0x31 => Key::Space,
        0x32 => Key::QuoteLeft,
        0x33 => Key::Backspace,
        0x35 => Key::Escape,

        // Both Command keys land on Meta; `key_location` tells them apart.
        0x36 | 0x37 => Key::Meta,
        0x38 | 0x3c => Key::Shift,
        0x39 => Key::CapsLock,
        0x3a | 0x3d => Key::Alt,
        0x3b | 0x3e => Key::Ctrl,

        0x40 => Key::F17,
        0x41 => Key::KpPeriod,
        0x43 => Key::KpMultiply,
        0x45 => Key::KpAdd,
        0x47 => Key::NumLock,
        0x48 => Key::VolumeUp,
        0x49 => Key::VolumeDown,
        0x4a => Key::VolumeMute,
        0x4b => Key::KpDivide,
        0x4c => Key::KpEnter,
        0x4e => Key::KpSubtract,
        0x4f => Key::F18,
        0x50 => Key::F19,
        0x51 => Key::Equal,
        0x52 => Key::Kp0,
        0x53 => Key::Kp1,
        0x54 => Key::Kp2,
        0x55 => Key::Kp3,
        0x56 => Key::Kp4,
        0x57 => Key::Kp5,
        0x58 => Key::Kp6,
        0x59 => Key::Kp7,
        0x5a => Key::F20,
        0x5b => Key::Kp8,
        0x5c => Key::Kp9,

        0x5d => Key::Yen,
        0x5e => Key::Underscore,
        0x5f => Key::Comma,

        0x60 => Key::F5,
        0x61 => Key::F6,
        0x62 => Key::F7,
        0x63 => Key::F3,
        0x64 => Key::F8,
        0x65 => Key::F9,
        0x66 => Key::JisEisu,
        0x67 => Key::F11,
        0x68 => Key::JisKana,
        0x69 => Key::F13,
        0x6a => Key::F16,
        0x6b => Key::F14,
        0x6d => Key::F10,
        0x6e => Key::Menu,
        0x6f => Key::F12,
        0x71 => Key::F15,
        0x72 => Key::Insert,
        0x73 => Key::Home,
        0x74 => Key::PageUp,
        0x75 => Key::Delete,
        0x76 => Key::F4,
        0x77 => Key::End,
        0x78 => Key::F2,
        0x79 => Key::PageDown,
        0x7a => Key::F1,
        0x7b => Key::Left,
        0x7c => Key::Right,
        0x7d => Key::Down,
        0x7e => Key::Up,

        _ => return None,
    };

    Some(key)
}
