//! ### English
//! Engine-side key identifiers (`Key`, `KeyLocation`) and mouse button indices.
//! Discriminants equal the embedded engine's numeric codes so values cross the C ABI unchanged.
//!
//! ### 中文
//! 引擎侧的按键标识（`Key`、`KeyLocation`）与鼠标按键索引。
//! 判别值与内嵌引擎的数值编码一致，因此可原样跨越 C ABI。

const SPECIAL: u32 = 1 << 22;

/// ### English
/// Physical key in the embedded engine's key space.
///
/// ### 中文
/// 内嵌引擎键空间中的物理按键。
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Key {
    #[default]
    None = 0,

    Escape = SPECIAL | 0x01,
    Tab = SPECIAL | 0x02,
    Backspace = SPECIAL | 0x04,
    Enter = SPECIAL | 0x05,
    KpEnter = SPECIAL | 0x06,
    Insert = SPECIAL | 0x07,
    Delete = SPECIAL | 0x08,
    Home = SPECIAL | 0x0D,
    End = SPECIAL | 0x0E,
    Left = SPECIAL | 0x0F,
    Up = SPECIAL | 0x10,
    Right = SPECIAL | 0x11,
    Down = SPECIAL | 0x12,
    PageUp = SPECIAL | 0x13,
    PageDown = SPECIAL | 0x14,
    Shift = SPECIAL | 0x15,
    Ctrl = SPECIAL | 0x16,
    Meta = SPECIAL | 0x17,
    Alt = SPECIAL | 0x18,
    CapsLock = SPECIAL | 0x19,
    NumLock = SPECIAL | 0x1A,

    F1 = SPECIAL | 0x1C,
    F2 = SPECIAL | 0x1D,
    F3 = SPECIAL | 0x1E,
    F4 = SPECIAL | 0x1F,
    F5 = SPECIAL | 0x20,
    F6 = SPECIAL | 0x21,
    F7 = SPECIAL | 0x22,
    F8 = SPECIAL | 0x23,
    F9 = SPECIAL | 0x24,
    F10 = SPECIAL | 0x25,
    F11 = SPECIAL | 0x26,
    F12 = SPECIAL | 0x27,
    F13 = SPECIAL | 0x28,
    F14 = SPECIAL | 0x29,
    F15 = SPECIAL | 0x2A,
    F16 = SPECIAL | 0x2B,
    F17 = SPECIAL | 0x2C,
    F18 = SPECIAL | 0x2D,
    F19 = SPECIAL | 0x2E,
    F20 = SPECIAL | 0x2F,

    Menu = SPECIAL | 0x42,
    VolumeDown = SPECIAL | 0x4C,
    VolumeMute = SPECIAL | 0x4D,
    VolumeUp = SPECIAL | 0x4E,

    KpMultiply = SPECIAL | 0x81,
    KpDivide = SPECIAL | 0x82,
    KpSubtract = SPECIAL | 0x83,
    KpPeriod = SPECIAL | 0x84,
    KpAdd = SPECIAL | 0x85,
    Kp0 = SPECIAL | 0x86,
    Kp1 = SPECIAL | 0x87,
    Kp2 = SPECIAL | 0x88,
    Kp3 = SPECIAL | 0x89,
    Kp4 = SPECIAL | 0x8A,
    Kp5 = SPECIAL | 0x8B,
    Kp6 = SPECIAL | 0x8C,
    Kp7 = SPECIAL | 0x8D,
    Kp8 = SPECIAL | 0x8E,
    Kp9 = SPECIAL | 0x8F,

    JisEisu = SPECIAL | 0xBC,
    JisKana = SPECIAL | 0xBD,

    Space = 0x20,
    Apostrophe = 0x27,
    Comma = 0x2C,
    Minus = 0x2D,
    Period = 0x2E,
    Slash = 0x2F,
    Key0 = 0x30,
    Key1 = 0x31,
    Key2 = 0x32,
    Key3 = 0x33,
    Key4 = 0x34,
    Key5 = 0x35,
    Key6 = 0x36,
    Key7 = 0x37,
    Key8 = 0x38,
    Key9 = 0x39,
    Semicolon = 0x3B,
    Equal = 0x3D,
    A = 0x41,
    B = 0x42,
    C = 0x43,
    D = 0x44,
    E = 0x45,
    F = 0x46,
    G = 0x47,
    H = 0x48,
    I = 0x49,
    J = 0x4A,
    K = 0x4B,
    L = 0x4C,
    M = 0x4D,
    N = 0x4E,
    O = 0x4F,
    P = 0x50,
    Q = 0x51,
    R = 0x52,
    S = 0x53,
    T = 0x54,
    U = 0x55,
    V = 0x56,
    W = 0x57,
    X = 0x58,
    Y = 0x59,
    Z = 0x5A,
    BracketLeft = 0x5B,
    Backslash = 0x5C,
    BracketRight = 0x5D,
    Underscore = 0x5F,
    QuoteLeft = 0x60,
    Yen = 0xA5,
    Section = 0xA7,
}

impl Key {
    /// ### English
    /// Numeric engine key code.
    ///
    /// ### 中文
    /// 引擎数值键码。
    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Whether this key is one of the four side-distinguished modifiers.
    pub fn is_modifier(self) -> bool {
        matches!(self, Key::Shift | Key::Ctrl | Key::Alt | Key::Meta)
    }
}

/// ### English
/// Which physical side a modifier key sits on.
/// Only the Ctrl/Shift/Alt/Meta keys report `Left`/`Right`; every other key is `Unspecified`.
///
/// ### 中文
/// 修饰键所在的物理侧。
/// 只有 Ctrl/Shift/Alt/Meta 会报告 `Left`/`Right`；其它按键均为 `Unspecified`。
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum KeyLocation {
    #[default]
    Unspecified = 0,
    Left = 1,
    Right = 2,
}

/// ### English
/// Mouse button index in the engine's button space (wheel directions are buttons too).
///
/// ### 中文
/// 引擎按键空间中的鼠标按键索引（滚轮方向也视为按键）。
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    None = 0,
    Left = 1,
    Right = 2,
    Middle = 3,
    WheelUp = 4,
    WheelDown = 5,
    WheelLeft = 6,
    WheelRight = 7,
}

impl MouseButton {
    /// Whether this index is one of the four synthesized wheel directions.
    pub fn is_wheel(self) -> bool {
        matches!(
            self,
            MouseButton::WheelUp
                | MouseButton::WheelDown
                | MouseButton::WheelLeft
                | MouseButton::WheelRight
        )
    }
}
