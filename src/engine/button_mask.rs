//! ### English
//! Snapshot of currently held mouse buttons.
//!
//! ### 中文
//! 当前按住的鼠标按键快照。

use bitflags::bitflags;

use super::host::PointerState;

bitflags! {
    /// ### English
    /// Set of held mouse buttons, in the engine's mask encoding.
    ///
    /// ### 中文
    /// 按住的鼠标按键集合（引擎掩码编码）。
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ButtonMask: u32 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const MIDDLE = 1 << 2;
    }
}

const HOST_LEFT: u32 = 1 << 0;
const HOST_RIGHT: u32 = 1 << 1;
const HOST_MIDDLE: u32 = 1 << 2;

impl ButtonMask {
    /// ### English
    /// Converts the host's pressed-buttons word into an engine mask.
    ///
    /// ### 中文
    /// 将宿主的按下按键字转换为引擎掩码。
    pub fn from_host_bits(pressed: u32) -> Self {
        let mut mask = ButtonMask::empty();
        mask.set(ButtonMask::LEFT, pressed & HOST_LEFT != 0);
        mask.set(ButtonMask::RIGHT, pressed & HOST_RIGHT != 0);
        mask.set(ButtonMask::MIDDLE, pressed & HOST_MIDDLE != 0);
        mask
    }
}

/// ### English
/// Reads the held-button set at the instant of the call.
/// Must be called per event: the event only says which button changed, the mask says what is down.
///
/// ### 中文
/// 读取调用瞬间按住的按键集合。
/// 每个事件都必须重新调用：事件只说明哪个键变化，掩码说明当前哪些键按下。
#[inline]
pub fn current_button_mask(pointer: &impl PointerState) -> ButtonMask {
    ButtonMask::from_host_bits(pointer.pressed_mouse_buttons())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct FakePointer(Cell<u32>);

    impl PointerState for FakePointer {
        fn pressed_mouse_buttons(&self) -> u32 {
            self.0.get()
        }
    }

    #[test]
    fn maps_each_host_bit() {
        assert_eq!(ButtonMask::from_host_bits(0b001), ButtonMask::LEFT);
        assert_eq!(ButtonMask::from_host_bits(0b010), ButtonMask::RIGHT);
        assert_eq!(ButtonMask::from_host_bits(0b100), ButtonMask::MIDDLE);
        assert_eq!(ButtonMask::from_host_bits(0b111), ButtonMask::all());
    }

    #[test]
    fn ignores_extra_buttons() {
        assert_eq!(ButtonMask::from_host_bits(0b1_1000), ButtonMask::empty());
    }

    #[test]
    fn reads_fresh_state_each_call() {
        let pointer = FakePointer(Cell::new(HOST_LEFT));
        assert_eq!(current_button_mask(&pointer), ButtonMask::LEFT);
        pointer.0.set(HOST_LEFT | HOST_MIDDLE);
        assert_eq!(current_button_mask(&pointer), ButtonMask::LEFT | ButtonMask::MIDDLE);
        pointer.0.set(0);
        assert!(current_button_mask(&pointer).is_empty());
    }
}
