//! UI events delivered to interactive primitives

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);

    // Unknown/unmapped key
    pub const UNKNOWN: KeyCode = KeyCode(0);
}

/// Which layer of an overlay a pointer landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// The dimmed area behind an overlay panel
    Backdrop,
    /// The overlay panel itself (or anything inside it)
    Content,
}

/// A UI event routed to a primitive
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    KeyDown(KeyCode),
    PointerDown { target: HitTarget },
    /// The primitive is being removed from the tree
    Unmount,
}

impl UiEvent {
    /// True for a key-down of `key`
    pub fn is_key(&self, key: KeyCode) -> bool {
        matches!(self, UiEvent::KeyDown(k) if *k == key)
    }
}
