//! Interaction tokens: how disabled and hover-capable states read

/// Opacity applied to disabled controls
pub const DISABLED_OPACITY: f32 = 0.5;

/// Per-render interaction flags of a primitive
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InteractiveState {
    pub disabled: bool,
    pub hoverable: bool,
}

/// Pointer cursor shown over a surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
    NotAllowed,
}

/// Opacity and pointer behaviour of a surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionDescriptor {
    pub class: &'static str,
    pub opacity: f32,
    pub cursor: Cursor,
    pub pointer_events: bool,
}

const DISABLED: InteractionDescriptor = InteractionDescriptor {
    class: "opacity-50 cursor-not-allowed pointer-events-none",
    opacity: DISABLED_OPACITY,
    cursor: Cursor::NotAllowed,
    pointer_events: false,
};

const HOVERABLE: InteractionDescriptor = InteractionDescriptor {
    class: "cursor-pointer",
    opacity: 1.0,
    cursor: Cursor::Pointer,
    pointer_events: true,
};

const STATIC: InteractionDescriptor = InteractionDescriptor {
    class: "cursor-default",
    opacity: 1.0,
    cursor: Cursor::Default,
    pointer_events: true,
};

/// Disabled wins over hover-capable
pub fn resolve_interaction(state: InteractiveState) -> InteractionDescriptor {
    if state.disabled {
        DISABLED
    } else if state.hoverable {
        HOVERABLE
    } else {
        STATIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_suppresses_pointer() {
        let d = resolve_interaction(InteractiveState {
            disabled: true,
            hoverable: true,
        });
        assert_eq!(d.opacity, DISABLED_OPACITY);
        assert!(!d.pointer_events);
        assert_eq!(d.cursor, Cursor::NotAllowed);
    }

    #[test]
    fn test_hoverable_gets_pointer_cursor() {
        let d = resolve_interaction(InteractiveState {
            disabled: false,
            hoverable: true,
        });
        assert_eq!(d.cursor, Cursor::Pointer);
        assert_eq!(d.opacity, 1.0);
        assert_eq!(resolve_interaction(InteractiveState::default()).cursor, Cursor::Default);
    }
}
