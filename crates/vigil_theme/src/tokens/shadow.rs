//! Shadow tokens for theming

use vigil_core::{Color, Shadow};

use super::ColorToken;

token_enum! {
    /// Global elevation style
    #[derive(Default)]
    pub enum ShadowMode as "shadow mode" {
        None => "none",
        #[default]
        Soft => "soft",
        Hard => "hard",
    }
}

/// A resolved elevation: static class plus the concrete shadow value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowDescriptor {
    pub class: &'static str,
    pub shadow: Shadow,
}

impl ShadowDescriptor {
    pub const fn new(class: &'static str, shadow: Shadow) -> Self {
        Self { class, shadow }
    }

    pub const fn none() -> Self {
        Self::new("shadow-none", Shadow::none())
    }

    /// True when nothing is painted
    pub fn is_none(&self) -> bool {
        self.shadow.is_none()
    }
}

impl Default for ShadowDescriptor {
    fn default() -> Self {
        Self::none()
    }
}

const NEUTRAL_SOFT: ShadowDescriptor = ShadowDescriptor::new(
    "shadow-sm",
    Shadow::new(0.0, 1.0, 2.0, 0.0, Color::rgba(0.0, 0.0, 0.0, 0.05)),
);

const NEUTRAL_HARD: ShadowDescriptor = ShadowDescriptor::new(
    "shadow-md",
    Shadow::new(0.0, 4.0, 6.0, -1.0, Color::rgba(0.0, 0.0, 0.0, 0.1)),
);

const NEUTRAL_RAISED: ShadowDescriptor = ShadowDescriptor::new(
    "hover:shadow-lg",
    Shadow::new(0.0, 10.0, 15.0, -3.0, Color::rgba(0.0, 0.0, 0.0, 0.1)),
);

/// Fixed elevation of overlay panels; not theme-dependent
pub const OVERLAY_SHADOW: ShadowDescriptor = ShadowDescriptor::new(
    "shadow-2xl",
    Shadow::new(0.0, 25.0, 50.0, -12.0, Color::rgba(0.0, 0.0, 0.0, 0.25)),
);

/// Resolve the elevation for a shadow mode.
///
/// `color` is only consulted in soft mode, where it turns the soft shadow
/// into a larger colored one. Hard mode is always the same neutral shadow.
pub fn resolve_shadow(mode: ShadowMode, color: Option<&ColorToken>) -> ShadowDescriptor {
    match (mode, color) {
        (ShadowMode::None, _) => ShadowDescriptor::none(),
        (ShadowMode::Soft, Some(token)) => {
            ShadowDescriptor::new("shadow-lg", Shadow::new(0.0, 10.0, 15.0, -3.0, token.shadow))
        }
        (ShadowMode::Soft, None) => NEUTRAL_SOFT,
        (ShadowMode::Hard, _) => NEUTRAL_HARD,
    }
}

/// Elevation a hover-lifting surface rises to under the pointer
pub fn resolve_raised_shadow(mode: ShadowMode) -> ShadowDescriptor {
    match mode {
        ShadowMode::None => ShadowDescriptor::new("hover:shadow-md", NEUTRAL_HARD.shadow),
        ShadowMode::Soft | ShadowMode::Hard => NEUTRAL_RAISED,
    }
}
