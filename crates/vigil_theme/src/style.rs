//! Style requests and resolved style specs

use vigil_core::Color;

use crate::tokens::{
    Density, DensityDescriptor, InteractionDescriptor, InteractiveState, RadiusDescriptor,
    ShadowDescriptor, Size, Spacing,
};
use crate::variants::{Border, ComponentKind, Variant};

/// What a primitive asks the resolver for in one render pass
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleRequest {
    pub kind: ComponentKind,
    pub variant: Variant,
    pub size: Size,
    /// Overrides the theme density for this one surface
    pub density_override: Option<Density>,
    pub state: InteractiveState,
    /// Field with an icon at its leading edge
    pub leading_icon: bool,
}

impl StyleRequest {
    /// A medium-sized, enabled request
    pub fn new(kind: ComponentKind, variant: Variant) -> Self {
        Self {
            kind,
            variant,
            size: Size::Md,
            density_override: None,
            state: InteractiveState::default(),
            leading_icon: false,
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn density(mut self, density: Density) -> Self {
        self.density_override = Some(density);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.state.disabled = disabled;
        self
    }

    pub fn hoverable(mut self, hoverable: bool) -> Self {
        self.state.hoverable = hoverable;
        self
    }

    pub fn leading_icon(mut self, leading_icon: bool) -> Self {
        self.leading_icon = leading_icon;
        self
    }
}

/// Focus treatment of fields; always follows the primary color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusRing {
    pub class: &'static str,
    pub width: f32,
    pub ring: Color,
    pub border: Color,
}

/// Hover behaviour of lifting surfaces
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverLift {
    pub shadow: ShadowDescriptor,
    pub translate_class: &'static str,
    pub translate_y: f32,
    pub border_class: &'static str,
    pub border_tint: Color,
}

/// The fully resolved, render-ready style of one primitive instance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleSpec {
    pub kind: ComponentKind,
    pub variant: Variant,
    pub shape: RadiusDescriptor,
    pub spacing: DensityDescriptor,
    pub leading_inset: Option<Spacing>,
    pub background: Color,
    pub hover_background: Option<Color>,
    pub foreground: Color,
    pub border: Option<Border>,
    pub shadow: ShadowDescriptor,
    pub indicator: Option<Color>,
    pub focus: Option<FocusRing>,
    pub hover_lift: Option<HoverLift>,
    pub interaction: InteractionDescriptor,
}

impl StyleSpec {
    /// Structural classes in a stable order
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec![
            self.shape.class,
            self.spacing.padding_x.class,
            self.spacing.padding_y.class,
        ];
        if let Some(inset) = self.leading_inset {
            classes.push(inset.class);
        }
        classes.push(self.spacing.text.class);
        if let Some(border) = self.border {
            classes.push(border.class);
        }
        classes.push(self.shadow.class);
        if let Some(focus) = self.focus {
            classes.push(focus.class);
        }
        if let Some(lift) = self.hover_lift {
            classes.push(lift.shadow.class);
            classes.push(lift.translate_class);
            classes.push(lift.border_class);
        }
        classes.push(self.interaction.class);
        classes
    }

    /// Computed color/shadow attributes as CSS declarations
    pub fn inline_style(&self) -> String {
        let mut decls = vec![
            format!("background-color:{}", self.background.to_css()),
            format!("color:{}", self.foreground.to_css()),
        ];
        if let Some(border) = self.border {
            decls.push(format!("border-color:{}", border.color.to_css()));
        }
        if !self.shadow.is_none() {
            decls.push(format!("box-shadow:{}", self.shadow.shadow.to_css()));
        }
        if let Some(lift) = self.hover_lift {
            decls.push(format!("--hover-border:{}", lift.border_tint.to_css()));
        }
        if self.interaction.opacity < 1.0 {
            decls.push(format!("opacity:{}", self.interaction.opacity));
        }
        decls.join(";")
    }
}
