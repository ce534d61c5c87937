//! Per-kind variant tables
//!
//! Each primitive kind declares a closed set of variants. A (kind, variant)
//! pair missing from [`variant_style`] is a hard [`StyleError::InvalidVariant`]
//! rather than an unstyled surface.

use vigil_core::Color;

use crate::error::{Result, StyleError};
use crate::tokens::{neutral, resolve_color, ColorToken, PrimaryColor, Size, SizeBucket};

token_enum! {
    /// Primitive kinds that resolve styles
    pub enum ComponentKind as "component kind" {
        Button => "button",
        Badge => "badge",
        Card => "card",
        Input => "input",
        Select => "select",
        Modal => "modal",
    }
}

token_enum! {
    /// Named visual treatments across all kinds
    pub enum Variant as "variant" {
        /// The single treatment of kinds without color variants
        Default => "default",
        Primary => "primary",
        Secondary => "secondary",
        Danger => "danger",
        Ghost => "ghost",
        Outline => "outline",
        Success => "success",
        Warning => "warning",
        Neutral => "neutral",
    }
}

impl ComponentKind {
    /// Variants this kind declares
    pub fn variants(self) -> &'static [Variant] {
        match self {
            ComponentKind::Button => &[
                Variant::Primary,
                Variant::Secondary,
                Variant::Danger,
                Variant::Ghost,
                Variant::Outline,
                Variant::Success,
            ],
            ComponentKind::Badge => &[
                Variant::Success,
                Variant::Warning,
                Variant::Danger,
                Variant::Neutral,
                Variant::Primary,
            ],
            ComponentKind::Card
            | ComponentKind::Input
            | ComponentKind::Select
            | ComponentKind::Modal => &[Variant::Default],
        }
    }

    /// Whether `variant` is declared for this kind
    pub fn declares(self, variant: Variant) -> bool {
        self.variants().contains(&variant)
    }

    /// Whether this kind follows the global shadow mode
    pub fn has_elevation(self) -> bool {
        matches!(self, ComponentKind::Button | ComponentKind::Card)
    }

    /// Map a requested size onto the shared radius bucket
    pub fn size_bucket(self, size: Size) -> SizeBucket {
        match self {
            ComponentKind::Button | ComponentKind::Input | ComponentKind::Select => size,
            ComponentKind::Badge => Size::Sm,
            ComponentKind::Card | ComponentKind::Modal => Size::Lg,
        }
    }
}

/// A border line
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub class: &'static str,
    pub width: f32,
    pub color: Color,
}

impl Border {
    pub const fn new(class: &'static str, width: f32, color: Color) -> Self {
        Self {
            class,
            width,
            color,
        }
    }
}

pub(crate) const BORDER_SLATE_100: Border = Border::new("border border-slate-100", 1.0, neutral::SLATE_100);
pub(crate) const BORDER_SLATE_200: Border = Border::new("border border-slate-200", 1.0, neutral::SLATE_200);
pub(crate) const BORDER_SLATE_300: Border = Border::new("border border-slate-300", 1.0, neutral::SLATE_300);

/// Colors a (kind, variant) pair paints with
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantStyle {
    pub background: Color,
    pub hover_background: Option<Color>,
    pub foreground: Color,
    pub border: Option<Border>,
    /// Leading dot color (badges)
    pub indicator: Option<Color>,
    /// Whether the colors follow the theme's primary color
    pub uses_primary_color: bool,
}

impl VariantStyle {
    fn solid(token: ColorToken, uses_primary_color: bool) -> Self {
        Self {
            background: token.base,
            hover_background: Some(token.hover),
            foreground: token.text,
            border: None,
            indicator: None,
            uses_primary_color,
        }
    }

    fn pill(token: ColorToken, uses_primary_color: bool) -> Self {
        Self {
            background: token.subtle,
            hover_background: None,
            foreground: token.subtle_text,
            border: None,
            indicator: Some(token.accent),
            uses_primary_color,
        }
    }

    const fn neutral(
        background: Color,
        hover_background: Option<Color>,
        foreground: Color,
        border: Option<Border>,
    ) -> Self {
        Self {
            background,
            hover_background,
            foreground,
            border,
            indicator: None,
            uses_primary_color: false,
        }
    }
}

/// Look up the colors for a (kind, variant) pair under `primary`
pub fn variant_style(kind: ComponentKind, variant: Variant, primary: PrimaryColor) -> Result<VariantStyle> {
    use ComponentKind as K;
    use Variant as V;

    let style = match (kind, variant) {
        (K::Button, V::Primary) => VariantStyle::solid(resolve_color(primary), true),
        (K::Button, V::Secondary) => VariantStyle::neutral(
            neutral::WHITE,
            Some(neutral::SLATE_50),
            neutral::SLATE_700,
            Some(BORDER_SLATE_200),
        ),
        (K::Button, V::Danger) => VariantStyle::solid(resolve_color(PrimaryColor::Rose), false),
        (K::Button, V::Ghost) => VariantStyle::neutral(
            Color::TRANSPARENT,
            Some(neutral::SLATE_100),
            neutral::SLATE_600,
            None,
        ),
        (K::Button, V::Outline) => VariantStyle::neutral(
            Color::TRANSPARENT,
            Some(neutral::SLATE_50),
            neutral::SLATE_700,
            Some(BORDER_SLATE_300),
        ),
        (K::Button, V::Success) => VariantStyle::solid(resolve_color(PrimaryColor::Emerald), false),

        (K::Badge, V::Primary) => VariantStyle::pill(resolve_color(primary), true),
        (K::Badge, V::Success) => VariantStyle::pill(resolve_color(PrimaryColor::Emerald), false),
        (K::Badge, V::Warning) => VariantStyle::pill(resolve_color(PrimaryColor::Amber), false),
        (K::Badge, V::Danger) => VariantStyle::pill(resolve_color(PrimaryColor::Rose), false),
        (K::Badge, V::Neutral) => VariantStyle::pill(resolve_color(PrimaryColor::Slate), false),

        (K::Card, V::Default) | (K::Modal, V::Default) => {
            VariantStyle::neutral(neutral::WHITE, None, neutral::SLATE_900, None)
        }
        (K::Input, V::Default) | (K::Select, V::Default) => VariantStyle::neutral(
            neutral::WHITE,
            None,
            neutral::SLATE_900,
            Some(BORDER_SLATE_300),
        ),

        _ => return Err(StyleError::InvalidVariant { kind, variant }),
    };
    Ok(style)
}
