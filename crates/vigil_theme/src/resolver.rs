//! Style resolver
//!
//! `resolve` is a pure function of (theme settings, request): no I/O, no
//! clock, no caching. Identical inputs give identical specs.

use crate::error::Result;
use crate::state::ThemeSettings;
use crate::style::{FocusRing, HoverLift, StyleRequest, StyleSpec};
use crate::tokens::{
    resolve_color, resolve_density, resolve_field_density, resolve_interaction, resolve_panel_density,
    resolve_radius, resolve_raised_shadow, resolve_shadow, ShadowDescriptor, ShadowMode, Size,
    LEADING_ICON_INSET, OVERLAY_SHADOW,
};
use crate::variants::{
    variant_style, Border, ComponentKind, BORDER_SLATE_100, BORDER_SLATE_200, BORDER_SLATE_300,
};

const FOCUS_RING_ALPHA: f32 = 0.2;

/// Resolve one request against one theme snapshot
pub fn resolve(theme: &ThemeSettings, request: &StyleRequest) -> Result<StyleSpec> {
    let kind = request.kind;
    let variant = variant_style(kind, request.variant, theme.primary_color)?;

    let bucket = kind.size_bucket(request.size);
    let shape = resolve_radius(theme.border_radius, bucket);

    let density = request.density_override.unwrap_or(theme.density);
    let spacing = match kind {
        ComponentKind::Card | ComponentKind::Modal => resolve_panel_density(density),
        ComponentKind::Badge => resolve_density(density, Size::Sm),
        ComponentKind::Input | ComponentKind::Select => resolve_field_density(density, request.size),
        _ => resolve_density(density, request.size),
    };

    let shadow = if kind.has_elevation() {
        let tint = variant
            .uses_primary_color
            .then(|| resolve_color(theme.primary_color));
        resolve_shadow(theme.shadow_mode, tint.as_ref())
    } else if kind == ComponentKind::Modal {
        OVERLAY_SHADOW
    } else {
        ShadowDescriptor::none()
    };

    let border = match kind {
        ComponentKind::Card => Some(card_border(theme.shadow_mode)),
        _ => variant.border,
    };

    let focus = matches!(kind, ComponentKind::Input | ComponentKind::Select).then(|| {
        let primary = resolve_color(theme.primary_color);
        FocusRing {
            class: "focus:outline-none focus:ring-2",
            width: 2.0,
            ring: primary.accent.with_alpha(FOCUS_RING_ALPHA),
            border: primary.accent,
        }
    });

    let hover_lift = (kind == ComponentKind::Card && request.state.hoverable).then(|| HoverLift {
        shadow: resolve_raised_shadow(theme.shadow_mode),
        translate_class: "hover:-translate-y-0.5",
        translate_y: -2.0,
        border_class: theme.primary_color.hover_border_class(),
        border_tint: resolve_color(theme.primary_color).tint,
    });

    let leading_inset = (request.leading_icon
        && matches!(kind, ComponentKind::Input | ComponentKind::Select))
    .then_some(LEADING_ICON_INSET);

    let spec = StyleSpec {
        kind,
        variant: request.variant,
        shape,
        spacing,
        leading_inset,
        background: variant.background,
        hover_background: variant.hover_background,
        foreground: variant.foreground,
        border,
        shadow,
        indicator: variant.indicator,
        focus,
        hover_lift,
        interaction: resolve_interaction(request.state),
    };

    tracing::trace!(
        kind = %kind,
        variant = %request.variant,
        size = %request.size,
        shape = spec.shape.class,
        shadow = spec.shadow.class,
        "resolved style"
    );

    Ok(spec)
}

/// Cards always draw a border; its weight follows the elevation mode
fn card_border(mode: ShadowMode) -> Border {
    match mode {
        ShadowMode::None => BORDER_SLATE_200,
        ShadowMode::Soft => BORDER_SLATE_100,
        ShadowMode::Hard => BORDER_SLATE_300,
    }
}
