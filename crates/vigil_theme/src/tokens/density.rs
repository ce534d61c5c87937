//! Density tokens: padding and type scale per size

use super::Size;

token_enum! {
    /// Global spacing density
    #[derive(Default)]
    pub enum Density as "density" {
        Compact => "compact",
        #[default]
        Normal => "normal",
    }
}

/// One padding step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    pub class: &'static str,
    pub px: f32,
}

impl Spacing {
    pub const fn new(class: &'static str, px: f32) -> Self {
        Self { class, px }
    }
}

/// One step of the type scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypeScale {
    pub class: &'static str,
    pub font_size: f32,
    pub line_height: f32,
}

impl TypeScale {
    const fn new(class: &'static str, font_size: f32, line_height: f32) -> Self {
        Self {
            class,
            font_size,
            line_height,
        }
    }
}

const TEXT_XS: TypeScale = TypeScale::new("text-xs", 12.0, 16.0);
const TEXT_SM: TypeScale = TypeScale::new("text-sm", 14.0, 20.0);
const TEXT_BASE: TypeScale = TypeScale::new("text-base", 16.0, 24.0);

/// Padding and typography for one (density, size) pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityDescriptor {
    pub padding_x: Spacing,
    pub padding_y: Spacing,
    pub text: TypeScale,
}

impl DensityDescriptor {
    const fn new(px: Spacing, py: Spacing, text: TypeScale) -> Self {
        Self {
            padding_x: px,
            padding_y: py,
            text,
        }
    }
}

/// Density x size (sm, md, lg)
const DENSITY_TABLE: [[DensityDescriptor; 3]; 2] = [
    // compact
    [
        DensityDescriptor::new(Spacing::new("px-2", 8.0), Spacing::new("py-1", 4.0), TEXT_XS),
        DensityDescriptor::new(Spacing::new("px-3", 12.0), Spacing::new("py-1.5", 6.0), TEXT_SM),
        DensityDescriptor::new(Spacing::new("px-4", 16.0), Spacing::new("py-2", 8.0), TEXT_BASE),
    ],
    // normal
    [
        DensityDescriptor::new(Spacing::new("px-3", 12.0), Spacing::new("py-1.5", 6.0), TEXT_SM),
        DensityDescriptor::new(Spacing::new("px-4", 16.0), Spacing::new("py-2", 8.0), TEXT_SM),
        DensityDescriptor::new(Spacing::new("px-6", 24.0), Spacing::new("py-3", 12.0), TEXT_BASE),
    ],
];

/// Panel padding (cards, modal bodies): one step per density
const PANEL_TABLE: [DensityDescriptor; 2] = [
    DensityDescriptor::new(Spacing::new("px-4", 16.0), Spacing::new("py-4", 16.0), TEXT_SM),
    DensityDescriptor::new(Spacing::new("px-6", 24.0), Spacing::new("py-6", 24.0), TEXT_SM),
];

/// Form fields (inputs, selects): density changes vertical padding only
const FIELD_TABLE: [[DensityDescriptor; 3]; 2] = [
    // compact
    [
        DensityDescriptor::new(Spacing::new("px-3", 12.0), Spacing::new("py-1", 4.0), TEXT_SM),
        DensityDescriptor::new(Spacing::new("px-3", 12.0), Spacing::new("py-1.5", 6.0), TEXT_SM),
        DensityDescriptor::new(Spacing::new("px-4", 16.0), Spacing::new("py-2", 8.0), TEXT_BASE),
    ],
    // normal
    [
        DensityDescriptor::new(Spacing::new("px-3", 12.0), Spacing::new("py-1.5", 6.0), TEXT_SM),
        DensityDescriptor::new(Spacing::new("px-3", 12.0), Spacing::new("py-2", 8.0), TEXT_SM),
        DensityDescriptor::new(Spacing::new("px-4", 16.0), Spacing::new("py-3", 12.0), TEXT_BASE),
    ],
];

/// Look up padding and type scale for a control of `size`
pub fn resolve_density(density: Density, size: Size) -> DensityDescriptor {
    DENSITY_TABLE[density.index()][size.index()]
}

/// Look up padding and type scale for a form field of `size`
pub fn resolve_field_density(density: Density, size: Size) -> DensityDescriptor {
    FIELD_TABLE[density.index()][size.index()]
}

/// Look up the inner padding of a panel surface
pub fn resolve_panel_density(density: Density) -> DensityDescriptor {
    PANEL_TABLE[density.index()]
}

/// Horizontal inset that clears a leading icon inside a field
pub const LEADING_ICON_INSET: Spacing = Spacing::new("pl-10", 40.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_is_never_roomier_than_normal() {
        for size in Size::all() {
            let compact = resolve_density(Density::Compact, *size);
            let normal = resolve_density(Density::Normal, *size);
            assert!(compact.padding_x.px <= normal.padding_x.px);
            assert!(compact.padding_y.px <= normal.padding_y.px);
        }
        assert!(
            resolve_panel_density(Density::Compact).padding_y.px
                < resolve_panel_density(Density::Normal).padding_y.px
        );
    }

    #[test]
    fn test_compact_md_values() {
        let d = resolve_density(Density::Compact, Size::Md);
        assert_eq!(d.padding_x.class, "px-3");
        assert_eq!(d.padding_y.class, "py-1.5");
        assert_eq!(d.text.class, "text-sm");
    }

    #[test]
    fn test_field_density_moves_vertical_padding_only() {
        for size in Size::all() {
            let compact = resolve_field_density(Density::Compact, *size);
            let normal = resolve_field_density(Density::Normal, *size);
            assert_eq!(compact.padding_x, normal.padding_x, "{size}");
            assert_eq!(compact.text, normal.text, "{size}");
            assert!(compact.padding_y.px < normal.padding_y.px, "{size}");
        }
    }
}
