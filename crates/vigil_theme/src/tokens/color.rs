//! Color tokens for theming

use std::sync::OnceLock;

use vigil_core::Color;

token_enum! {
    /// The primary colors a user can pick for the console
    #[derive(Default)]
    pub enum PrimaryColor as "primary color" {
        #[default]
        Indigo => "indigo",
        Blue => "blue",
        Emerald => "emerald",
        Rose => "rose",
        Amber => "amber",
        Slate => "slate",
        Violet => "violet",
        Cyan => "cyan",
    }
}

/// Resolved values for one palette color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorToken {
    /// Solid fill (600)
    pub base: Color,
    /// Solid fill under the pointer (700)
    pub hover: Color,
    /// Text drawn on `base`
    pub text: Color,
    /// Elevation tint (500 at 30%)
    pub shadow: Color,
    /// Soft fill for pills and highlights (100)
    pub subtle: Color,
    /// Text drawn on `subtle` (700)
    pub subtle_text: Color,
    /// Saturated mid tone for dots and focus borders (500)
    pub accent: Color,
    /// Light border tint (200)
    pub tint: Color,
}

/// Tailwind shades 100, 200, 500, 600, 700
struct Swatch([u32; 5]);

const SWATCHES: [Swatch; 8] = [
    Swatch([0xE0E7FF, 0xC7D2FE, 0x6366F1, 0x4F46E5, 0x4338CA]), // indigo
    Swatch([0xDBEAFE, 0xBFDBFE, 0x3B82F6, 0x2563EB, 0x1D4ED8]), // blue
    Swatch([0xD1FAE5, 0xA7F3D0, 0x10B981, 0x059669, 0x047857]), // emerald
    Swatch([0xFFE4E6, 0xFECDD3, 0xF43F5E, 0xE11D48, 0xBE123C]), // rose
    Swatch([0xFEF3C7, 0xFDE68A, 0xF59E0B, 0xD97706, 0xB45309]), // amber
    Swatch([0xF1F5F9, 0xE2E8F0, 0x64748B, 0x475569, 0x334155]), // slate
    Swatch([0xEDE9FE, 0xDDD6FE, 0x8B5CF6, 0x7C3AED, 0x6D28D9]), // violet
    Swatch([0xCFFAFE, 0xA5F3FC, 0x06B6D4, 0x0891B2, 0x0E7490]), // cyan
];

/// Alpha applied to the 500 shade for colored elevation
pub const SHADOW_TINT_ALPHA: f32 = 0.3;

impl Swatch {
    fn token(&self) -> ColorToken {
        let [s100, s200, s500, s600, s700] = self.0;
        ColorToken {
            base: Color::from_hex(s600),
            hover: Color::from_hex(s700),
            text: Color::WHITE,
            shadow: Color::from_hex(s500).with_alpha(SHADOW_TINT_ALPHA),
            subtle: Color::from_hex(s100),
            subtle_text: Color::from_hex(s700),
            accent: Color::from_hex(s500),
            tint: Color::from_hex(s200),
        }
    }
}

static PALETTE: OnceLock<[ColorToken; 8]> = OnceLock::new();

fn palette() -> &'static [ColorToken; 8] {
    PALETTE.get_or_init(|| std::array::from_fn(|i| SWATCHES[i].token()))
}

/// Look up the token for a palette color
pub fn resolve_color(color: PrimaryColor) -> ColorToken {
    palette()[color.index()]
}

/// Hover border class in the 200 shade, one per palette color
const HOVER_BORDER_CLASSES: [&str; 8] = [
    "hover:border-indigo-200",
    "hover:border-blue-200",
    "hover:border-emerald-200",
    "hover:border-rose-200",
    "hover:border-amber-200",
    "hover:border-slate-200",
    "hover:border-violet-200",
    "hover:border-cyan-200",
];

impl PrimaryColor {
    pub fn token(self) -> ColorToken {
        resolve_color(self)
    }

    /// Static class that paints a border in this color's `tint` on hover
    pub fn hover_border_class(self) -> &'static str {
        HOVER_BORDER_CLASSES[self.index()]
    }
}

/// Neutral surface colors shared by every theme
pub mod neutral {
    use vigil_core::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const SLATE_50: Color = Color::rgb(248.0 / 255.0, 250.0 / 255.0, 252.0 / 255.0);
    pub const SLATE_100: Color = Color::rgb(241.0 / 255.0, 245.0 / 255.0, 249.0 / 255.0);
    pub const SLATE_200: Color = Color::rgb(226.0 / 255.0, 232.0 / 255.0, 240.0 / 255.0);
    pub const SLATE_300: Color = Color::rgb(203.0 / 255.0, 213.0 / 255.0, 225.0 / 255.0);
    pub const SLATE_600: Color = Color::rgb(71.0 / 255.0, 85.0 / 255.0, 105.0 / 255.0);
    pub const SLATE_700: Color = Color::rgb(51.0 / 255.0, 65.0 / 255.0, 85.0 / 255.0);
    pub const SLATE_900: Color = Color::rgb(15.0 / 255.0, 23.0 / 255.0, 42.0 / 255.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_color_resolves_to_a_distinct_base() {
        let bases: Vec<String> = PrimaryColor::all()
            .iter()
            .map(|c| resolve_color(*c).base.to_css())
            .collect();
        let mut unique = bases.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), PrimaryColor::ALL.len());
    }

    #[test]
    fn test_emerald_token_values() {
        let emerald = resolve_color(PrimaryColor::Emerald);
        assert_eq!(emerald.base.to_css(), "#059669");
        assert_eq!(emerald.hover.to_css(), "#047857");
        assert_eq!(emerald.text, Color::WHITE);
        assert_eq!(emerald.shadow.a, SHADOW_TINT_ALPHA);
        assert_eq!(emerald.shadow.with_alpha(1.0), emerald.accent);
    }

    #[test]
    fn test_ids_parse_back() {
        for color in PrimaryColor::all() {
            assert_eq!(color.id().parse::<PrimaryColor>().unwrap(), *color);
        }
        assert_eq!(" Rose ".parse::<PrimaryColor>().unwrap(), PrimaryColor::Rose);
        assert!("magenta".parse::<PrimaryColor>().is_err());
    }

    #[test]
    fn test_hover_border_class_names_the_color() {
        for color in PrimaryColor::all() {
            let class = color.hover_border_class();
            assert_eq!(class, format!("hover:border-{}-200", color.id()));
        }
    }

    #[test]
    fn test_slate_neutrals_match_slate_swatch() {
        let slate = resolve_color(PrimaryColor::Slate);
        assert_eq!(slate.subtle, neutral::SLATE_100);
        assert_eq!(slate.tint, neutral::SLATE_200);
        assert_eq!(slate.base, neutral::SLATE_600);
    }
}
