//! Badge component for short status labels

use vigil_core::Color;
use vigil_theme::{ComponentKind, Result, Size, StyleRequest, StyleSpec, ThemeState, Variant};

/// Badge visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Warning,
    Danger,
    #[default]
    Neutral,
    /// Follows the theme's primary color
    Primary,
}

impl From<BadgeVariant> for Variant {
    fn from(variant: BadgeVariant) -> Self {
        match variant {
            BadgeVariant::Success => Variant::Success,
            BadgeVariant::Warning => Variant::Warning,
            BadgeVariant::Danger => Variant::Danger,
            BadgeVariant::Neutral => Variant::Neutral,
            BadgeVariant::Primary => Variant::Primary,
        }
    }
}

/// Builder for a badge
pub struct BadgeBuilder<'a> {
    theme: &'a ThemeState,
    label: String,
    variant: BadgeVariant,
    dot: bool,
}

impl<'a> BadgeBuilder<'a> {
    pub fn new(theme: &'a ThemeState, label: impl Into<String>) -> Self {
        Self {
            theme,
            label: label.into(),
            variant: BadgeVariant::default(),
            dot: false,
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Show a leading indicator dot
    pub fn dot(mut self, dot: bool) -> Self {
        self.dot = dot;
        self
    }

    pub fn build(self) -> Result<Badge> {
        // Badges have a single, fixed size
        let request = StyleRequest::new(ComponentKind::Badge, self.variant.into()).size(Size::Sm);
        let style = self.theme.resolve(&request)?;
        Ok(Badge {
            label: self.label,
            variant: self.variant,
            dot: self.dot,
            style,
        })
    }
}

/// A badge resolved for one render pass
#[derive(Clone, Debug)]
pub struct Badge {
    label: String,
    variant: BadgeVariant,
    dot: bool,
    style: StyleSpec,
}

impl Badge {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn variant(&self) -> BadgeVariant {
        self.variant
    }

    pub fn style(&self) -> &StyleSpec {
        &self.style
    }

    /// Color of the leading dot, when shown
    pub fn dot_color(&self) -> Option<Color> {
        if self.dot {
            self.style.indicator
        } else {
            None
        }
    }
}

/// Create a badge
pub fn badge<'a>(theme: &'a ThemeState, label: impl Into<String>) -> BadgeBuilder<'a> {
    BadgeBuilder::new(theme, label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_theme::{PrimaryColor, RadiusLevel};

    #[test]
    fn test_dot_matches_variant_accent() {
        let theme = ThemeState::default();
        let b = badge(&theme, "Warn")
            .variant(BadgeVariant::Warning)
            .dot(true)
            .build()
            .unwrap();
        assert_eq!(b.dot_color(), Some(PrimaryColor::Amber.token().accent));

        let plain = badge(&theme, "Warn").variant(BadgeVariant::Warning).build().unwrap();
        assert_eq!(plain.dot_color(), None);
    }

    #[test]
    fn test_badge_uses_small_bucket() {
        let theme = ThemeState::default();
        theme.set_border_radius(RadiusLevel::Lg);
        let b = badge(&theme, "Online").variant(BadgeVariant::Success).build().unwrap();
        assert_eq!(b.style().shape.class, "rounded-md");
        assert_eq!(b.style().spacing.text.class, "text-sm");
    }

    #[test]
    fn test_primary_badge_follows_theme() {
        let theme = ThemeState::default();
        theme.set_primary_color(PrimaryColor::Violet);
        let b = badge(&theme, "New").variant(BadgeVariant::Primary).build().unwrap();
        assert_eq!(b.style().background, PrimaryColor::Violet.token().subtle);
    }
}
