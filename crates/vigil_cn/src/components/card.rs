//! Card component
//!
//! A bordered surface whose elevation follows the theme's shadow mode.
//! Hoverable cards lift and pick up a primary-tinted border under the pointer.

use vigil_theme::{ComponentKind, Result, StyleRequest, StyleSpec, ThemeState, Variant};

/// Builder for a card
pub struct CardBuilder<'a> {
    theme: &'a ThemeState,
    title: Option<String>,
    description: Option<String>,
    hoverable: bool,
}

impl<'a> CardBuilder<'a> {
    pub fn new(theme: &'a ThemeState) -> Self {
        Self {
            theme,
            title: None,
            description: None,
            hoverable: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Lift on hover
    pub fn hoverable(mut self, hoverable: bool) -> Self {
        self.hoverable = hoverable;
        self
    }

    pub fn build(self) -> Result<Card> {
        let request =
            StyleRequest::new(ComponentKind::Card, Variant::Default).hoverable(self.hoverable);
        let style = self.theme.resolve(&request)?;
        Ok(Card {
            title: self.title,
            description: self.description,
            style,
        })
    }
}

/// A card resolved for one render pass
#[derive(Clone, Debug)]
pub struct Card {
    title: Option<String>,
    description: Option<String>,
    style: StyleSpec,
}

impl Card {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn style(&self) -> &StyleSpec {
        &self.style
    }
}

/// Create a card
pub fn card(theme: &ThemeState) -> CardBuilder<'_> {
    CardBuilder::new(theme)
}
