//! Button component
//!
//! ```ignore
//! cn::button(&theme, "Delete device")
//!     .variant(ButtonVariant::Danger)
//!     .size(ButtonSize::Sm)
//!     .on_click(|| remove_device())
//!     .build()?;
//! ```

use std::sync::Arc;

use vigil_theme::{ComponentKind, Result, Size, StyleRequest, StyleSpec, ThemeState, Variant};

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid fill in the theme's primary color
    #[default]
    Primary,
    /// White fill with a neutral border
    Secondary,
    /// Solid rose, for destructive actions
    Danger,
    /// No fill until hovered
    Ghost,
    /// Transparent with a neutral border
    Outline,
    /// Solid emerald, for confirmations
    Success,
}

impl From<ButtonVariant> for Variant {
    fn from(variant: ButtonVariant) -> Self {
        match variant {
            ButtonVariant::Primary => Variant::Primary,
            ButtonVariant::Secondary => Variant::Secondary,
            ButtonVariant::Danger => Variant::Danger,
            ButtonVariant::Ghost => Variant::Ghost,
            ButtonVariant::Outline => Variant::Outline,
            ButtonVariant::Success => Variant::Success,
        }
    }
}

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl From<ButtonSize> for Size {
    fn from(size: ButtonSize) -> Self {
        match size {
            ButtonSize::Sm => Size::Sm,
            ButtonSize::Md => Size::Md,
            ButtonSize::Lg => Size::Lg,
        }
    }
}

type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// Builder for a button
pub struct ButtonBuilder<'a> {
    theme: &'a ThemeState,
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_click: Option<ClickHandler>,
}

impl<'a> ButtonBuilder<'a> {
    pub fn new(theme: &'a ThemeState, label: impl Into<String>) -> Self {
        Self {
            theme,
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
        self
    }

    fn request(&self) -> StyleRequest {
        StyleRequest::new(ComponentKind::Button, self.variant.into())
            .size(self.size.into())
            .disabled(self.disabled)
            .hoverable(true)
    }

    /// Resolve the style for this render pass
    pub fn build(self) -> Result<Button> {
        let style = self.theme.resolve(&self.request())?;
        Ok(Button {
            label: self.label,
            variant: self.variant,
            disabled: self.disabled,
            on_click: self.on_click,
            style,
        })
    }
}

/// A button resolved for one render pass
pub struct Button {
    label: String,
    variant: ButtonVariant,
    disabled: bool,
    on_click: Option<ClickHandler>,
    style: StyleSpec,
}

impl Button {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn variant(&self) -> ButtonVariant {
        self.variant
    }

    pub fn style(&self) -> &StyleSpec {
        &self.style
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Deliver a click. Disabled buttons swallow it; returns whether the
    /// handler ran.
    pub fn click(&self) -> bool {
        if self.disabled {
            return false;
        }
        match &self.on_click {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

/// Create a button
pub fn button<'a>(theme: &'a ThemeState, label: impl Into<String>) -> ButtonBuilder<'a> {
    ButtonBuilder::new(theme, label)
}
