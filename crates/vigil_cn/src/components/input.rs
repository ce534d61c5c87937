//! Text input component

use vigil_theme::{ComponentKind, Result, Size, StyleRequest, StyleSpec, ThemeState, Variant};

/// Input size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl From<InputSize> for Size {
    fn from(size: InputSize) -> Self {
        match size {
            InputSize::Sm => Size::Sm,
            InputSize::Md => Size::Md,
            InputSize::Lg => Size::Lg,
        }
    }
}

/// Builder for a text input
pub struct InputBuilder<'a> {
    theme: &'a ThemeState,
    placeholder: Option<String>,
    value: String,
    size: InputSize,
    leading_icon: bool,
    disabled: bool,
}

impl<'a> InputBuilder<'a> {
    pub fn new(theme: &'a ThemeState) -> Self {
        Self {
            theme,
            placeholder: None,
            value: String::new(),
            size: InputSize::default(),
            leading_icon: false,
            disabled: false,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    /// Reserve room for an icon at the leading edge
    pub fn leading_icon(mut self, leading_icon: bool) -> Self {
        self.leading_icon = leading_icon;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn build(self) -> Result<Input> {
        let request = StyleRequest::new(ComponentKind::Input, Variant::Default)
            .size(self.size.into())
            .leading_icon(self.leading_icon)
            .disabled(self.disabled);
        let style = self.theme.resolve(&request)?;
        Ok(Input {
            placeholder: self.placeholder,
            value: self.value,
            disabled: self.disabled,
            style,
        })
    }
}

/// A text input resolved for one render pass
#[derive(Clone, Debug)]
pub struct Input {
    placeholder: Option<String>,
    value: String,
    disabled: bool,
    style: StyleSpec,
}

impl Input {
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the current text. Returns false when the input is disabled.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        if self.disabled {
            return false;
        }
        self.value = value.into();
        true
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn style(&self) -> &StyleSpec {
        &self.style
    }
}

/// Create a text input
pub fn input(theme: &ThemeState) -> InputBuilder<'_> {
    InputBuilder::new(theme)
}
