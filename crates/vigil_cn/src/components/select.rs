//! Select component

use vigil_theme::{ComponentKind, Result, Size, StyleRequest, StyleSpec, ThemeState, Variant};

/// One choice in a select
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Builder for a select
pub struct SelectBuilder<'a> {
    theme: &'a ThemeState,
    options: Vec<SelectOption>,
    selected: Option<String>,
    placeholder: Option<String>,
    size: Size,
    disabled: bool,
}

impl<'a> SelectBuilder<'a> {
    pub fn new(theme: &'a ThemeState, options: Vec<SelectOption>) -> Self {
        Self {
            theme,
            options,
            selected: None,
            placeholder: None,
            size: Size::Md,
            disabled: false,
        }
    }

    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn build(self) -> Result<Select> {
        let request = StyleRequest::new(ComponentKind::Select, Variant::Default)
            .size(self.size)
            .disabled(self.disabled);
        let style = self.theme.resolve(&request)?;

        let mut select = Select {
            options: self.options,
            selected: None,
            placeholder: self.placeholder,
            disabled: self.disabled,
            style,
        };
        if let Some(value) = self.selected {
            // Initial selection ignores the disabled flag but must name a known option
            if select.options.iter().any(|o| o.value == value) {
                select.selected = Some(value);
            } else {
                tracing::debug!(value = %value, "initial selection is not an option; ignored");
            }
        }
        Ok(select)
    }
}

/// A select resolved for one render pass
#[derive(Clone, Debug)]
pub struct Select {
    options: Vec<SelectOption>,
    selected: Option<String>,
    placeholder: Option<String>,
    disabled: bool,
    style: StyleSpec,
}

impl Select {
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        let value = self.selected.as_deref()?;
        self.options.iter().find(|o| o.value == value)
    }

    /// Text shown in the closed control
    pub fn display_label(&self) -> Option<&str> {
        self.selected()
            .map(|o| o.label.as_str())
            .or(self.placeholder.as_deref())
    }

    /// Select an option by value. Returns false for unknown values or a
    /// disabled control.
    pub fn select_value(&mut self, value: &str) -> bool {
        if self.disabled || !self.options.iter().any(|o| o.value == value) {
            return false;
        }
        self.selected = Some(value.to_string());
        true
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn style(&self) -> &StyleSpec {
        &self.style
    }
}

/// Create a select over `options`
pub fn select(theme: &ThemeState, options: Vec<SelectOption>) -> SelectBuilder<'_> {
    SelectBuilder::new(theme, options)
}
