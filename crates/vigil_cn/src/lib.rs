//! Vigil Component Library
//!
//! Themed UI primitives for the Vigil console. Every primitive is built
//! against an explicit [`ThemeState`](vigil_theme::ThemeState) and resolves
//! its look through the shared style resolver, so all screens render the
//! same way for the same theme.
//!
//! # Example
//!
//! ```rust
//! use vigil_cn::prelude::*;
//! use vigil_theme::ThemeState;
//!
//! let theme = ThemeState::default();
//!
//! let save = button(&theme, "Save")
//!     .variant(ButtonVariant::Primary)
//!     .size(ButtonSize::Lg)
//!     .build()
//!     .unwrap();
//! assert_eq!(save.label(), "Save");
//!
//! let status = badge(&theme, "Offline").variant(BadgeVariant::Danger).dot(true).build().unwrap();
//! assert!(status.dot_color().is_some());
//! ```

pub mod components;

pub use components::*;

/// Everything needed to build screens
pub mod prelude {
    pub use crate::components::*;
}
