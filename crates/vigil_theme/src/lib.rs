//! Vigil Theme System
//!
//! Theme-driven style resolution for every surface of the Vigil console.
//!
//! # Overview
//!
//! - **Theme state**: four user-configurable dimensions (primary color,
//!   corner radius, density, shadow depth) owned by the application and
//!   passed to every primitive
//! - **Token tables**: total lookup tables from enumerated keys to concrete
//!   colors, shapes, padding, and elevation
//! - **Style resolver**: a pure function from (theme, request) to a
//!   render-ready [`StyleSpec`]
//!
//! # Quick Start
//!
//! ```rust
//! use vigil_theme::{ComponentKind, PrimaryColor, StyleRequest, ThemeState, Variant};
//!
//! let theme = ThemeState::default();
//! theme.set_primary_color(PrimaryColor::Emerald);
//!
//! let spec = theme
//!     .resolve(&StyleRequest::new(ComponentKind::Button, Variant::Primary))
//!     .unwrap();
//! assert_eq!(spec.background, PrimaryColor::Emerald.token().base);
//! ```
//!
//! # Architecture
//!
//! Resolution never caches: every render pass resolves against a fresh
//! snapshot of the theme, so a theme change is picked up by every mounted
//! primitive on the next pass.

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod resolver;
pub mod state;
pub mod style;
pub mod tokens;
pub mod variants;

pub use config::{ThemeConfig, CONFIG_FILE};
pub use error::{Result, StyleError, ThemeError};
pub use resolver::resolve;
pub use state::{ThemeSettings, ThemeState};
pub use style::{FocusRing, HoverLift, StyleRequest, StyleSpec};
pub use tokens::*;
pub use variants::{variant_style, Border, ComponentKind, Variant, VariantStyle};
