//! Design token tables
//!
//! Every table here is total over its enumerated keys and free of side
//! effects. Class names are part of the tables, never assembled at runtime,
//! so downstream tooling can see every class the console can emit.
//!
//! - Colors (the eight selectable primary colors plus neutral surfaces)
//! - Radii (radius level x size bucket)
//! - Density (density x size)
//! - Shadows (shadow mode, optionally tinted by a color)
//! - Interaction (disabled / hover-capable)

mod color;
mod density;
mod interaction;
mod radius;
mod shadow;

pub use color::*;
pub use density::*;
pub use interaction::*;
pub use radius::*;
pub use shadow::*;
