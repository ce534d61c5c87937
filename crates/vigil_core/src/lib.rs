//! Vigil Core
//!
//! Foundational primitives shared by the Vigil admin console crates:
//!
//! - **Visual values**: [`Color`] and [`Shadow`], the concrete values the style
//!   resolver hands to every rendered surface
//! - **Events**: keyboard and pointer events delivered to interactive primitives
//! - **State Machines**: flat state machines for widget interaction states
//! - **Scroll locking**: a scoped "no background scroll" resource
//!
//! # Example
//!
//! ```rust
//! use vigil_core::{Color, StateMachine};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Door { Shut, Ajar }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Push { Open, Close }
//!
//! let mut door = StateMachine::builder(Door::Shut)
//!     .on(Door::Shut, Push::Open, Door::Ajar)
//!     .on(Door::Ajar, Push::Close, Door::Shut)
//!     .build();
//!
//! assert_eq!(door.send(Push::Open), Some(Door::Ajar));
//! assert_eq!(door.send(Push::Open), None);
//! assert_eq!(Color::from_hex(0x4F46E5).to_css(), "#4f46e5");
//! ```

pub mod events;
pub mod fsm;
pub mod layer;
pub mod scroll;

pub use events::{HitTarget, KeyCode, UiEvent};
pub use fsm::{StateMachine, StateMachineBuilder, Transition};
pub use layer::{Color, Shadow};
pub use scroll::{ScrollLock, ScrollLockGuard};
