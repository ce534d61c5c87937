//! Themed primitives

pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod modal;
pub mod select;

pub use badge::{badge, Badge, BadgeBuilder, BadgeVariant};
pub use button::{button, Button, ButtonBuilder, ButtonSize, ButtonVariant};
pub use card::{card, Card, CardBuilder};
pub use input::{input, Input, InputBuilder, InputSize};
pub use modal::{modal, Modal, ModalBuilder, ModalEvent, ModalSize, ModalState};
pub use select::{select, Select, SelectBuilder, SelectOption};
