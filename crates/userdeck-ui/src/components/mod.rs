//! Reusable UI components.

pub mod button;
pub mod card;

pub use button::{Button, ButtonVariant};
pub use card::{badge, card, skeleton};
