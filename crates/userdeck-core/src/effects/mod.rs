//! Declarative visual transitions.
//!
//! Transitions are plain data sampled against elapsed time. Rendering code
//! decides how to apply the sampled [`VisualProps`]; an [`EffectRunner`]
//! is told when a transition starts.

pub mod easing;
pub mod presets;
pub mod runner;
pub mod types;

pub use easing::Easing;
pub use runner::{DisabledRunner, EffectRunner, TracingRunner, runner_for};
pub use types::{EffectTarget, Lifecycle, Repeat, Transition, VisualProps};
