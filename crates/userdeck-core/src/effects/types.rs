use std::time::Duration;

use crate::effects::easing::Easing;

/// Visual properties a transition animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualProps {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl VisualProps {
    /// Fully visible, untransformed.
    pub const IDENTITY: VisualProps = VisualProps {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    pub const fn hidden_below(offset_y: f32) -> Self {
        Self {
            opacity: 0.0,
            offset_x: 0.0,
            offset_y,
            scale: 1.0,
        }
    }

    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Interpolate towards `to`. `t` may overshoot [0, 1] for back and
    /// elastic easings; opacity stays within [0, 1].
    pub fn lerp(&self, to: &VisualProps, t: f32) -> VisualProps {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        VisualProps {
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            offset_x: mix(self.offset_x, to.offset_x),
            offset_y: mix(self.offset_y, to.offset_y),
            scale: mix(self.scale, to.scale),
        }
    }
}

impl Default for VisualProps {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    /// Loop indefinitely; with `yoyo`, every other cycle runs backwards.
    Forever { yoyo: bool },
}

/// Declarative description of an entrance, hover or ambient transition.
///
/// Item `i` of a staggered group starts after `delay + stagger * i` and
/// runs for `duration + duration_step * i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: VisualProps,
    pub to: VisualProps,
    pub duration: Duration,
    pub duration_step: Duration,
    pub delay: Duration,
    pub stagger: Duration,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Transition {
    pub fn new(from: VisualProps, to: VisualProps, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            duration_step: Duration::ZERO,
            delay: Duration::ZERO,
            stagger: Duration::ZERO,
            easing: Easing::Linear,
            repeat: Repeat::Once,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_duration_step(mut self, step: Duration) -> Self {
        self.duration_step = step;
        self
    }

    pub fn repeating(mut self, yoyo: bool) -> Self {
        self.repeat = Repeat::Forever { yoyo };
        self
    }

    pub fn start_delay(&self, index: usize) -> Duration {
        self.delay + self.stagger * index as u32
    }

    pub fn item_duration(&self, index: usize) -> Duration {
        self.duration + self.duration_step * index as u32
    }

    /// Time until the last of `count` items settles. `None` for
    /// transitions that repeat forever.
    pub fn total_duration(&self, count: usize) -> Option<Duration> {
        match self.repeat {
            Repeat::Forever { .. } => None,
            Repeat::Once if count == 0 => Some(Duration::ZERO),
            Repeat::Once => {
                let last = count - 1;
                Some(self.start_delay(last) + self.item_duration(last))
            }
        }
    }

    /// Eased progress of item `index` at `elapsed` since the group started.
    ///
    /// 0 before the item's start delay. For a single run it reaches and
    /// stays at 1. Repeating transitions wrap, reversing on odd cycles
    /// when `yoyo` is set.
    pub fn local_progress(&self, elapsed: Duration, index: usize) -> f32 {
        let start = self.start_delay(index);
        if elapsed < start {
            return 0.0;
        }
        let duration = self.item_duration(index);
        if duration.is_zero() {
            return 1.0;
        }
        let t = (elapsed - start).as_secs_f32() / duration.as_secs_f32();

        let phase = match self.repeat {
            Repeat::Once => t.min(1.0),
            Repeat::Forever { yoyo } => {
                let cycle = t.floor();
                let frac = t - cycle;
                if yoyo && (cycle as u64) % 2 == 1 {
                    1.0 - frac
                } else {
                    frac
                }
            }
        };
        self.easing.apply(phase)
    }

    pub fn sample(&self, elapsed: Duration, index: usize) -> VisualProps {
        self.from.lerp(&self.to, self.local_progress(elapsed, index))
    }

    /// Properties to render when effects are disabled.
    pub fn rest_props(&self) -> VisualProps {
        match self.repeat {
            Repeat::Once => self.to,
            Repeat::Forever { .. } => self.from,
        }
    }
}

/// Element a transition is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectTarget {
    pub element: &'static str,
    pub index: usize,
}

impl EffectTarget {
    pub fn new(element: &'static str, index: usize) -> Self {
        Self { element, index }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Mount,
    HoverEnter,
    HoverLeave,
}

impl Lifecycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifecycle::Mount => "mount",
            Lifecycle::HoverEnter => "hover_enter",
            Lifecycle::HoverLeave => "hover_leave",
        }
    }
}
