use std::f32::consts::PI;

/// Easing curves.
///
/// `PowerN` curves follow the usual animation-library naming where
/// power1 is quadratic, power2 cubic and power3 quartic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    Power2Out,
    Power3Out,
    Power2InOut,
    /// Overshoots by `overshoot` before settling.
    BackOut(f32),
    /// Oscillates with `(amplitude, period)` before settling.
    ElasticOut(f32, f32),
}

impl Easing {
    /// Map linear progress `t` to eased progress.
    ///
    /// Input is clamped to [0, 1]; 0 maps to 0 and 1 maps to 1 exactly.
    /// Back and elastic curves may leave [0, 1] in between.
    pub fn apply(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match *self {
            Easing::Linear => t,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::BackOut(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
            Easing::ElasticOut(amplitude, period) => {
                let amplitude = amplitude.max(1.0);
                let period = if period > 0.0 { period } else { 0.3 };
                let shift = period / (2.0 * PI) * (1.0 / amplitude).asin();
                amplitude * 2f32.powf(-10.0 * t) * ((t - shift) * (2.0 * PI / period)).sin() + 1.0
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Power2Out => "power2.out",
            Easing::Power3Out => "power3.out",
            Easing::Power2InOut => "power2.inOut",
            Easing::BackOut(_) => "back.out",
            Easing::ElasticOut(_, _) => "elastic.out",
        }
    }
}
