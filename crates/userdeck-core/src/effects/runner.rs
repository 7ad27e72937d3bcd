use crate::effects::types::{EffectTarget, Lifecycle, Transition};

/// Starts transitions on view elements.
///
/// Fire-and-forget: a runner never reports back, and views render
/// correctly whether or not a transition actually plays.
pub trait EffectRunner: Send + Sync {
    /// Whether transitions should be animated at all.
    fn enabled(&self) -> bool;

    fn run(&self, target: &EffectTarget, lifecycle: Lifecycle, transition: &Transition);
}

/// Records every transition start as a debug event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRunner;

impl EffectRunner for TracingRunner {
    fn enabled(&self) -> bool {
        true
    }

    fn run(&self, target: &EffectTarget, lifecycle: Lifecycle, transition: &Transition) {
        tracing::debug!(
            event = "core.effect.run_started",
            element = target.element,
            index = target.index,
            lifecycle = lifecycle.as_str(),
            easing = transition.easing.name(),
            delay_ms = transition.start_delay(target.index).as_millis() as u64,
            duration_ms = transition.item_duration(target.index).as_millis() as u64
        );
    }
}

/// Does nothing; views render resting properties.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRunner;

impl EffectRunner for DisabledRunner {
    fn enabled(&self) -> bool {
        false
    }

    fn run(&self, _target: &EffectTarget, _lifecycle: Lifecycle, _transition: &Transition) {}
}

pub fn runner_for(enabled: bool) -> Box<dyn EffectRunner> {
    if enabled {
        Box::new(TracingRunner)
    } else {
        Box::new(DisabledRunner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::presets;

    #[test]
    fn test_runner_selection() {
        assert!(runner_for(true).enabled());
        assert!(!runner_for(false).enabled());
    }

    #[test]
    fn test_runners_accept_all_lifecycles() {
        let target = EffectTarget::new("user_card", 2);
        for runner in [runner_for(true), runner_for(false)] {
            runner.run(&target, Lifecycle::Mount, &presets::list_entrance());
            runner.run(&target, Lifecycle::HoverEnter, &presets::card_hover_enter());
            runner.run(&target, Lifecycle::HoverLeave, &presets::card_hover_leave());
        }
    }
}
