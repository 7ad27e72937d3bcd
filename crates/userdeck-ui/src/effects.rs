//! Plays core transitions with GPUI animations.
//!
//! GPUI animations have no start delay, so an item's delay and stagger
//! are folded into the animation length and the core transition is
//! sampled at the matching elapsed time on every frame.

use std::time::Duration;

use gpui::{Animation, AnimationExt, AnyElement, ElementId, IntoElement, Styled, px};
use userdeck_core::effects::{EffectTarget, Repeat, Transition, VisualProps, presets};
use userdeck_core::shell::Route;

use crate::state::{HoverKey, HoverPhase};

/// Vertical lift in pixels per unit of scale above 1.
///
/// Divs cannot be scaled, so scale is drawn as a lift.
const LIFT_PER_SCALE: f32 = 80.0;

pub fn apply_props<E: Styled>(element: E, props: VisualProps) -> E {
    let lift = (props.scale - 1.0) * LIFT_PER_SCALE;
    element
        .relative()
        .opacity(props.opacity)
        .left(px(props.offset_x))
        .top(px(props.offset_y - lift))
}

/// Animation length and the elapsed time a frame's `delta` stands for.
fn timeline(transition: &Transition, index: usize) -> (Duration, Duration) {
    let start = transition.start_delay(index);
    let cycle = transition.item_duration(index);
    match transition.repeat {
        Repeat::Once => (start + cycle, Duration::ZERO),
        Repeat::Forever { yoyo: true } => (cycle * 2, start),
        Repeat::Forever { yoyo: false } => (cycle, start),
    }
}

/// Wrap `element` in the animation for item `index` of `transition`.
///
/// With effects disabled the element is drawn at its resting properties.
pub fn animated<E>(
    element: E,
    id: impl Into<ElementId>,
    transition: Transition,
    index: usize,
    enabled: bool,
) -> AnyElement
where
    E: Styled + IntoElement + 'static,
{
    let (span, offset) = timeline(&transition, index);
    if !enabled || span.is_zero() {
        return apply_props(element, transition.rest_props()).into_any_element();
    }

    let animation = match transition.repeat {
        Repeat::Once => Animation::new(span),
        Repeat::Forever { .. } => Animation::new(span).repeat(),
    };

    element
        .with_animation(id, animation, move |element, delta| {
            let elapsed = offset + span.mul_f32(delta.clamp(0.0, 1.0));
            apply_props(element, transition.sample(elapsed, index))
        })
        .into_any_element()
}

/// Animate a hoverable card.
///
/// At rest the card plays `entrance`; once hovered it plays the hover
/// transitions instead. The animation id carries the phase so each change
/// restarts the animation. `scope` separates otherwise identical cards,
/// e.g. the same grid slot on different pages.
pub fn hover_card<E>(
    element: E,
    key: HoverKey,
    phase: HoverPhase,
    entrance: Transition,
    scope: &str,
    enabled: bool,
) -> AnyElement
where
    E: Styled + IntoElement + 'static,
{
    let (tag, transition, index) = match phase {
        HoverPhase::Rest => ("mount", entrance, key.1),
        HoverPhase::Entered => ("enter", presets::card_hover_enter(), 0),
        HoverPhase::Left => ("leave", presets::card_hover_leave(), 0),
    };
    let id = ElementId::Name(format!("{}-{}-{}-{}", key.0, scope, key.1, tag).into());
    animated(element, id, transition, index, enabled)
}

/// Entrance transitions a page starts when it mounts.
///
/// `list_len` is the number of user cards on the current list page.
pub fn mount_effects(route: Route, list_len: usize) -> Vec<(EffectTarget, Transition)> {
    let group = |element: &'static str, transition: Transition, count: usize| {
        (0..count).map(move |i| (EffectTarget::new(element, i), transition))
    };

    match route {
        Route::Landing => group("landing-title", presets::landing_title(), 1)
            .chain(group("feature-card", presets::feature_cards_entrance(), 3))
            .chain(group("feature-float", presets::floating(), 3))
            .collect(),
        Route::Dashboard => group("dashboard-hero", presets::hero_entrance(), 1)
            .chain(group("stat-card", presets::stats_entrance(), 4))
            .chain(group("stat-float", presets::floating(), 4))
            .chain(group("feature-card", presets::feature_cards_entrance(), 3))
            .chain(group("feature-float", presets::floating(), 3))
            .collect(),
        Route::Users => group("user-card", presets::list_entrance(), list_len).collect(),
        Route::UserDetail(_) => group("detail-header", presets::detail_header(), 1)
            .chain(group("detail-profile", presets::detail_profile(), 1))
            .chain(group("detail-section", presets::detail_sections(), 3))
            .collect(),
        Route::Search | Route::Settings => {
            group("placeholder-panel", presets::hero_entrance(), 1).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdeck_core::users::UserId;

    #[test]
    fn test_timeline_folds_delay_into_span() {
        let t = presets::stats_entrance();
        let (span, offset) = timeline(&t, 2);
        assert_eq!(span, Duration::from_millis(300 + 200 + 600));
        assert_eq!(offset, Duration::ZERO);
    }

    #[test]
    fn test_timeline_yoyo_covers_both_directions() {
        let t = presets::floating();
        let (span, offset) = timeline(&t, 1);
        assert_eq!(span, Duration::from_millis(2300 * 2));
        assert_eq!(offset, Duration::from_millis(200));
    }

    #[test]
    fn test_mount_effects_per_route() {
        assert_eq!(mount_effects(Route::Users, 6).len(), 6);
        assert_eq!(mount_effects(Route::Users, 0).len(), 0);
        assert_eq!(mount_effects(Route::Dashboard, 0).len(), 15);
        assert_eq!(mount_effects(Route::UserDetail(UserId(1)), 0).len(), 5);
        assert_eq!(mount_effects(Route::Landing, 0).len(), 7);

        let indices: Vec<usize> = mount_effects(Route::Users, 3)
            .iter()
            .map(|(target, _)| target.index)
            .collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
