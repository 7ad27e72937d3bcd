//! Transitions used across the pages.

use std::time::Duration;

use crate::effects::easing::Easing;
use crate::effects::types::{Transition, VisualProps};

const fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

const fn shifted(offset_x: f32, offset_y: f32) -> VisualProps {
    VisualProps {
        opacity: 0.0,
        offset_x,
        offset_y,
        scale: 1.0,
    }
}

/// User cards on the list page.
pub fn list_entrance() -> Transition {
    Transition::new(shifted(0.0, 20.0), VisualProps::IDENTITY, ms(600))
        .with_stagger(ms(100))
        .with_easing(Easing::Power2Out)
}

/// Dashboard hero panel.
pub fn hero_entrance() -> Transition {
    Transition::new(
        shifted(0.0, 50.0).with_scale(0.95),
        VisualProps::IDENTITY,
        ms(1000),
    )
    .with_easing(Easing::Power2Out)
}

/// Landing page title.
pub fn landing_title() -> Transition {
    Transition::new(shifted(0.0, 100.0), VisualProps::IDENTITY, ms(1200))
        .with_easing(Easing::ElasticOut(1.0, 0.5))
}

pub fn stats_entrance() -> Transition {
    Transition::new(shifted(0.0, 30.0), VisualProps::IDENTITY, ms(600))
        .with_delay(ms(300))
        .with_stagger(ms(100))
        .with_easing(Easing::BackOut(1.7))
}

pub fn feature_cards_entrance() -> Transition {
    Transition::new(shifted(30.0, 0.0), VisualProps::IDENTITY, ms(800))
        .with_delay(ms(600))
        .with_stagger(ms(150))
        .with_easing(Easing::Power2Out)
}

pub fn detail_header() -> Transition {
    Transition::new(shifted(0.0, -30.0), VisualProps::IDENTITY, ms(800))
        .with_easing(Easing::Power3Out)
}

pub fn detail_profile() -> Transition {
    Transition::new(shifted(0.0, 50.0), VisualProps::IDENTITY, ms(1000))
        .with_easing(Easing::Power3Out)
}

/// Address, company and quick-action cards on the detail page.
pub fn detail_sections() -> Transition {
    Transition::new(shifted(0.0, 20.0), VisualProps::IDENTITY, ms(800))
        .with_delay(ms(400))
        .with_stagger(ms(100))
        .with_easing(Easing::Power3Out)
}

const HOVER_SCALE: f32 = 1.05;

pub fn card_hover_enter() -> Transition {
    Transition::new(
        VisualProps::IDENTITY,
        VisualProps::IDENTITY.with_scale(HOVER_SCALE),
        ms(300),
    )
    .with_easing(Easing::Power2Out)
}

pub fn card_hover_leave() -> Transition {
    Transition::new(
        VisualProps::IDENTITY.with_scale(HOVER_SCALE),
        VisualProps::IDENTITY,
        ms(300),
    )
    .with_easing(Easing::Power2Out)
}

/// Gentle bobbing of landing and stat cards, slower for later cards.
pub fn floating() -> Transition {
    Transition::new(
        VisualProps::IDENTITY,
        VisualProps {
            offset_y: -10.0,
            ..VisualProps::IDENTITY
        },
        ms(2000),
    )
    .with_duration_step(ms(300))
    .with_stagger(ms(200))
    .with_easing(Easing::Power2InOut)
    .repeating(true)
}
