use gpui::{Div, Styled, div, px};

use crate::theme;

/// Raised panel used for stats, feature, user and detail cards.
pub fn card() -> Div {
    div()
        .p(px(theme::SPACE_6))
        .rounded(px(theme::RADIUS_LG))
        .bg(theme::surface())
        .border_1()
        .border_color(theme::border_subtle())
}

/// Grey placeholder bar shown while records load.
///
/// Without a width the bar fills its container.
pub fn skeleton(width: Option<f32>, height: f32) -> Div {
    let bar = div()
        .h(px(height))
        .rounded(px(theme::RADIUS_SM))
        .bg(theme::elevated());
    match width {
        Some(width) => bar.w(px(width)),
        None => bar.w_full(),
    }
}

/// Small rounded label, e.g. a stat trend or a catch phrase.
pub fn badge(color: gpui::Rgba) -> Div {
    div()
        .px(px(theme::SPACE_2))
        .py(px(theme::SPACE_1))
        .rounded(px(theme::RADIUS_FULL))
        .bg(theme::with_alpha(color, 0.12))
        .text_color(color)
        .text_size(px(theme::TEXT_XS))
}
