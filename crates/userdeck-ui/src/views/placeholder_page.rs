//! Panel for pages that have a sidebar entry but no content yet.

use gpui::{FontWeight, IntoElement, div, prelude::*, px};

use userdeck_core::effects::presets;
use userdeck_core::shell::Route;

use crate::components::card;
use crate::effects::animated;
use crate::state::AppState;
use crate::theme;

pub fn render_placeholder_page(state: &AppState, route: Route) -> impl IntoElement {
    let panel = card()
        .flex()
        .flex_col()
        .items_center()
        .gap(px(theme::SPACE_3))
        .py(px(theme::SPACE_8 * 2.0))
        .child(
            div()
                .text_size(px(theme::TEXT_XL))
                .font_weight(FontWeight::BOLD)
                .text_color(theme::text_white())
                .child(route.title()),
        )
        .child(
            div()
                .text_color(theme::text_subtle())
                .child(format!("Nothing to show on {} yet.", route.path())),
        );

    animated(
        panel,
        "placeholder-panel",
        presets::hero_entrance(),
        0,
        state.effects_enabled(),
    )
}
