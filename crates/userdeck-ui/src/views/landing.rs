//! Landing page shown before entering the dashboard shell.

use gpui::{Context, FontWeight, IntoElement, div, prelude::*, px};

use userdeck_core::effects::presets;
use userdeck_core::shell::Route;

use crate::components::{Button, ButtonVariant};
use crate::effects::animated;
use crate::state::AppState;
use crate::theme;
use crate::views::dashboard::render_feature_cards;
use crate::views::main_view::MainView;

pub fn render_landing(state: &AppState, cx: &mut Context<MainView>) -> impl IntoElement {
    let enabled = state.effects_enabled();

    let title = div()
        .flex()
        .flex_col()
        .items_center()
        .gap(px(theme::SPACE_2))
        .child(
            div()
                .text_size(px(theme::TEXT_HERO))
                .font_weight(FontWeight::BOLD)
                .text_color(theme::violet())
                .child("User API"),
        )
        .child(
            div()
                .text_size(px(theme::TEXT_3XL))
                .font_weight(FontWeight::BOLD)
                .text_color(theme::blue())
                .child("Dashboard"),
        );

    div()
        .w_full()
        .flex()
        .flex_col()
        .items_center()
        .gap(px(theme::SPACE_8))
        .px(px(theme::SPACE_8))
        .py(px(theme::SPACE_8 * 2.5))
        .child(animated(
            title,
            "landing-title",
            presets::landing_title(),
            0,
            enabled,
        ))
        .child(
            div()
                .max_w(px(640.0))
                .text_size(px(theme::TEXT_LG))
                .text_color(theme::text_muted())
                .child(
                    "Experience the future of user management with stunning animations, \
                     real-time data, and beautiful modern design.",
                ),
        )
        .child(
            Button::new("launch-dashboard", "Launch Dashboard →")
                .variant(ButtonVariant::Primary)
                .on_click(cx.listener(|view, _, _, cx| {
                    view.on_navigate(Route::Dashboard, cx);
                })),
        )
        .child(render_feature_cards(state, "landing", cx))
}
