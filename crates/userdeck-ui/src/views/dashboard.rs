//! Dashboard overview page.
//!
//! Hero panel, the four stat cards and the feature cards. The feature
//! card row is shared with the landing page.

use gpui::{AnyElement, Context, FontWeight, IntoElement, div, prelude::*, px};

use userdeck_core::effects::presets;
use userdeck_core::shell::Route;
use userdeck_core::stats::{FEATURE_CARDS, StatCard, StatKind};

use crate::components::{Button, ButtonVariant, badge, card, skeleton};
use crate::effects::{animated, hover_card};
use crate::state::AppState;
use crate::theme;
use crate::views::main_view::MainView;

const STAT_CARD_WIDTH: f32 = 220.0;
const FEATURE_CARD_WIDTH: f32 = 280.0;

pub fn render_dashboard(state: &AppState, cx: &mut Context<MainView>) -> impl IntoElement {
    let enabled = state.effects_enabled();

    div()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_8))
        .child(animated(
            render_hero(cx),
            "dashboard-hero",
            presets::hero_entrance(),
            0,
            enabled,
        ))
        .child(render_stats(state, cx))
        .child(
            div()
                .flex()
                .flex_col()
                .gap(px(theme::SPACE_6))
                .child(
                    div()
                        .text_size(px(theme::TEXT_XL))
                        .font_weight(FontWeight::BOLD)
                        .text_color(theme::violet())
                        .child("Key Features"),
                )
                .child(render_feature_cards(state, "dashboard", cx)),
        )
}

fn render_hero(cx: &mut Context<MainView>) -> gpui::Div {
    card()
        .p(px(theme::SPACE_8))
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_4))
        .child(
            div()
                .text_size(px(theme::TEXT_3XL))
                .font_weight(FontWeight::BOLD)
                .text_color(theme::text_white())
                .child("Welcome to your"),
        )
        .child(
            div()
                .text_size(px(theme::TEXT_3XL))
                .font_weight(FontWeight::BOLD)
                .text_color(theme::violet())
                .child("User Dashboard"),
        )
        .child(
            div()
                .max_w(px(560.0))
                .text_size(px(theme::TEXT_LG))
                .text_color(theme::text_muted())
                .child(
                    "Manage your users efficiently with our modern, animated interface. \
                     Search, filter, and view detailed user information.",
                ),
        )
        .child(
            div()
                .flex()
                .flex_wrap()
                .gap(px(theme::SPACE_4))
                .child(
                    Button::new("view-all-users", "View All Users →")
                        .variant(ButtonVariant::Primary)
                        .on_click(cx.listener(|view, _, _, cx| {
                            view.on_navigate(Route::Users, cx);
                        })),
                )
                // Present but inert
                .child(
                    Button::new("hero-add-user", "Add New User")
                        .variant(ButtonVariant::Secondary),
                ),
        )
}

fn stat_accent(kind: StatKind) -> gpui::Rgba {
    match kind {
        StatKind::TotalUsers => theme::violet(),
        StatKind::ActiveSessions => theme::blue(),
        StatKind::GrowthRate => theme::green(),
        StatKind::GlobalReach => theme::orange(),
    }
}

fn render_stats(state: &AppState, cx: &mut Context<MainView>) -> impl IntoElement {
    let is_loading = state.is_loading();
    let enabled = state.effects_enabled();
    let cards = state.stats().cards();

    div()
        .flex()
        .flex_wrap()
        .gap(px(theme::SPACE_6))
        .children(cards.into_iter().enumerate().map(|(i, stat)| {
            let key = ("stat-card", i);
            let inner = render_stat_card(stat, is_loading).on_hover(cx.listener(
                move |view, hovered: &bool, _, cx| {
                    view.on_card_hover(key, *hovered, cx);
                },
            ));
            let inner = hover_card(
                inner,
                key,
                state.hover_phase(key),
                presets::stats_entrance(),
                "dashboard",
                enabled,
            );
            animated(
                div().child(inner),
                gpui::ElementId::Name(format!("stat-float-{}", i).into()),
                presets::floating(),
                i,
                enabled,
            )
        }))
}

fn render_stat_card(stat: StatCard, is_loading: bool) -> gpui::Stateful<gpui::Div> {
    let accent = stat_accent(stat.kind);

    card()
        .id(stat.label)
        .w(px(STAT_CARD_WIDTH))
        .cursor_pointer()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_4))
        .child(
            div()
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .size(px(theme::SPACE_8 + theme::SPACE_2))
                        .rounded(px(theme::RADIUS_LG))
                        .bg(theme::with_alpha(accent, 0.2)),
                )
                .child(badge(theme::green()).child(stat.trend)),
        )
        .child(if is_loading {
            skeleton(Some(64.0), theme::SPACE_8).into_any_element()
        } else {
            div()
                .text_size(px(theme::TEXT_XL))
                .font_weight(FontWeight::BOLD)
                .text_color(theme::text_white())
                .child(stat.value)
                .into_any_element()
        })
        .child(
            div()
                .text_size(px(theme::TEXT_SM))
                .text_color(theme::text_muted())
                .child(stat.label),
        )
}

/// The three feature cards, each a shortcut to its target page.
///
/// `scope` keeps the landing and dashboard animations apart.
pub fn render_feature_cards(
    state: &AppState,
    scope: &'static str,
    cx: &mut Context<MainView>,
) -> impl IntoElement {
    let enabled = state.effects_enabled();

    div()
        .flex()
        .flex_wrap()
        .justify_center()
        .gap(px(theme::SPACE_6))
        .children(FEATURE_CARDS.iter().enumerate().map(|(i, feature)| {
            let key = ("feature-card", i);
            let target = feature.target;
            let accent = [theme::violet(), theme::blue(), theme::green()][i % 3];

            let inner = card()
                .id(("feature-card", i))
                .w(px(FEATURE_CARD_WIDTH))
                .cursor_pointer()
                .flex()
                .flex_col()
                .gap(px(theme::SPACE_4))
                .on_click(cx.listener(move |view, _, _, cx| {
                    view.on_navigate(target, cx);
                }))
                .on_hover(cx.listener(move |view, hovered: &bool, _, cx| {
                    view.on_card_hover(key, *hovered, cx);
                }))
                .child(
                    div()
                        .size(px(theme::SPACE_8 + theme::SPACE_4))
                        .rounded(px(theme::RADIUS_LG))
                        .bg(accent),
                )
                .child(
                    div()
                        .text_size(px(theme::TEXT_LG))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(theme::text_white())
                        .child(feature.title),
                )
                .child(
                    div()
                        .text_size(px(theme::TEXT_SM))
                        .text_color(theme::text_muted())
                        .child(feature.description),
                )
                .child(
                    div()
                        .text_size(px(theme::TEXT_SM))
                        .text_color(accent)
                        .child("Explore →"),
                );

            let inner: AnyElement = hover_card(
                inner,
                key,
                state.hover_phase(key),
                presets::feature_cards_entrance(),
                scope,
                enabled,
            );
            animated(
                div().child(inner),
                gpui::ElementId::Name(format!("{}-feature-float-{}", scope, i).into()),
                presets::floating(),
                i,
                enabled,
            )
        }))
}
