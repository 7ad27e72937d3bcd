//! Users list page.
//!
//! Renders the search field, the current page of user cards and the
//! pagination bar. Handles states:
//! - Error: the source failed to load
//! - Loading: skeleton cards
//! - Empty: no record matches the query
//! - List: cards that open the user's detail page

use gpui::{Context, FontWeight, IntoElement, div, prelude::*, px};

use userdeck_core::effects::presets;
use userdeck_core::shell::Route;
use userdeck_core::users::{PageView, UserRecord};

use crate::components::{Button, ButtonVariant, card, skeleton};
use crate::effects::hover_card;
use crate::state::AppState;
use crate::theme;
use crate::views::main_view::MainView;

const USER_CARD_WIDTH: f32 = 280.0;
const USER_CARD_HEIGHT: f32 = 150.0;

pub fn render_user_list(state: &AppState, cx: &mut Context<MainView>) -> impl IntoElement {
    let view = state.page_view();

    let body = if let Some(error) = state.load_error() {
        render_error(error).into_any_element()
    } else if state.is_loading() {
        render_skeletons(view.page_size).into_any_element()
    } else if view.is_empty() {
        render_empty(state.query()).into_any_element()
    } else {
        render_cards(state, &view, cx).into_any_element()
    };

    div()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_6))
        .child(
            div()
                .text_size(px(theme::TEXT_3XL))
                .font_weight(FontWeight::BOLD)
                .text_color(theme::violet())
                .child("Users"),
        )
        .child(
            div()
                .flex()
                .flex_wrap()
                .items_center()
                .justify_between()
                .gap(px(theme::SPACE_4))
                .child(
                    div()
                        .flex()
                        .gap(px(theme::SPACE_2))
                        // Present but inert
                        .child(
                            Button::new("add-user", "+ Add New User")
                                .variant(ButtonVariant::Primary),
                        )
                        .child(
                            Button::new("refresh-users", "Refresh")
                                .variant(ButtonVariant::Ghost)
                                .disabled(state.is_loading())
                                .on_click(cx.listener(|view, _, _, cx| {
                                    view.on_refresh_click(cx);
                                })),
                        ),
                )
                .child(render_search_field(state.query(), cx)),
        )
        .child(body)
        .when(!state.is_loading() && state.load_error().is_none(), |this| {
            this.child(render_pagination(&view, cx))
        })
}

/// Read-only field showing the query typed into the window.
fn render_search_field(query: &str, cx: &mut Context<MainView>) -> impl IntoElement {
    let is_empty = query.is_empty();
    let text = if is_empty {
        "Search users...".to_string()
    } else {
        format!("{}▏", query)
    };

    div()
        .flex()
        .items_center()
        .gap(px(theme::SPACE_2))
        .child(
            div()
                .w(px(260.0))
                .px(px(theme::SPACE_3))
                .py(px(theme::SPACE_2))
                .rounded(px(theme::RADIUS_MD))
                .bg(theme::obsidian())
                .border_1()
                .border_color(if is_empty {
                    theme::border()
                } else {
                    theme::violet()
                })
                .flex()
                .items_center()
                .gap(px(theme::SPACE_2))
                .child(div().text_color(theme::text_subtle()).child("⌕"))
                .child(
                    div()
                        .flex_1()
                        .text_size(px(theme::TEXT_BASE))
                        .text_color(if is_empty {
                            theme::text_subtle()
                        } else {
                            theme::text_white()
                        })
                        .child(text),
                ),
        )
        .when(!is_empty, |this| {
            this.child(
                Button::new("clear-search", "×")
                    .variant(ButtonVariant::Ghost)
                    .on_click(cx.listener(|view, _, _, cx| {
                        view.on_clear_search(cx);
                    })),
            )
        })
}

fn render_error(message: &str) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .items_center()
        .gap(px(theme::SPACE_2))
        .py(px(theme::SPACE_8))
        .child(div().text_color(theme::ember()).child("Error loading users"))
        .child(
            div()
                .text_color(theme::text_subtle())
                .text_size(px(theme::TEXT_SM))
                .child(message.to_string()),
        )
}

fn render_skeletons(count: usize) -> impl IntoElement {
    div()
        .flex()
        .flex_wrap()
        .gap(px(theme::SPACE_6))
        .children((0..count).map(|_| {
            card()
                .w(px(USER_CARD_WIDTH))
                .h(px(USER_CARD_HEIGHT))
                .flex()
                .flex_col()
                .gap(px(theme::SPACE_3))
                .child(skeleton(Some(theme::SPACE_8 + theme::SPACE_2), theme::SPACE_8))
                .child(skeleton(Some(160.0), theme::SPACE_4))
                .child(skeleton(None, theme::SPACE_3))
        }))
}

fn render_empty(query: &str) -> impl IntoElement {
    let message = if query.is_empty() {
        "No users".to_string()
    } else {
        format!("No users match \"{}\"", query)
    };
    div()
        .flex()
        .justify_center()
        .py(px(theme::SPACE_8))
        .text_color(theme::text_subtle())
        .child(message)
}

fn render_cards(
    state: &AppState,
    view: &PageView<'_>,
    cx: &mut Context<MainView>,
) -> impl IntoElement {
    let enabled = state.effects_enabled();
    let scope = format!("page{}", view.page);

    div()
        .flex()
        .flex_wrap()
        .gap(px(theme::SPACE_6))
        .children(view.visible.iter().enumerate().map(|(i, user)| {
            let key = ("user-card", i);
            let inner = render_user_card(user, i, cx);
            hover_card(
                inner,
                key,
                state.hover_phase(key),
                presets::list_entrance(),
                &scope,
                enabled,
            )
        }))
}

fn render_user_card(
    user: &UserRecord,
    position: usize,
    cx: &mut Context<MainView>,
) -> gpui::Stateful<gpui::Div> {
    let route = Route::UserDetail(user.id);
    let key = ("user-card", position);

    card()
        .id(("user-card", position))
        .w(px(USER_CARD_WIDTH))
        .h(px(USER_CARD_HEIGHT))
        .cursor_pointer()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_3))
        .on_click(cx.listener(move |view, _, _, cx| {
            view.on_navigate(route, cx);
        }))
        .on_hover(cx.listener(move |view, hovered: &bool, _, cx| {
            view.on_card_hover(key, *hovered, cx);
        }))
        .child(
            div()
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .size(px(theme::SPACE_8 + theme::SPACE_2))
                        .rounded(px(theme::RADIUS_LG))
                        .bg(theme::with_alpha(theme::violet(), 0.15))
                        .flex()
                        .items_center()
                        .justify_center()
                        .text_color(theme::violet())
                        .font_weight(FontWeight::BOLD)
                        .child(user.initials()),
                )
                .child(div().text_color(theme::text_subtle()).child("→")),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .gap(px(theme::SPACE_1))
                .child(
                    div()
                        .text_size(px(theme::TEXT_LG))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(theme::text_white())
                        .child(user.name.clone()),
                )
                .child(
                    div()
                        .text_size(px(theme::TEXT_SM))
                        .text_color(theme::text_muted())
                        .child(user.email.clone()),
                )
                .child(
                    div()
                        .text_size(px(theme::TEXT_SM))
                        .text_color(theme::text_muted())
                        .child(user.address.city.clone()),
                ),
        )
}

fn render_pagination(view: &PageView<'_>, cx: &mut Context<MainView>) -> impl IntoElement {
    div()
        .flex()
        .flex_wrap()
        .items_center()
        .justify_between()
        .gap(px(theme::SPACE_4))
        .pt(px(theme::SPACE_4))
        .border_t_1()
        .border_color(theme::border_subtle())
        .child(
            div()
                .text_size(px(theme::TEXT_SM))
                .text_color(theme::text_muted())
                .child(view.range_label()),
        )
        .child(
            div()
                .flex()
                .items_center()
                .gap(px(theme::SPACE_3))
                .child(
                    Button::new("prev-page", "← Prev")
                        .variant(ButtonVariant::Secondary)
                        .disabled(!view.has_prev())
                        .on_click(cx.listener(|view, _, _, cx| {
                            view.on_prev_page(cx);
                        })),
                )
                .child(
                    div()
                        .text_size(px(theme::TEXT_SM))
                        .text_color(theme::text())
                        .child(format!("Page {} of {}", view.page, view.total_pages)),
                )
                .child(
                    Button::new("next-page", "Next →")
                        .variant(ButtonVariant::Secondary)
                        .disabled(!view.has_next())
                        .on_click(cx.listener(|view, _, _, cx| {
                            view.on_next_page(cx);
                        })),
                ),
        )
}
