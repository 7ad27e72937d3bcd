//! Navigation sidebar.
//!
//! Brand header with a collapse toggle and the four navigation items.
//! Collapsed, only the icons are shown and hovering an icon shows its
//! label beside the sidebar.

use gpui::{
    Context, FontWeight, IntoElement, ParentElement, Styled, deferred, div, prelude::*, px,
};

use userdeck_core::shell::{NAV_ITEMS, NavItem, SIDEBAR_COLLAPSED_WIDTH};

use crate::components::{Button, ButtonVariant};
use crate::state::AppState;
use crate::theme;
use crate::views::main_view::MainView;

/// Left border width of the active item, subtracted from its padding.
const ACTIVE_BORDER_WIDTH: f32 = 2.0;

/// Horizontal position of a hover label, just right of the collapsed item.
const HOVER_LABEL_LEFT: f32 = SIDEBAR_COLLAPSED_WIDTH - 2.0 * theme::SPACE_4 + theme::SPACE_2;

/// Label to show on hover, only when the item itself shows no label.
fn hover_label(item: &NavItem, show_labels: bool) -> Option<&'static str> {
    (!show_labels).then_some(item.label)
}

pub fn render_sidebar(state: &AppState, cx: &mut Context<MainView>) -> impl IntoElement {
    let shell = state.shell();
    let show_labels = shell.show_labels();
    let active = state.active_nav_item();

    div()
        .w(px(shell.sidebar_width()))
        .h_full()
        .bg(theme::obsidian())
        .border_r_1()
        .border_color(theme::border_subtle())
        .flex()
        .flex_col()
        .child(
            div()
                .px(px(theme::SPACE_4))
                .py(px(theme::SPACE_4))
                .border_b_1()
                .border_color(theme::border_subtle())
                .flex()
                .items_center()
                .when(show_labels, |this| this.justify_between())
                .when(!show_labels, |this| this.justify_center())
                .when(show_labels, |this| {
                    this.child(
                        div()
                            .flex()
                            .items_center()
                            .gap(px(theme::SPACE_3))
                            .child(
                                div()
                                    .size(px(theme::SPACE_8))
                                    .rounded(px(theme::RADIUS_MD))
                                    .bg(theme::violet()),
                            )
                            .child(
                                div()
                                    .text_size(px(theme::TEXT_XL))
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(theme::violet())
                                    .child("Dashboard"),
                            ),
                    )
                })
                .child(
                    Button::new("sidebar-toggle", if show_labels { "×" } else { "☰" })
                        .variant(ButtonVariant::Ghost)
                        .on_click(cx.listener(|view, _, _, cx| {
                            view.on_toggle_sidebar(cx);
                        })),
                ),
        )
        .child(
            div()
                .flex_1()
                .p(px(theme::SPACE_4))
                .flex()
                .flex_col()
                .gap(px(theme::SPACE_2))
                .children(NAV_ITEMS.iter().map(|item| {
                    let is_active = active == Some(item);
                    render_nav_item(item, is_active, show_labels, cx)
                })),
        )
}

fn render_nav_item(
    item: &'static NavItem,
    is_active: bool,
    show_labels: bool,
    cx: &mut Context<MainView>,
) -> impl IntoElement + use<> {
    let route = item.route;
    let group = item.label;
    let tooltip = hover_label(item, show_labels);

    div()
        .id(item.label)
        .group(group)
        .relative()
        .flex()
        .items_center()
        .gap(px(theme::SPACE_3))
        .py(px(theme::SPACE_3))
        .px(px(theme::SPACE_3))
        .rounded(px(theme::RADIUS_LG))
        .cursor_pointer()
        .text_size(px(theme::TEXT_SM))
        .font_weight(FontWeight::MEDIUM)
        .when(!show_labels, |this| this.justify_center())
        .when(is_active, |this| {
            this.bg(theme::with_alpha(theme::violet(), 0.2))
                .text_color(theme::text_white())
                .border_l_2()
                .border_color(theme::violet())
                .pl(px(theme::SPACE_3 - ACTIVE_BORDER_WIDTH))
        })
        .when(!is_active, |this| {
            this.text_color(theme::text_muted()).hover(|style| {
                style
                    .bg(theme::with_alpha(theme::violet(), 0.1))
                    .text_color(theme::violet())
            })
        })
        .on_click(cx.listener(move |view, _, _, cx| {
            view.on_navigate(route, cx);
        }))
        .child(div().text_size(px(theme::TEXT_LG)).child(item.icon))
        .when(show_labels, |this| this.child(item.label))
        .when_some(tooltip, |this, label| {
            this.child(deferred(
                div()
                    .absolute()
                    .top(px(theme::SPACE_2))
                    .left(px(HOVER_LABEL_LEFT))
                    .px(px(theme::SPACE_2))
                    .py(px(theme::SPACE_1))
                    .rounded(px(theme::RADIUS_MD))
                    .bg(theme::elevated())
                    .border_1()
                    .border_color(theme::border())
                    .text_size(px(theme::TEXT_XS))
                    .text_color(theme::text_white())
                    .whitespace_nowrap()
                    .opacity(0.0)
                    .group_hover(group, |style| style.opacity(1.0))
                    .child(label),
            ))
        })
}
