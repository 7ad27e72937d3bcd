//! User detail page.
//!
//! Header, profile card, address and company cards and quick actions for
//! one user. While the source loads a skeleton is shown; a missing user or
//! a failed source falls back to a panel that links back to the list.

use gpui::{Context, FontWeight, IntoElement, div, prelude::*, px};

use userdeck_core::effects::presets;
use userdeck_core::shell::Route;
use userdeck_core::users::{DetailState, UserError, UserId, UserRecord};

use crate::components::{Button, ButtonVariant, badge, card, skeleton};
use crate::effects::animated;
use crate::state::AppState;
use crate::theme;
use crate::views::main_view::MainView;

const PROFILE_WIDTH: f32 = 300.0;

pub fn render_user_detail(
    state: &AppState,
    id: UserId,
    cx: &mut Context<MainView>,
) -> impl IntoElement {
    match state.detail(id) {
        DetailState::Loading => render_skeleton().into_any_element(),
        DetailState::Ready(user) => render_user(state, user, cx).into_any_element(),
        other => match other.error() {
            Some(error) => render_fallback(&error, cx).into_any_element(),
            None => div().into_any_element(),
        },
    }
}

fn render_user(state: &AppState, user: &UserRecord, cx: &mut Context<MainView>) -> impl IntoElement {
    let enabled = state.effects_enabled();

    let header = div()
        .flex()
        .items_center()
        .gap(px(theme::SPACE_4))
        .child(
            Button::new("detail-back", "←")
                .variant(ButtonVariant::Secondary)
                .on_click(cx.listener(|view, _, _, cx| {
                    view.on_navigate(Route::Users, cx);
                })),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .child(
                    div()
                        .text_size(px(theme::TEXT_3XL))
                        .font_weight(FontWeight::BOLD)
                        .text_color(theme::text_white())
                        .child(user.name.clone()),
                )
                .child(div().text_color(theme::blue()).child(user.handle())),
        );

    let sections = [
        render_address(user).into_any_element(),
        render_company(user).into_any_element(),
        render_quick_actions(state, user, cx).into_any_element(),
    ];

    div()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_8))
        .child(animated(
            header,
            "detail-header",
            presets::detail_header(),
            0,
            enabled,
        ))
        .child(
            div()
                .flex()
                .flex_wrap()
                .items_start()
                .gap(px(theme::SPACE_8))
                .child(animated(
                    render_profile(user, cx),
                    "detail-profile",
                    presets::detail_profile(),
                    0,
                    enabled,
                ))
                .child(
                    div()
                        .flex_1()
                        .min_w(px(PROFILE_WIDTH))
                        .flex()
                        .flex_col()
                        .gap(px(theme::SPACE_6))
                        .children(sections.into_iter().enumerate().map(|(i, section)| {
                            animated(
                                div().child(section),
                                gpui::ElementId::Name(format!("detail-section-{}", i).into()),
                                presets::detail_sections(),
                                i,
                                enabled,
                            )
                        })),
                ),
        )
}

fn section_title(title: &'static str) -> impl IntoElement {
    div()
        .text_size(px(theme::TEXT_LG))
        .font_weight(FontWeight::SEMIBOLD)
        .text_color(theme::text_white())
        .child(title)
}

/// Icon and value on one line. Clicking copies `value`.
fn contact_row(
    id: &'static str,
    icon: &'static str,
    label: &'static str,
    value: String,
    cx: &mut Context<MainView>,
) -> impl IntoElement {
    let copied = value.clone();

    div()
        .id(id)
        .flex()
        .items_center()
        .gap(px(theme::SPACE_3))
        .cursor_pointer()
        .text_size(px(theme::TEXT_SM))
        .text_color(theme::text())
        .hover(|style| style.text_color(theme::violet()))
        .on_click(cx.listener(move |view, _, _, cx| {
            view.on_copy_click(label, copied.clone(), cx);
        }))
        .child(div().w(px(theme::SPACE_4)).text_color(theme::violet()).child(icon))
        .child(value)
}

fn render_profile(user: &UserRecord, cx: &mut Context<MainView>) -> gpui::Div {
    card()
        .w(px(PROFILE_WIDTH))
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_6))
        .child(
            div()
                .flex()
                .flex_col()
                .items_center()
                .gap(px(theme::SPACE_2))
                .child(
                    div()
                        .size(px(96.0))
                        .rounded(px(theme::RADIUS_FULL))
                        .bg(theme::with_alpha(theme::violet(), 0.25))
                        .border_2()
                        .border_color(theme::violet())
                        .flex()
                        .items_center()
                        .justify_center()
                        .text_size(px(theme::TEXT_XL))
                        .font_weight(FontWeight::BOLD)
                        .text_color(theme::text_white())
                        .child(user.initials()),
                )
                .child(
                    div()
                        .text_size(px(theme::TEXT_XL))
                        .font_weight(FontWeight::BOLD)
                        .text_color(theme::text_white())
                        .child(user.name.clone()),
                )
                .child(div().text_color(theme::text_muted()).child(user.handle())),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .gap(px(theme::SPACE_3))
                .child(contact_row("profile-email", "✉", "Email", user.email.clone(), cx))
                .child(contact_row("profile-phone", "☏", "Phone", user.phone.clone(), cx))
                .child(contact_row(
                    "profile-website",
                    "◍",
                    "Website",
                    user.website.clone(),
                    cx,
                ))
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap(px(theme::SPACE_3))
                        .text_size(px(theme::TEXT_SM))
                        .child(div().w(px(theme::SPACE_4)).text_color(theme::violet()).child("▣"))
                        .child(user.company.name.clone()),
                ),
        )
        .when(!user.company.catch_phrase.is_empty(), |this| {
            this.child(
                div()
                    .pt(px(theme::SPACE_4))
                    .border_t_1()
                    .border_color(theme::border_subtle())
                    .child(badge(theme::violet()).child(user.company.catch_phrase.clone())),
            )
        })
}

fn label_value(label: &'static str, value: String) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_1))
        .child(
            div()
                .text_size(px(theme::TEXT_XS))
                .text_color(theme::text_subtle())
                .child(label),
        )
        .child(div().text_color(theme::text()).child(value))
}

fn render_address(user: &UserRecord) -> impl IntoElement {
    let address = &user.address;

    card()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_4))
        .child(section_title("Address"))
        .child(
            div()
                .flex()
                .flex_wrap()
                .gap(px(theme::SPACE_6))
                .child(label_value("Street", address.street_line()))
                .child(label_value("City", address.city.clone()))
                .child(label_value("Zip Code", address.postal_code.clone()))
                .child(label_value("Coordinates", address.geo.coordinates())),
        )
}

fn render_company(user: &UserRecord) -> impl IntoElement {
    let company = &user.company;

    card()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_4))
        .child(section_title("Company"))
        .child(label_value("Name", company.name.clone()))
        .child(label_value("Catch Phrase", company.catch_phrase.clone()))
        .child(label_value("Business", company.bs.clone()))
}

fn render_quick_actions(
    state: &AppState,
    user: &UserRecord,
    cx: &mut Context<MainView>,
) -> impl IntoElement {
    let actions = [
        ("action-email", "Send Email", "Email link", user.mailto_url()),
        ("action-call", "Call", "Phone link", user.tel_url()),
        ("action-website", "Visit Website", "Website link", user.website_url()),
    ];

    card()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_4))
        .child(section_title("Quick Actions"))
        .child(
            div()
                .flex()
                .flex_wrap()
                .gap(px(theme::SPACE_3))
                .children(actions.into_iter().map(|(id, title, label, value)| {
                    Button::new(id, title)
                        .variant(ButtonVariant::Secondary)
                        .on_click(cx.listener(move |view, _, _, cx| {
                            view.on_copy_click(label, value.clone(), cx);
                        }))
                })),
        )
        .when_some(state.notice(), |this, notice| {
            this.child(
                div()
                    .text_size(px(theme::TEXT_SM))
                    .text_color(theme::green())
                    .child(notice.to_string()),
            )
        })
}

fn render_skeleton() -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_8))
        .child(
            div()
                .flex()
                .items_center()
                .gap(px(theme::SPACE_4))
                .child(skeleton(Some(40.0), 40.0))
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .gap(px(theme::SPACE_2))
                        .child(skeleton(Some(256.0), theme::SPACE_8))
                        .child(skeleton(Some(192.0), theme::SPACE_4)),
                ),
        )
        .child(
            div()
                .flex()
                .flex_wrap()
                .gap(px(theme::SPACE_8))
                .child(
                    card()
                        .w(px(PROFILE_WIDTH))
                        .flex()
                        .flex_col()
                        .items_center()
                        .gap(px(theme::SPACE_4))
                        .child(
                            div()
                                .size(px(96.0))
                                .rounded(px(theme::RADIUS_FULL))
                                .bg(theme::elevated()),
                        )
                        .child(skeleton(Some(128.0), theme::SPACE_6))
                        .child(skeleton(Some(96.0), theme::SPACE_4))
                        .children((0..4).map(|_| skeleton(None, theme::SPACE_4))),
                )
                .child(
                    div()
                        .flex_1()
                        .min_w(px(PROFILE_WIDTH))
                        .flex()
                        .flex_col()
                        .gap(px(theme::SPACE_6))
                        .children((0..3).map(|_| {
                            card()
                                .flex()
                                .flex_col()
                                .gap(px(theme::SPACE_3))
                                .child(skeleton(Some(128.0), theme::SPACE_6))
                                .child(skeleton(None, theme::SPACE_4))
                                .child(skeleton(Some(240.0), theme::SPACE_4))
                        })),
                ),
        )
}

fn render_fallback(error: &UserError, cx: &mut Context<MainView>) -> impl IntoElement {
    let (title, message) = match error {
        UserError::NotFound { .. } => (
            "User not found",
            "The user you're looking for doesn't exist or has been removed.".to_string(),
        ),
        UserError::SourceUnavailable { .. } => ("Users unavailable", error.to_string()),
    };

    div().flex().justify_center().py(px(theme::SPACE_8 * 2.0)).child(
        card()
            .max_w(px(420.0))
            .flex()
            .flex_col()
            .items_center()
            .gap(px(theme::SPACE_3))
            .child(
                div()
                    .text_size(px(theme::TEXT_3XL))
                    .text_color(theme::text_subtle())
                    .child("◉"),
            )
            .child(
                div()
                    .text_size(px(theme::TEXT_LG))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme::text_white())
                    .child(title),
            )
            .child(div().text_color(theme::text_muted()).child(message))
            .child(
                Button::new("fallback-back", "Back to Users")
                    .variant(ButtonVariant::Primary)
                    .on_click(cx.listener(|view, _, _, cx| {
                        view.on_navigate(Route::Users, cx);
                    })),
            ),
    )
}
