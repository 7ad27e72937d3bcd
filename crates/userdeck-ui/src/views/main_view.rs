//! Main view for userdeck-ui.
//!
//! Root view that owns application state, routes to the page views and
//! handles keyboard input for the users search field.

use std::time::Duration;

use gpui::{
    ClipboardItem, Context, FocusHandle, Focusable, FontWeight, IntoElement, KeyDownEvent, Render,
    Subscription, Task, Window, div, prelude::*, px,
};

use userdeck_core::shell::Route;

use crate::components::{Button, ButtonVariant};
use crate::state::{AppState, HoverKey};
use crate::theme;
use crate::views::{dashboard, landing, placeholder_page, sidebar, user_detail, user_list};

/// How often the record source is polled for load transitions.
const POLL_INTERVAL: Duration = Duration::from_millis(150);

/// Root application view.
pub struct MainView {
    state: AppState,
    focus_handle: FocusHandle,
    /// Last viewport width passed to the shell.
    viewport_width: f32,
    /// Handle to the source poll task. Must be stored to prevent cancellation.
    _poll_task: Task<()>,
    /// Window bounds observer. Dropped together with the view.
    _bounds_subscription: Subscription,
}

impl MainView {
    pub fn new(state: AppState, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let poll_task = cx.spawn(async move |this, cx: &mut gpui::AsyncApp| {
            tracing::debug!(
                event = "ui.source_poll.started",
                interval_ms = POLL_INTERVAL.as_millis() as u64
            );

            loop {
                cx.background_executor().timer(POLL_INTERVAL).await;

                if let Err(e) = this.update(cx, |view, cx| {
                    if view.state.poll_source() {
                        cx.notify();
                    }
                }) {
                    tracing::debug!(
                        event = "ui.source_poll.stopped",
                        reason = "view_dropped",
                        error = ?e
                    );
                    break;
                }
            }
        });

        let bounds_subscription = cx.observe_window_bounds(window, |view, window, cx| {
            let width = f32::from(window.viewport_size().width);
            view.on_viewport_resize(width, cx);
        });

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            state,
            focus_handle,
            viewport_width: f32::from(window.viewport_size().width),
            _poll_task: poll_task,
            _bounds_subscription: bounds_subscription,
        }
    }

    /// Apply a state mutation and notify GPUI to re-render.
    fn mutate_state(&mut self, cx: &mut Context<Self>, f: impl FnOnce(&mut AppState)) {
        f(&mut self.state);
        cx.notify();
    }

    pub fn on_navigate(&mut self, route: Route, cx: &mut Context<Self>) {
        self.mutate_state(cx, |s| s.navigate(route));
    }

    pub fn on_back(&mut self, cx: &mut Context<Self>) {
        self.mutate_state(cx, |s| s.go_back());
    }

    pub fn on_toggle_sidebar(&mut self, cx: &mut Context<Self>) {
        self.mutate_state(cx, |s| s.toggle_sidebar());
    }

    pub fn on_refresh_click(&mut self, cx: &mut Context<Self>) {
        tracing::info!(event = "ui.users.refresh_clicked");
        self.mutate_state(cx, |s| s.refresh_source());
    }

    pub fn on_prev_page(&mut self, cx: &mut Context<Self>) {
        self.mutate_state(cx, |s| s.prev_page());
    }

    pub fn on_next_page(&mut self, cx: &mut Context<Self>) {
        self.mutate_state(cx, |s| s.next_page());
    }

    pub fn on_clear_search(&mut self, cx: &mut Context<Self>) {
        self.mutate_state(cx, |s| s.clear_query());
    }

    pub fn on_card_hover(&mut self, key: HoverKey, hovered: bool, cx: &mut Context<Self>) {
        if self.state.set_hover(key, hovered) {
            cx.notify();
        }
    }

    /// Copy a detail field to the system clipboard.
    pub fn on_copy_click(&mut self, label: &str, value: String, cx: &mut Context<Self>) {
        tracing::info!(event = "ui.detail.copy_clicked", field = label);
        cx.write_to_clipboard(ClipboardItem::new_string(value));
        self.mutate_state(cx, |s| s.set_notice(format!("{} copied to clipboard", label)));
    }

    fn on_dismiss_errors(&mut self, cx: &mut Context<Self>) {
        self.mutate_state(cx, |s| s.dismiss_errors());
    }

    fn on_viewport_resize(&mut self, width: f32, cx: &mut Context<Self>) {
        // Bounds also change when the window only moves
        if width == self.viewport_width {
            return;
        }
        self.viewport_width = width;
        if self.state.on_viewport_resize(width) {
            cx.notify();
        }
    }

    /// Handle keyboard input.
    ///
    /// On the users page: printable characters extend the search query,
    /// backspace deletes, escape clears, left/right change page.
    /// On a detail page: escape returns to the users list.
    /// Elsewhere: backspace returns to the previous page.
    /// Anywhere: ctrl/cmd-b toggles the sidebar.
    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        let key_str = keystroke.key.as_str();

        if keystroke.modifiers.control || keystroke.modifiers.platform {
            if key_str == "b" && self.state.route().in_shell() {
                self.on_toggle_sidebar(cx);
            }
            return;
        }

        match self.state.route() {
            Route::Users => match key_str {
                "backspace" => self.mutate_state(cx, |s| s.pop_query_char()),
                "escape" => self.on_clear_search(cx),
                "left" => self.on_prev_page(cx),
                "right" => self.on_next_page(cx),
                _ => {
                    let Some(text) = keystroke.key_char.as_deref() else {
                        return;
                    };
                    let typed: Vec<char> = text.chars().filter(|c| !c.is_control()).collect();
                    if !typed.is_empty() {
                        self.mutate_state(cx, |s| {
                            for c in typed {
                                s.push_query_char(c);
                            }
                        });
                    }
                }
            },
            Route::UserDetail(_) => match key_str {
                "escape" => self.on_navigate(Route::Users, cx),
                "backspace" => self.on_back(cx),
                _ => {}
            },
            Route::Landing | Route::Dashboard | Route::Search | Route::Settings => {
                if key_str == "backspace" {
                    self.on_back(cx);
                }
            }
        }
    }

    fn render_error_banner(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let errors = self.state.banner_errors();
        let error_count = errors.len();

        div()
            .mx(px(theme::SPACE_4))
            .mt(px(theme::SPACE_2))
            .px(px(theme::SPACE_4))
            .py(px(theme::SPACE_2))
            .bg(theme::with_alpha(theme::ember(), 0.15))
            .rounded(px(theme::RADIUS_MD))
            .flex()
            .flex_col()
            .gap(px(theme::SPACE_1))
            .child(
                div()
                    .flex()
                    .justify_between()
                    .items_center()
                    .child(
                        div()
                            .text_color(theme::ember())
                            .font_weight(FontWeight::BOLD)
                            .child(format!(
                                "Error{}:",
                                if error_count == 1 { "" } else { "s" }
                            )),
                    )
                    .child(
                        Button::new("dismiss-errors", "×")
                            .variant(ButtonVariant::Ghost)
                            .on_click(cx.listener(|view, _, _, cx| {
                                view.on_dismiss_errors(cx);
                            })),
                    ),
            )
            .children(errors.iter().map(|e| {
                div()
                    .text_size(px(theme::TEXT_SM))
                    .text_color(theme::with_alpha(theme::ember(), 0.8))
                    .child(format!("• {}", e))
            }))
    }

    fn render_page(&self, cx: &mut Context<Self>) -> gpui::AnyElement {
        match self.state.route() {
            Route::Landing => landing::render_landing(&self.state, cx).into_any_element(),
            Route::Dashboard => dashboard::render_dashboard(&self.state, cx).into_any_element(),
            Route::Users => user_list::render_user_list(&self.state, cx).into_any_element(),
            Route::UserDetail(id) => {
                user_detail::render_user_detail(&self.state, id, cx).into_any_element()
            }
            route @ (Route::Search | Route::Settings) => {
                placeholder_page::render_placeholder_page(&self.state, route).into_any_element()
            }
        }
    }

    /// Sidebar plus scrolling content area.
    fn render_shell(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let shell = self.state.shell();
        let show_sidebar = shell.sidebar_width() > 0.0;
        let overlays = shell.sidebar_overlays();

        div()
            .flex_1()
            .flex()
            .relative()
            .overflow_hidden()
            .when(show_sidebar && !overlays, |this| {
                this.child(sidebar::render_sidebar(&self.state, cx))
            })
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    // Narrow and collapsed: the sidebar is hidden, keep a way back in
                    .when(!show_sidebar, |this| {
                        this.child(
                            div()
                                .px(px(theme::SPACE_4))
                                .pt(px(theme::SPACE_3))
                                .child(
                                    Button::new("open-sidebar", "☰ Menu")
                                        .variant(ButtonVariant::Ghost)
                                        .on_click(cx.listener(|view, _, _, cx| {
                                            view.on_toggle_sidebar(cx);
                                        })),
                                ),
                        )
                    })
                    .child(
                        div()
                            .id("page-content")
                            .flex_1()
                            .overflow_y_scroll()
                            .p(px(theme::SPACE_6))
                            .child(self.render_page(cx)),
                    ),
            )
            .when(overlays, |this| {
                this.child(
                    div()
                        .absolute()
                        .top_0()
                        .left_0()
                        .h_full()
                        .shadow_lg()
                        .child(sidebar::render_sidebar(&self.state, cx)),
                )
            })
    }
}

impl Focusable for MainView {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for MainView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let in_shell = self.state.route().in_shell();

        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .size_full()
            .flex()
            .flex_col()
            .bg(theme::void())
            .text_color(theme::text())
            // Error banner (config load failures and other non-blocking problems)
            .when(self.state.has_banner_errors(), |this| {
                this.child(self.render_error_banner(cx))
            })
            .when(in_shell, |this| this.child(self.render_shell(cx)))
            .when(!in_shell, |this| {
                this.child(
                    div()
                        .id("landing-scroll")
                        .flex_1()
                        .overflow_y_scroll()
                        .child(self.render_page(cx)),
                )
            })
    }
}
