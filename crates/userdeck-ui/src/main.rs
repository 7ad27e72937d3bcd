//! userdeck-ui: GUI for userdeck
//!
//! GPUI-based user directory dashboard.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};

use userdeck_core::UserdeckConfig;
use userdeck_core::events;
use userdeck_core::logging::{init_logging, quiet_from_env};

mod components;
mod effects;
mod state;
mod theme;
mod views;

use state::AppState;
use views::MainView;

/// Load the config hierarchy, falling back to defaults on failure.
///
/// The error message is returned so it can be shown in the banner.
fn load_config() -> (UserdeckConfig, Option<String>) {
    match UserdeckConfig::load_hierarchy() {
        Ok(config) => (config, None),
        Err(e) => {
            events::log_app_error(&e);
            tracing::warn!(
                event = "ui.config.load_failed",
                error = %e,
                "Using default configuration"
            );
            (UserdeckConfig::default(), Some(e.to_string()))
        }
    }
}

fn main() {
    init_logging(quiet_from_env());
    events::log_app_startup();

    let (config, config_error) = load_config();
    // Optional page to open first, e.g. `/dashboard/users/3`
    let start_path = std::env::args().nth(1);

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(1100.0), px(720.0)), cx);
        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::from("User Dashboard")),
                    ..Default::default()
                }),
                ..Default::default()
            },
            move |window, cx| {
                let width = f32::from(window.viewport_size().width);
                let mut state = AppState::new(&config, width);
                if let Some(message) = config_error {
                    state.push_error(message);
                }
                if let Some(path) = start_path
                    && let Err(e) = state.open_path(&path)
                {
                    tracing::warn!(event = "ui.navigation.start_path_invalid", error = %e);
                    state.push_error(e.to_string());
                }
                cx.new(|cx| MainView::new(state, window, cx))
            },
        );

        if let Err(e) = opened {
            tracing::error!(event = "ui.window.open_failed", error = %e);
            cx.quit();
        }
    });

    events::log_app_shutdown();
}
