use crate::config::DEFAULT_BREAKPOINT;

pub const SIDEBAR_EXPANDED_WIDTH: f32 = 256.0;
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 64.0;

/// Sidebar visibility and viewport classification.
///
/// Below the breakpoint the viewport is narrow. Entering the narrow layout
/// forces the sidebar collapsed; returning to a wide viewport leaves the
/// sidebar as the user last set it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellState {
    sidebar_expanded: bool,
    is_narrow: bool,
    breakpoint: f32,
}

impl ShellState {
    /// Initial state for a viewport of `width` logical pixels.
    pub fn for_viewport(width: f32, breakpoint: f32) -> Self {
        let is_narrow = width < breakpoint;
        Self {
            sidebar_expanded: !is_narrow,
            is_narrow,
            breakpoint,
        }
    }

    pub fn sidebar_expanded(&self) -> bool {
        self.sidebar_expanded
    }

    pub fn is_narrow(&self) -> bool {
        self.is_narrow
    }

    pub fn breakpoint(&self) -> f32 {
        self.breakpoint
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
        tracing::debug!(
            event = "core.shell.sidebar_toggled",
            expanded = self.sidebar_expanded
        );
    }

    /// Apply a viewport resize. Returns true if anything changed.
    pub fn on_resize(&mut self, width: f32) -> bool {
        let was_narrow = self.is_narrow;
        let was_expanded = self.sidebar_expanded;

        self.is_narrow = width < self.breakpoint;
        if self.is_narrow {
            self.sidebar_expanded = false;
        }

        was_narrow != self.is_narrow || was_expanded != self.sidebar_expanded
    }

    /// Width the sidebar occupies in the layout.
    pub fn sidebar_width(&self) -> f32 {
        match (self.sidebar_expanded, self.is_narrow) {
            (true, _) => SIDEBAR_EXPANDED_WIDTH,
            (false, true) => 0.0,
            (false, false) => SIDEBAR_COLLAPSED_WIDTH,
        }
    }

    /// Whether the sidebar is drawn over the content instead of beside it.
    pub fn sidebar_overlays(&self) -> bool {
        self.is_narrow && self.sidebar_expanded
    }

    /// Whether nav labels are shown next to their icons.
    pub fn show_labels(&self) -> bool {
        self.sidebar_expanded
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::for_viewport(DEFAULT_BREAKPOINT, DEFAULT_BREAKPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_by_width() {
        let wide = ShellState::for_viewport(1100.0, 768.0);
        assert!(wide.sidebar_expanded());
        assert!(!wide.is_narrow());

        let narrow = ShellState::for_viewport(500.0, 768.0);
        assert!(!narrow.sidebar_expanded());
        assert!(narrow.is_narrow());
    }

    #[test]
    fn test_breakpoint_is_wide() {
        let state = ShellState::for_viewport(768.0, 768.0);
        assert!(!state.is_narrow());
        assert!(state.sidebar_expanded());
    }

    #[test]
    fn test_resize_to_narrow_collapses() {
        let mut state = ShellState::for_viewport(1100.0, 768.0);
        assert!(state.on_resize(600.0));
        assert!(state.is_narrow());
        assert!(!state.sidebar_expanded());
    }

    #[test]
    fn test_resize_to_wide_does_not_expand() {
        let mut state = ShellState::for_viewport(600.0, 768.0);
        assert!(state.on_resize(1200.0));
        assert!(!state.is_narrow());
        assert!(!state.sidebar_expanded());
    }

    #[test]
    fn test_narrow_resize_collapses_user_expanded_sidebar() {
        let mut state = ShellState::for_viewport(600.0, 768.0);
        state.toggle_sidebar();
        assert!(state.sidebar_expanded());
        assert!(state.sidebar_overlays());

        assert!(state.on_resize(590.0));
        assert!(!state.sidebar_expanded());
    }

    #[test]
    fn test_resize_without_change() {
        let mut state = ShellState::for_viewport(1100.0, 768.0);
        assert!(!state.on_resize(1000.0));
    }

    #[test]
    fn test_sidebar_widths() {
        let mut state = ShellState::for_viewport(1100.0, 768.0);
        assert_eq!(state.sidebar_width(), SIDEBAR_EXPANDED_WIDTH);
        state.toggle_sidebar();
        assert_eq!(state.sidebar_width(), SIDEBAR_COLLAPSED_WIDTH);
        assert!(!state.show_labels());

        state.on_resize(500.0);
        assert_eq!(state.sidebar_width(), 0.0);
    }
}
