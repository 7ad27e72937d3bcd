use gpui::{
    App, ClickEvent, ElementId, IntoElement, RenderOnce, SharedString, Window, div, prelude::*, px,
};

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Clickable text button.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    disabled: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::default(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, hover_bg, fg) = match self.variant {
            ButtonVariant::Primary => (theme::violet(), theme::blue(), theme::void()),
            ButtonVariant::Secondary => (theme::surface(), theme::elevated(), theme::text()),
            ButtonVariant::Ghost => (
                theme::with_alpha(theme::surface(), 0.0),
                theme::surface(),
                theme::text_muted(),
            ),
        };
        let handler = if self.disabled { None } else { self.on_click };

        div()
            .id(self.id)
            .px(px(theme::SPACE_3))
            .py(px(theme::SPACE_2))
            .rounded(px(theme::RADIUS_MD))
            .bg(bg)
            .text_size(px(theme::TEXT_SM))
            .text_color(fg)
            .when(self.variant == ButtonVariant::Secondary, |this| {
                this.border_1().border_color(theme::border())
            })
            .when(self.disabled, |this| this.opacity(0.4))
            .when(!self.disabled, |this| {
                this.cursor_pointer().hover(move |style| style.bg(hover_bg))
            })
            .when_some(handler, |this, handler| {
                this.on_click(move |event, window, cx| handler(event, window, cx))
            })
            .child(self.label)
    }
}
