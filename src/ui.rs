pub mod credential_form;
pub mod progress_log;

use iced::widget::{button, container, text};
use iced::{Color, Element, Fill};

pub fn section_title(title: &str) -> text::Text<'_> {
    text(title).size(20).color(Color::from_rgb(0.85, 0.85, 0.9))
}

pub fn label_text(label: &str) -> text::Text<'_> {
    text(label).size(14).color(Color::from_rgb(0.7, 0.7, 0.7))
}

pub fn footnote<'a, M: 'a>(message: &'a str) -> Element<'a, M> {
    container(
        text(message)
            .size(12)
            .color(Color::from_rgb(0.55, 0.55, 0.6)),
    )
    .center_x(Fill)
    .into()
}

pub fn card_style(_theme: &iced::Theme, bg_color: Color, border_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Full-width primary action; `None` renders it disabled.
pub fn submit_button<'a, M: Clone + 'a>(
    label: &'a str,
    on_press: Option<M>,
) -> button::Button<'a, M> {
    button(text(label).size(16).width(Fill).center())
        .on_press_maybe(on_press)
        .width(Fill)
        .padding([12, 16])
        .style(|_theme, status| {
            let base_color = match status {
                button::Status::Active => Color::from_rgb(0.15, 0.4, 0.85),
                button::Status::Hovered => Color::from_rgb(0.2, 0.47, 0.95),
                button::Status::Pressed => Color::from_rgb(0.1, 0.33, 0.75),
                _ => Color::from_rgb(0.4, 0.45, 0.5),
            };
            button::Style {
                background: Some(iced::Background::Color(base_color)),
                text_color: Color::WHITE,
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
}
