//! Progress log panel.

use crate::ui;
use campaign_creator::{LogEntry, LogStatus};
use iced::widget::{column, container, row, scrollable, text};
use iced::{Color, Element, Fill, Font};

const PANEL_HEIGHT: f32 = 260.0;

fn status_color(status: LogStatus) -> Color {
    match status {
        LogStatus::Success => Color::from_rgb(0.45, 0.9, 0.55),
        LogStatus::Error => Color::from_rgb(1.0, 0.5, 0.5),
        LogStatus::Loading => Color::from_rgb(0.5, 0.7, 1.0),
        LogStatus::Info => Color::from_rgb(0.75, 0.78, 0.82),
    }
}

fn payload_text(entry: &LogEntry) -> Option<String> {
    entry
        .data
        .as_ref()
        .map(|data| serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string()))
}

fn view_entry<'a, M: 'a>(entry: &'a LogEntry) -> Element<'a, M> {
    let color = status_color(entry.status);

    let mut body = column![text(entry.text.as_str())
        .size(13)
        .font(Font::MONOSPACE)
        .color(color)]
    .spacing(6);

    if let Some(payload) = payload_text(entry) {
        body = body.push(
            container(
                text(payload)
                    .size(11)
                    .font(Font::MONOSPACE)
                    .color(Color::from_rgb(0.6, 0.62, 0.66)),
            )
            .padding(10)
            .width(Fill)
            .style(|theme| {
                ui::card_style(
                    theme,
                    Color::from_rgb(0.06, 0.08, 0.11),
                    Color::from_rgb(0.15, 0.17, 0.2),
                )
            }),
        );
    }

    row![
        text(entry.status.tag())
            .size(13)
            .font(Font::MONOSPACE)
            .color(color),
        body.width(Fill),
    ]
    .spacing(12)
    .into()
}

/// Entries oldest first; the panel stays pinned to the newest one.
pub fn view<'a, M: 'a>(entries: &'a [LogEntry]) -> Element<'a, M> {
    let content: Element<'a, M> = if entries.is_empty() {
        text("> Waiting for campaign creation to start...")
            .size(13)
            .font(Font::MONOSPACE)
            .color(Color::from_rgb(0.55, 0.58, 0.62))
            .into()
    } else {
        column(entries.iter().map(view_entry::<M>)).spacing(8).into()
    };

    container(
        scrollable(container(content).padding(15).width(Fill))
            .anchor_bottom()
            .height(PANEL_HEIGHT)
            .width(Fill),
    )
    .style(|theme| {
        ui::card_style(
            theme,
            Color::from_rgb(0.12, 0.15, 0.2),
            Color::from_rgb(0.25, 0.3, 0.38),
        )
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_is_pretty_printed() {
        let entry = LogEntry::error("Error: Invalid budget")
            .with_data(Some(json!({ "status": 400, "error": { "message": "Invalid budget" } })));
        let payload = payload_text(&entry).unwrap();
        assert!(payload.contains('\n'));
        assert!(payload.contains("\"message\": \"Invalid budget\""));
    }

    #[test]
    fn entries_without_data_have_no_payload() {
        assert!(payload_text(&LogEntry::info("plain")).is_none());
    }
}
