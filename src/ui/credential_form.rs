//! Credential inputs.

use crate::ui;
use campaign_creator::{CredentialField, Credentials};
use iced::widget::{column, row, text, text_input, Column};
use iced::{Color, Element, Fill};

fn field<'a, M: Clone + 'a>(
    credentials: &'a Credentials,
    field: CredentialField,
    on_change: fn(CredentialField, String) -> M,
) -> Column<'a, M> {
    let input = text_input(field.placeholder(), credentials.get(field))
        .on_input(move |value| on_change(field, value))
        .secure(field.is_secret())
        .padding(8)
        .size(14);

    column![ui::label_text(field.input_label()), input]
        .spacing(4)
        .width(Fill)
}

pub fn view<'a, M: Clone + 'a>(
    credentials: &'a Credentials,
    on_change: fn(CredentialField, String) -> M,
) -> Element<'a, M> {
    column![
        row![
            field(credentials, CredentialField::AccessToken, on_change),
            field(credentials, CredentialField::AdAccountId, on_change),
        ]
        .spacing(20),
        field(credentials, CredentialField::PageId, on_change),
        text("Your Access Token requires ads_management permission. Credentials are not stored.")
            .size(12)
            .color(Color::from_rgb(0.55, 0.55, 0.6))
            .width(Fill)
            .center(),
    ]
    .spacing(15)
    .into()
}
