#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use iced::Theme;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_creator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    iced::application(app::init, app::update, app::view)
        .title("Facebook Campaign Creator")
        .theme(|_: &app::State| Theme::Dark)
        .window_size(iced::Size::new(760.0, 900.0))
        .run()?;

    Ok(())
}
