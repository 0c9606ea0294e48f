use crate::ui::{self, credential_form, progress_log};
use campaign_creator::prelude::*;
use iced::futures::channel::mpsc;
use iced::widget::{column, container, scrollable, text, Space};
use iced::{Element, Fill, Task};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Message {
    CredentialChanged(CredentialField, String),
    CreateCampaign,
    Logged(LogEntry),
    Finished(RunOutcome),
}

pub struct State {
    credentials: Credentials,
    log: ProgressLog,
    phase: FlowPhase,
    creator: Arc<CampaignCreator<GraphApiClient>>,
}

impl State {
    pub fn new() -> Self {
        Self {
            credentials: Credentials::default(),
            log: ProgressLog::new(),
            phase: FlowPhase::Idle,
            creator: Arc::new(CampaignCreator::new(
                GraphApiClient::new(GraphApiConfig::default()),
                CampaignSpec::demo(),
            )),
        }
    }
}

/// Forwards entries to the UI as the run produces them.
struct ChannelSink(mpsc::UnboundedSender<LogEntry>);

impl LogSink for ChannelSink {
    fn log(&mut self, entry: LogEntry) {
        // Receiver only goes away with the window.
        let _ = self.0.unbounded_send(entry);
    }
}

pub fn init() -> (State, Task<Message>) {
    (State::new(), Task::none())
}

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::CredentialChanged(field, value) => {
            state.credentials.set(field, value);
            Task::none()
        }
        Message::CreateCampaign => {
            if state.phase.is_busy() {
                return Task::none();
            }

            state.log.clear();
            state.phase = FlowPhase::Running;

            let (sender, receiver) = mpsc::unbounded();
            let creator = Arc::clone(&state.creator);
            let credentials = state.credentials.clone();

            let run = async move {
                let mut sink = ChannelSink(sender);
                creator.run(&credentials, &mut sink).await
            };

            Task::batch([
                Task::run(receiver, Message::Logged),
                Task::perform(run, Message::Finished),
            ])
        }
        Message::Logged(entry) => {
            state.log.push(entry);
            Task::none()
        }
        Message::Finished(outcome) => {
            state.phase = outcome.phase();
            Task::none()
        }
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let is_busy = state.phase.is_busy();

    let content = column![
        view_header(),
        ui::section_title("1. Your Credentials"),
        credential_form::view(&state.credentials, Message::CredentialChanged),
        Space::new().height(5),
        ui::submit_button(
            if is_busy {
                "Creating Campaign..."
            } else {
                "Create Dummy Campaign"
            },
            (!is_busy).then_some(Message::CreateCampaign),
        ),
        Space::new().height(5),
        ui::section_title("2. Progress Log"),
        progress_log::view(state.log.entries()),
        ui::footnote(
            "This tool interacts directly with the Facebook Marketing API. \
             All campaigns are created in a 'PAUSED' state for review."
        ),
    ]
    .spacing(15)
    .padding(25);

    container(scrollable(content))
        .width(Fill)
        .height(Fill)
        .into()
}

fn view_header() -> Element<'static, Message> {
    column![
        text("Facebook Campaign Creator")
            .size(28)
            .color(iced::Color::from_rgb(0.9, 0.9, 1.0)),
        text("Enter your API credentials and click the button to create a dummy campaign.")
            .size(14)
            .color(iced::Color::from_rgb(0.7, 0.7, 0.75)),
    ]
    .spacing(6)
    .align_x(iced::Alignment::Center)
    .width(Fill)
    .into()
}
