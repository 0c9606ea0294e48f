pub mod campaign;

pub use campaign::{CampaignCreator, FAILURE_HINT};
