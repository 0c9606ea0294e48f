//! Access to external systems.

pub mod graph_api;

pub use graph_api::{parse_api_response, AdsApi, GraphApiClient};
