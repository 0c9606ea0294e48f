pub mod api;
pub mod budget;
pub mod campaign;
pub mod credentials;
pub mod flow;
pub mod log;

pub use api::*;
pub use budget::*;
pub use campaign::*;
pub use credentials::*;
pub use flow::*;
pub use log::*;
