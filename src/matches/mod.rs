pub mod error;
pub mod prediction_status;
pub mod query;
pub mod service;
pub mod validation;

pub use service::MatchService;
