pub mod config;
pub mod error;
pub mod model;
pub mod mvu;
pub mod score;
pub mod storage;
pub mod view;

pub use error::ScorecardError;
