pub mod scorecard;

pub use scorecard::*;
