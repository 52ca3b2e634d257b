pub mod runtime;
pub mod scorecard;

pub use runtime::run_scorecard;
pub use scorecard::{Deps, Effect, Msg, ScorecardModel, record_messages, run_effect, update};
