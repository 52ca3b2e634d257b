pub mod course;
pub mod score;
pub mod stats;

pub use course::*;
pub use score::*;
pub use stats::*;
