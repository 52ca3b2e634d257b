pub mod aggregator;
pub mod hole_entry;

pub use aggregator::*;
pub use hole_entry::*;
