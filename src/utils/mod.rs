pub mod ordering;
pub mod patch;

pub use ordering::{ordered_values, sorted_by_id, Identified};
pub use patch::Patch;
