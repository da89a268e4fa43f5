//! Primer Sequence
//!
//! Small utilities over ordered sequences:
//! - Left rotation in place
//! - Search in a sorted sequence of unknown length

mod rotate;
mod search;

pub use rotate::rotate_left;
pub use search::{search_unbounded, search_unbounded_by};
