//! Primer demo library.
//!
//! Command-line surface for the Primer algorithms:
//!
//! - `cli`: Argument definitions
//! - `executor`: Runs one command and renders its output
//! - `samples`: The fixed demonstration inputs
//! - `format`: Output formatting utilities

mod cli;
mod executor;
mod format;
mod samples;

pub use cli::{Cli, Command};
pub use executor::execute;
pub use format::{format_forest, format_items};
pub use samples::render_samples;
