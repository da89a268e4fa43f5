//! Primer Core Types
//!
//! This crate provides the plain data types shared by the algorithm crates:
//! - Identity types (VertexId)
//! - Weighted graph edges (Edge, Weight)
//! - The input error taxonomy (InputError)

mod entity;
mod error;
mod id;

pub use entity::*;
pub use error::*;
pub use id::*;
