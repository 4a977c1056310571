//! Core types and utilities shared by the placer crates.
//!
//! This crate provides the foundational types used by the parser and the
//! layout algorithms:
//! - Geometry (sizes, rectangles, thicknesses)
//! - Track sizes and the configuration enums of both panels
//! - Error types

pub mod errors;
pub mod geometry;
pub mod types;

pub use errors::*;
pub use geometry::*;
pub use types::*;
