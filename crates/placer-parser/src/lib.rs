//! Parser for grid track definitions.
//!
//! Track definitions are comma separated lists in grid length notation
//! (`100, *, 2*, auto`). Built on `nom` for the per-token grammar.
//!
//! Two flavours are offered: [`parse_track_size`] is strict and reports
//! what went wrong, [`parse_tracks`] is lenient and never fails, mapping
//! malformed tokens to the axis default.
//!
//! # Example
//!
//! ```
//! use placer_core::TrackSize;
//! use placer_parser::parse_tracks;
//!
//! let tracks = parse_tracks("100, *, 2*, auto", TrackSize::Intrinsic);
//! assert_eq!(tracks[2], TrackSize::Proportional(2.0));
//! ```

mod lexer;
mod grammar;

pub use grammar::{parse_shared_groups, parse_track_size, parse_tracks};
