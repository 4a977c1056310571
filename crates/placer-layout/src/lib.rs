//! Placement algorithms for auto-indexing grids and radial panels.
//!
//! The grid placer assigns cells to children in fill order, growing the
//! generated axis to fit and skipping cells reserved by spanning children.
//! The radial placer spreads children around an ellipse. Both work on
//! children through the [`GridChild`] and [`RadialChild`] traits so any host
//! element type can take part; [`GridItem`] and [`RadialItem`] are plain
//! implementations.
//!
//! ```
//! use placer_layout::{GridConfig, GridItem, GridPlacer, Size};
//!
//! let mut placer = GridPlacer::new(GridConfig::default().with_columns("*,*,*"));
//! let mut children = vec![GridItem::new(Size::new(40.0, 20.0)); 5];
//! placer.place(&mut children);
//!
//! assert_eq!(children[4].cell.row, 1);
//! assert_eq!(children[4].cell.column, 1);
//! assert_eq!(placer.rows().len(), 2);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the configurations, children and
//!   track lists. The JSON tests in `tests/config_serde.rs` only build with
//!   it, so run them with `cargo test -p placer-layout --features serde`.

pub mod arrange;
pub mod grid;
pub mod radial;
pub mod tracks;

pub use arrange::arrange_grid;
pub use grid::{GridChild, GridConfig, GridItem, GridPlacer};
pub use radial::{RadialChild, RadialConfig, RadialItem, RadialPlacement, RadialPlacer};
pub use tracks::{Track, TrackList};

pub use placer_core::{
    ConfigError, DistanceUnit, GridCell, HorizontalAlignment, Orientation, ParseError,
    PlacerError, RadiusUse, Rect, RotationFollowing, Size, Thickness, TrackSize,
    VerticalAlignment,
};
