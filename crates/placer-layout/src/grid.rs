//! Auto-indexing grid placement.
//!
//! Depending on the orientation either the columns (horizontal, row-major
//! fill) or the rows (vertical, column-major fill) are fixed by the
//! configuration; the other axis is generated from the children, and each
//! auto-indexed child is given the next free cell in fill order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use placer_core::{
    ConfigError, GridCell, HorizontalAlignment, Orientation, PlacerError, Rect, Size, Thickness,
    TrackSize, VerticalAlignment,
};
use placer_parser::parse_track_size;
use tracing::{debug, trace};

use crate::arrange::arrange_grid;
use crate::tracks::TrackList;

/// Grid configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Fill direction
    pub orientation: Orientation,
    /// Set to false to keep every child at its externally assigned cell
    pub auto_indexing: bool,
    /// Row definitions in comma separated grid length notation
    pub rows: String,
    /// Column definitions in comma separated grid length notation
    pub columns: String,
    /// Minimum number of rows created by a rebuild
    pub rows_min_count: usize,
    /// Minimum number of columns created by a rebuild
    pub columns_min_count: usize,
    /// Comma separated shared-size-group names, by row position
    pub rows_shared_size_groups: String,
    /// Comma separated shared-size-group names, by column position
    pub columns_shared_size_groups: String,
    /// Size of rows that have no explicit definition
    pub row_height: TrackSize,
    /// Size of columns that have no explicit definition
    pub column_width: TrackSize,
    /// Margin given to children that have none
    pub child_margin: Option<Thickness>,
    /// Horizontal alignment given to children that have none
    pub child_horizontal_alignment: Option<HorizontalAlignment>,
    /// Vertical alignment given to children that have none
    pub child_vertical_alignment: Option<VerticalAlignment>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            auto_indexing: true,
            rows: String::new(),
            columns: String::new(),
            rows_min_count: 1,
            columns_min_count: 1,
            rows_shared_size_groups: String::new(),
            columns_shared_size_groups: String::new(),
            row_height: TrackSize::Intrinsic,
            column_width: TrackSize::Intrinsic,
            child_margin: None,
            child_horizontal_alignment: None,
            child_vertical_alignment: None,
        }
    }
}

impl GridConfig {
    /// Set the fill direction.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enable or disable auto-indexing.
    pub fn with_auto_indexing(mut self, enabled: bool) -> Self {
        self.auto_indexing = enabled;
        self
    }

    /// Set the row definitions (`"auto, 40, *"`).
    pub fn with_rows(mut self, spec: impl Into<String>) -> Self {
        self.rows = spec.into();
        self
    }

    /// Set the column definitions (`"100, *, 2*"`).
    pub fn with_columns(mut self, spec: impl Into<String>) -> Self {
        self.columns = spec.into();
        self
    }

    pub fn with_rows_min_count(mut self, count: usize) -> Self {
        self.rows_min_count = count;
        self
    }

    pub fn with_columns_min_count(mut self, count: usize) -> Self {
        self.columns_min_count = count;
        self
    }

    pub fn with_rows_shared_size_groups(mut self, groups: impl Into<String>) -> Self {
        self.rows_shared_size_groups = groups.into();
        self
    }

    pub fn with_columns_shared_size_groups(mut self, groups: impl Into<String>) -> Self {
        self.columns_shared_size_groups = groups.into();
        self
    }

    /// Set the default row size.
    pub fn with_row_height(mut self, size: TrackSize) -> Self {
        self.row_height = size;
        self
    }

    /// Set the default column size.
    pub fn with_column_width(mut self, size: TrackSize) -> Self {
        self.column_width = size;
        self
    }

    /// Set the margin given to children that have none.
    pub fn with_child_margin(mut self, margin: Thickness) -> Self {
        self.child_margin = Some(margin);
        self
    }

    /// Set the alignments given to children that have none.
    pub fn with_child_alignment(
        mut self,
        horizontal: HorizontalAlignment,
        vertical: VerticalAlignment,
    ) -> Self {
        self.child_horizontal_alignment = Some(horizontal);
        self.child_vertical_alignment = Some(vertical);
        self
    }

    /// Whether switching from `self` to `other` requires rebuilding the track lists.
    fn tracks_differ(&self, other: &GridConfig) -> bool {
        self.rows != other.rows
            || self.columns != other.columns
            || self.rows_min_count != other.rows_min_count
            || self.columns_min_count != other.columns_min_count
            || self.rows_shared_size_groups != other.rows_shared_size_groups
            || self.columns_shared_size_groups != other.columns_shared_size_groups
            || self.row_height != other.row_height
            || self.column_width != other.column_width
    }

    /// Check the configuration strictly.
    ///
    /// Placement never requires this: malformed values degrade to defaults.
    /// Hosts that prefer to reject bad configuration up front call it
    /// before handing the configuration to a [`GridPlacer`].
    pub fn validate(&self) -> Result<(), PlacerError> {
        if self.rows_min_count == 0 {
            return Err(ConfigError::CountTooSmall {
                field: "rows_min_count",
                value: 0,
            }
            .into());
        }
        if self.columns_min_count == 0 {
            return Err(ConfigError::CountTooSmall {
                field: "columns_min_count",
                value: 0,
            }
            .into());
        }

        validate_default_size("row_height", self.row_height)?;
        validate_default_size("column_width", self.column_width)?;

        for spec in [&self.rows, &self.columns] {
            if spec.trim().is_empty() {
                continue;
            }
            for token in spec.split(',') {
                parse_track_size(token)?;
            }
        }
        Ok(())
    }
}

fn validate_default_size(field: &'static str, size: TrackSize) -> Result<(), ConfigError> {
    let value = match size {
        TrackSize::Fixed(value) | TrackSize::Proportional(value) => value,
        TrackSize::Intrinsic => return Ok(()),
    };
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTrackSize {
            field,
            reason: format!("{size} is not a finite, non-negative size"),
        })
    }
}

/// Layout attributes a child exposes to the grid placer.
///
/// Spans default to 1 and auto-indexing defaults to on. Values below 1
/// returned by the span methods are treated as 1.
pub trait GridChild {
    /// Size the child would like, excluding its margin.
    fn desired_size(&self) -> Size;

    fn row_span(&self) -> usize {
        1
    }

    fn column_span(&self) -> usize {
        1
    }

    /// Whether the placer assigns this child's cell.
    fn auto_index(&self) -> bool {
        true
    }

    /// Size forced onto the row this child lands in.
    fn row_height_override(&self) -> Option<TrackSize> {
        None
    }

    /// Size forced onto the column this child lands in.
    fn column_width_override(&self) -> Option<TrackSize> {
        None
    }

    fn cell(&self) -> GridCell;

    fn set_cell(&mut self, cell: GridCell);

    /// The child's own margin, `None` while unset.
    fn margin(&self) -> Option<Thickness>;

    fn set_margin(&mut self, margin: Thickness);

    fn horizontal_alignment(&self) -> Option<HorizontalAlignment>;

    fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment);

    fn vertical_alignment(&self) -> Option<VerticalAlignment>;

    fn set_vertical_alignment(&mut self, alignment: VerticalAlignment);
}

/// A plain grid child carrying its attributes as fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridItem {
    pub desired_size: Size,
    pub row_span: usize,
    pub column_span: usize,
    pub auto_index: bool,
    pub row_height_override: Option<TrackSize>,
    pub column_width_override: Option<TrackSize>,
    pub cell: GridCell,
    pub margin: Option<Thickness>,
    pub horizontal_alignment: Option<HorizontalAlignment>,
    pub vertical_alignment: Option<VerticalAlignment>,
}

impl Default for GridItem {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl GridItem {
    pub fn new(desired_size: Size) -> Self {
        Self {
            desired_size,
            row_span: 1,
            column_span: 1,
            auto_index: true,
            row_height_override: None,
            column_width_override: None,
            cell: GridCell::default(),
            margin: None,
            horizontal_alignment: None,
            vertical_alignment: None,
        }
    }

    pub fn with_row_span(mut self, span: usize) -> Self {
        self.row_span = span;
        self
    }

    pub fn with_column_span(mut self, span: usize) -> Self {
        self.column_span = span;
        self
    }

    /// Pin the child to a cell and take it out of auto-indexing.
    pub fn pinned(mut self, cell: GridCell) -> Self {
        self.cell = cell;
        self.auto_index = false;
        self
    }

    pub fn with_row_height_override(mut self, size: TrackSize) -> Self {
        self.row_height_override = Some(size);
        self
    }

    pub fn with_column_width_override(mut self, size: TrackSize) -> Self {
        self.column_width_override = Some(size);
        self
    }

    pub fn with_margin(mut self, margin: Thickness) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_alignment(mut self, horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        self.horizontal_alignment = Some(horizontal);
        self.vertical_alignment = Some(vertical);
        self
    }
}

impl GridChild for GridItem {
    fn desired_size(&self) -> Size {
        self.desired_size
    }

    fn row_span(&self) -> usize {
        self.row_span
    }

    fn column_span(&self) -> usize {
        self.column_span
    }

    fn auto_index(&self) -> bool {
        self.auto_index
    }

    fn row_height_override(&self) -> Option<TrackSize> {
        self.row_height_override
    }

    fn column_width_override(&self) -> Option<TrackSize> {
        self.column_width_override
    }

    fn cell(&self) -> GridCell {
        self.cell
    }

    fn set_cell(&mut self, cell: GridCell) {
        self.cell = cell;
    }

    fn margin(&self) -> Option<Thickness> {
        self.margin
    }

    fn set_margin(&mut self, margin: Thickness) {
        self.margin = Some(margin);
    }

    fn horizontal_alignment(&self) -> Option<HorizontalAlignment> {
        self.horizontal_alignment
    }

    fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) {
        self.horizontal_alignment = Some(alignment);
    }

    fn vertical_alignment(&self) -> Option<VerticalAlignment> {
        self.vertical_alignment
    }

    fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        self.vertical_alignment = Some(alignment);
    }
}

/// Spans of a child as (major axis, minor axis), clamped to at least 1.
fn spans<C: GridChild>(orientation: Orientation, child: &C) -> (usize, usize) {
    let row_span = child.row_span().max(1);
    let column_span = child.column_span().max(1);
    match orientation {
        Orientation::Horizontal => (column_span, row_span),
        Orientation::Vertical => (row_span, column_span),
    }
}

/// Number of positions a run of `span` starting at `pos` covers before the
/// end of its major line.
fn covered_run(pos: usize, span: usize, major: usize) -> usize {
    let line_end = (pos / major + 1) * major;
    span.min(line_end - pos)
}

/// First position at or after `pos` where a run of `span` lies on free cells.
///
/// Reservations behind the returned position are dropped from the queue.
fn next_free(mut pos: usize, span: usize, major: usize, reserved: &mut BinaryHeap<Reverse<usize>>) -> usize {
    loop {
        while let Some(&Reverse(next)) = reserved.peek() {
            if next > pos {
                break;
            }
            reserved.pop();
            if next == pos {
                pos += 1;
            }
        }

        let end = pos + covered_run(pos, span, major);
        match reserved.peek() {
            Some(&Reverse(blocked)) if blocked < end => pos = blocked + 1,
            _ => return pos,
        }
    }
}

/// Owns the row and column tracks of one grid and assigns cells to its children.
#[derive(Debug, Clone)]
pub struct GridPlacer {
    config: GridConfig,
    rows: TrackList,
    columns: TrackList,
    /// Set by configuration changes and [`GridPlacer::invalidate`]
    dirty: bool,
    /// Major-axis track count seen by the last auto-indexing pass
    last_major_count: usize,
}

impl Default for GridPlacer {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl GridPlacer {
    /// Create a placer and build its tracks from the configuration.
    pub fn new(config: GridConfig) -> Self {
        let mut placer = Self {
            config,
            rows: TrackList::new(),
            columns: TrackList::new(),
            dirty: true,
            last_major_count: 0,
        };
        placer.rebuild_tracks();
        placer
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Track lists are rebuilt when any track definition, minimum count,
    /// shared group list or default size changed.
    pub fn set_config(&mut self, config: GridConfig) {
        let rebuild = self.config.tracks_differ(&config);
        self.config = config;
        if rebuild {
            self.rebuild_tracks();
        }
        self.dirty = true;
    }

    /// Row tracks as of the last rebuild or placement.
    pub fn rows(&self) -> &TrackList {
        &self.rows
    }

    /// Column tracks as of the last rebuild or placement.
    pub fn columns(&self) -> &TrackList {
        &self.columns
    }

    /// Direct access to the rows.
    ///
    /// Edits made here are not seen as changes, except that a different
    /// major-axis count triggers [`GridPlacer::place_if_needed`].
    pub fn rows_mut(&mut self) -> &mut TrackList {
        &mut self.rows
    }

    /// Direct access to the columns. See [`GridPlacer::rows_mut`].
    pub fn columns_mut(&mut self) -> &mut TrackList {
        &mut self.columns
    }

    /// Mark the placement stale, e.g. after children were added or their spans changed.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rebuild both track lists from the configuration.
    pub fn rebuild_tracks(&mut self) {
        let config = &self.config;
        self.rows = TrackList::build(
            &config.rows,
            &config.rows_shared_size_groups,
            config.rows_min_count,
            config.row_height,
        );
        self.columns = TrackList::build(
            &config.columns,
            &config.columns_shared_size_groups,
            config.columns_min_count,
            config.column_width,
        );
    }

    /// Rebuild the tracks and place every child from scratch.
    ///
    /// Calling this twice with the same children gives the same cells and
    /// tracks.
    pub fn place<C: GridChild>(&mut self, children: &mut [C]) {
        self.rebuild_tracks();
        self.place_children(children);
    }

    /// Place the children on the current tracks, only if something changed.
    ///
    /// A pass runs when the placer is dirty, or when auto-indexing is on and
    /// the major-axis track count differs from the last pass. Changes to
    /// track sizes alone are not detected. Returns whether a pass ran.
    pub fn place_if_needed<C: GridChild>(&mut self, children: &mut [C]) -> bool {
        let count_changed =
            self.config.auto_indexing && self.major_tracks().len() != self.last_major_count;
        if !self.dirty && !count_changed {
            return false;
        }
        self.place_children(children);
        true
    }

    /// Rectangles of the children inside a container of `final_size`.
    pub fn arrange<C: GridChild>(&self, children: &[C], final_size: Size) -> Vec<Rect> {
        arrange_grid(&self.rows, &self.columns, children, final_size)
    }

    fn place_children<C: GridChild>(&mut self, children: &mut [C]) {
        self.dirty = false;
        if self.config.auto_indexing {
            self.auto_index(children);
        }
        self.apply_child_defaults(children);
    }

    fn auto_index<C: GridChild>(&mut self, children: &mut [C]) {
        let orientation = self.config.orientation;
        let minor_default = self.minor_default();

        self.last_major_count = self.major_tracks().len();
        let major_count = self.last_major_count.max(1);

        let demand: usize = children
            .iter()
            .filter(|child| child.auto_index())
            .map(|child| spans(orientation, child).0)
            .sum();

        if demand > 0 {
            self.minor_tracks_mut()
                .resize(demand.div_ceil(major_count), minor_default);
        }

        debug!(
            children = children.len(),
            demand,
            major_count,
            ?orientation,
            "auto-indexing grid"
        );

        let mut pos = 0usize;
        let mut reserved: BinaryHeap<Reverse<usize>> = BinaryHeap::new();

        for (index, child) in children.iter_mut().enumerate() {
            if !child.auto_index() {
                continue;
            }

            let (major_span, minor_span) = spans(orientation, child);
            pos = next_free(pos, major_span, major_count, &mut reserved);
            let run = covered_run(pos, major_span, major_count);
            let (major_index, minor_index) = (pos % major_count, pos / major_count);
            let cell = match orientation {
                Orientation::Horizontal => GridCell::new(minor_index, major_index),
                Orientation::Vertical => GridCell::new(major_index, minor_index),
            };
            child.set_cell(cell);
            self.minor_tracks_mut()
                .ensure_len(minor_index + 1, minor_default);

            if let Some(height) = child.row_height_override() {
                self.rows.set_size(cell.row, height);
            }
            if let Some(width) = child.column_width_override() {
                self.columns.set_size(cell.column, width);
            }

            for k in 1..minor_span {
                for j in 0..run {
                    reserved.push(Reverse(pos + major_count * k + j));
                }
            }

            trace!(index, row = cell.row, column = cell.column, major_span, minor_span, "placed grid child");
            pos += major_span;
        }
    }

    fn apply_child_defaults<C: GridChild>(&self, children: &mut [C]) {
        let config = &self.config;
        for child in children.iter_mut() {
            if let Some(margin) = config.child_margin {
                if child.margin().is_none() {
                    child.set_margin(margin);
                }
            }
            if let Some(alignment) = config.child_horizontal_alignment {
                if child.horizontal_alignment().is_none() {
                    child.set_horizontal_alignment(alignment);
                }
            }
            if let Some(alignment) = config.child_vertical_alignment {
                if child.vertical_alignment().is_none() {
                    child.set_vertical_alignment(alignment);
                }
            }
        }
    }

    /// Tracks whose count is fixed by the configuration.
    fn major_tracks(&self) -> &TrackList {
        match self.config.orientation {
            Orientation::Horizontal => &self.columns,
            Orientation::Vertical => &self.rows,
        }
    }

    /// Tracks generated from the children.
    fn minor_tracks_mut(&mut self) -> &mut TrackList {
        match self.config.orientation {
            Orientation::Horizontal => &mut self.rows,
            Orientation::Vertical => &mut self.columns,
        }
    }

    fn minor_default(&self) -> TrackSize {
        match self.config.orientation {
            Orientation::Horizontal => self.config.row_height,
            Orientation::Vertical => self.config.column_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placer_core::ParseError;

    fn items(count: usize) -> Vec<GridItem> {
        (0..count).map(|_| GridItem::new(Size::new(10.0, 10.0))).collect()
    }

    fn cells(children: &[GridItem]) -> Vec<(usize, usize)> {
        children.iter().map(|c| (c.cell.row, c.cell.column)).collect()
    }

    #[test]
    fn test_row_major_fill() {
        let mut placer = GridPlacer::new(GridConfig::default().with_columns("*,*,*"));
        let mut children = items(7);
        placer.place(&mut children);

        for (k, child) in children.iter().enumerate() {
            assert_eq!(child.cell, GridCell::new(k / 3, k % 3));
        }
        assert_eq!(placer.rows().len(), 3);
        assert_eq!(placer.columns().len(), 3);
    }

    #[test]
    fn test_column_span_reserves_cells() {
        let mut placer = GridPlacer::new(GridConfig::default().with_columns_min_count(3));
        let mut children = items(3);
        children[0].column_span = 2;
        placer.place(&mut children);

        assert_eq!(cells(&children), vec![(0, 0), (0, 2), (1, 0)]);
        assert_eq!(placer.rows().len(), 2);
    }

    #[test]
    fn test_consecutive_column_spans() {
        let mut placer = GridPlacer::new(GridConfig::default().with_columns_min_count(3));
        let mut children = items(3);
        children[0].column_span = 2;
        children[1].column_span = 2;
        placer.place(&mut children);

        // The second span starts at the last column and consumes the next cursor position
        assert_eq!(cells(&children), vec![(0, 0), (0, 2), (1, 1)]);
    }

    #[test]
    fn test_consecutive_row_spans_are_skipped() {
        let mut placer = GridPlacer::new(GridConfig::default().with_columns_min_count(3));
        let mut children = items(6);
        children[0].row_span = 2;
        children[1].row_span = 2;
        placer.place(&mut children);

        assert_eq!(
            cells(&children),
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 0), (2, 1)]
        );
        // Rows grow past the demand estimate to hold every placed cell
        assert_eq!(placer.rows().len(), 3);
    }

    #[test]
    fn test_interleaved_row_spans_of_different_lengths() {
        let mut placer = GridPlacer::new(GridConfig::default().with_columns_min_count(3));
        let mut children = items(6);
        children[0].row_span = 3;
        children[1].row_span = 2;
        placer.place(&mut children);

        // Child 0 reserves (1,0) and (2,0), child 1 reserves (1,1)
        assert_eq!(
            cells(&children),
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_column_span_skips_reserved_cells() {
        let mut placer = GridPlacer::new(GridConfig::default().with_columns_min_count(3));
        let mut children = items(4);
        children[1].row_span = 2;
        children[3].column_span = 2;
        placer.place(&mut children);

        // (1,1) belongs to child 1, so child 3 moves past it
        assert_eq!(cells(&children), vec![(0, 0), (0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_row_and_column_span_reserve_the_whole_block() {
        let mut placer = GridPlacer::new(GridConfig::default().with_columns_min_count(3));
        let mut children = items(4);
        children[0].row_span = 2;
        children[0].column_span = 2;
        placer.place(&mut children);

        // Child 0 covers (0,0), (0,1), (1,0) and (1,1)
        assert_eq!(cells(&children), vec![(0, 0), (0, 2), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_column_major_fill() {
        let config = GridConfig::default()
            .with_orientation(Orientation::Vertical)
            .with_rows_min_count(2);
        let mut placer = GridPlacer::new(config);
        let mut children = items(5);
        placer.place(&mut children);

        assert_eq!(
            cells(&children),
            vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]
        );
        assert_eq!(placer.columns().len(), 3);
        assert_eq!(placer.rows().len(), 2);
    }

    #[test]
    fn test_column_major_column_span() {
        let config = GridConfig::default()
            .with_orientation(Orientation::Vertical)
            .with_rows("auto,auto");
        let mut placer = GridPlacer::new(config);
        let mut children = items(4);
        children[0].column_span = 2;
        placer.place(&mut children);

        assert_eq!(cells(&children), vec![(0, 0), (1, 0), (1, 1), (0, 2)]);
    }

    #[test]
    fn test_pinned_children_are_not_indexed() {
        let mut placer = GridPlacer::new(GridConfig::default().with_columns_min_count(2));
        let mut children = items(3);
        children[1] = GridItem::new(Size::new(5.0, 5.0)).pinned(GridCell::new(4, 1));
        placer.place(&mut children);

        assert_eq!(cells(&children), vec![(0, 0), (4, 1), (0, 1)]);
        // Only the two auto-indexed children count towards the rows
        assert_eq!(placer.rows().len(), 1);
    }

    #[test]
    fn test_disabled_auto_indexing_keeps_cells() {
        let config = GridConfig::default()
            .with_auto_indexing(false)
            .with_columns_min_count(2)
            .with_child_margin(Thickness::uniform(4.0));
        let mut placer = GridPlacer::new(config);
        let mut children = items(2);
        children[0].cell = GridCell::new(3, 3);
        placer.place(&mut children);

        assert_eq!(cells(&children), vec![(3, 3), (0, 0)]);
        // Defaults still apply
        assert!(children.iter().all(|c| c.margin == Some(Thickness::uniform(4.0))));
    }

    #[test]
    fn test_track_overrides() {
        let mut placer = GridPlacer::new(GridConfig::default().with_columns("*,*"));
        let mut children = items(4);
        children[2].row_height_override = Some(TrackSize::Fixed(50.0));
        children[1].column_width_override = Some(TrackSize::Fixed(20.0));
        children[3].column_width_override = Some(TrackSize::Fixed(80.0));
        placer.place(&mut children);

        assert_eq!(
            placer.rows().sizes(),
            vec![TrackSize::Intrinsic, TrackSize::Fixed(50.0)]
        );
        // Last writer wins on column 1
        assert_eq!(
            placer.columns().sizes(),
            vec![TrackSize::STAR, TrackSize::Fixed(80.0)]
        );
    }

    #[test]
    fn test_defaults_only_fill_unset_values() {
        let config = GridConfig::default()
            .with_child_margin(Thickness::uniform(2.0))
            .with_child_alignment(HorizontalAlignment::Center, VerticalAlignment::Top);
        let mut placer = GridPlacer::new(config);
        let mut children = vec![
            GridItem::new(Size::new(10.0, 10.0)),
            GridItem::new(Size::new(10.0, 10.0))
                .with_margin(Thickness::uniform(9.0))
                .with_alignment(HorizontalAlignment::Right, VerticalAlignment::Stretch),
        ];
        placer.place(&mut children);

        assert_eq!(children[0].margin, Some(Thickness::uniform(2.0)));
        assert_eq!(children[0].horizontal_alignment, Some(HorizontalAlignment::Center));
        assert_eq!(children[0].vertical_alignment, Some(VerticalAlignment::Top));
        assert_eq!(children[1].margin, Some(Thickness::uniform(9.0)));
        assert_eq!(children[1].horizontal_alignment, Some(HorizontalAlignment::Right));
        assert_eq!(children[1].vertical_alignment, Some(VerticalAlignment::Stretch));
    }

    #[test]
    fn test_no_children_keeps_minimum_tracks() {
        let config = GridConfig::default()
            .with_rows_min_count(3)
            .with_columns_min_count(2);
        let mut placer = GridPlacer::new(config);
        let mut children: Vec<GridItem> = Vec::new();
        placer.place(&mut children);

        assert_eq!(placer.rows().len(), 3);
        assert_eq!(placer.columns().len(), 2);
    }

    #[test]
    fn test_min_columns_extend_explicit_tracks() {
        let config = GridConfig::default()
            .with_columns("100,*")
            .with_columns_min_count(5)
            .with_column_width(TrackSize::Fixed(40.0));
        let placer = GridPlacer::new(config);

        assert_eq!(
            placer.columns().sizes(),
            vec![
                TrackSize::Fixed(100.0),
                TrackSize::STAR,
                TrackSize::Fixed(40.0),
                TrackSize::Fixed(40.0),
                TrackSize::Fixed(40.0),
            ]
        );
    }

    #[test]
    fn test_zero_span_is_clamped() {
        let mut placer = GridPlacer::new(GridConfig::default().with_columns_min_count(2));
        let mut children = items(3);
        children[0].column_span = 0;
        children[0].row_span = 0;
        placer.place(&mut children);

        assert_eq!(cells(&children), vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_place_is_idempotent() {
        let mut placer = GridPlacer::new(GridConfig::default().with_columns("*,auto,40"));
        let mut children = items(8);
        children[1].row_span = 2;
        children[4].column_span = 2;
        children[5].row_height_override = Some(TrackSize::Fixed(12.0));

        placer.place(&mut children);
        let first_cells = cells(&children);
        let first_rows = placer.rows().clone();
        let first_columns = placer.columns().clone();

        placer.place(&mut children);
        assert_eq!(cells(&children), first_cells);
        assert_eq!(placer.rows(), &first_rows);
        assert_eq!(placer.columns(), &first_columns);
    }

    #[test]
    fn test_place_drops_stale_overrides() {
        let mut placer = GridPlacer::new(GridConfig::default().with_columns("*"));
        let mut children = items(1);
        children[0].column_width_override = Some(TrackSize::Fixed(30.0));
        placer.place(&mut children);
        assert_eq!(placer.columns().sizes(), vec![TrackSize::Fixed(30.0)]);

        children[0].column_width_override = None;
        placer.place(&mut children);
        assert_eq!(placer.columns().sizes(), vec![TrackSize::STAR]);
    }

    #[test]
    fn test_place_if_needed_tracks_changes() {
        let mut placer = GridPlacer::new(GridConfig::default().with_columns_min_count(2));
        let mut children = items(4);

        assert!(placer.place_if_needed(&mut children));
        assert!(!placer.is_dirty());
        assert!(!placer.place_if_needed(&mut children));

        placer.invalidate();
        assert!(placer.place_if_needed(&mut children));

        // A different major-axis count is picked up without invalidation
        placer.columns_mut().resize(4, TrackSize::Intrinsic);
        assert!(placer.place_if_needed(&mut children));
        assert_eq!(cells(&children), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_set_config_rebuilds_only_for_track_changes() {
        let mut placer = GridPlacer::new(GridConfig::default().with_columns("10,20"));
        placer.columns_mut().set_size(0, TrackSize::Fixed(99.0));

        let reoriented = placer.config().clone().with_orientation(Orientation::Vertical);
        placer.set_config(reoriented);
        assert!(placer.is_dirty());
        assert_eq!(placer.columns().get(0).unwrap().size, TrackSize::Fixed(99.0));

        let recolumned = placer.config().clone().with_columns("10,20,30");
        placer.set_config(recolumned);
        assert_eq!(
            placer.columns().sizes(),
            vec![TrackSize::Fixed(10.0), TrackSize::Fixed(20.0), TrackSize::Fixed(30.0)]
        );
    }

    #[test]
    fn test_validate() {
        assert!(GridConfig::default().validate().is_ok());
        assert!(GridConfig::default()
            .with_columns("100, *, 2*, auto")
            .validate()
            .is_ok());

        assert_eq!(
            GridConfig::default().with_rows_min_count(0).validate(),
            Err(PlacerError::Config(ConfigError::CountTooSmall {
                field: "rows_min_count",
                value: 0,
            }))
        );
        assert_eq!(
            GridConfig::default().with_columns("100,wide").validate(),
            Err(PlacerError::Parse(ParseError::InvalidTrackSize {
                value: "wide".to_string(),
            }))
        );
        assert!(matches!(
            GridConfig::default()
                .with_row_height(TrackSize::Fixed(f64::NAN))
                .validate(),
            Err(PlacerError::Config(ConfigError::InvalidTrackSize { field: "row_height", .. }))
        ));
    }
}
