//! Turning assigned cells into rectangles.
//!
//! A single pass over each axis: fixed tracks take their pixels, intrinsic
//! tracks the largest single-span child in them, shared groups equalise,
//! and proportional tracks split whatever is left by weight.

use placer_core::{HorizontalAlignment, Rect, Size, TrackSize, VerticalAlignment};
use tracing::trace;

use crate::grid::GridChild;
use crate::tracks::TrackList;

#[derive(Debug, Clone, Copy)]
enum Axis {
    Row,
    Column,
}

impl Axis {
    /// Start index, span and margin-inclusive desired extent of a child on this axis.
    fn extent<C: GridChild>(self, child: &C) -> (usize, usize, f64) {
        let desired = child
            .desired_size()
            .inflate(child.margin().unwrap_or_default());
        match self {
            Axis::Row => (child.cell().row, child.row_span().max(1), desired.height),
            Axis::Column => (child.cell().column, child.column_span().max(1), desired.width),
        }
    }
}

/// Compute the rectangle of every child, in child order.
///
/// Cells past the last track are clamped to it and spans are clipped at the
/// end of the axis.
pub fn arrange_grid<C: GridChild>(
    rows: &TrackList,
    columns: &TrackList,
    children: &[C],
    final_size: Size,
) -> Vec<Rect> {
    if rows.is_empty() || columns.is_empty() {
        return vec![Rect::default(); children.len()];
    }

    let row_sizes = resolve_tracks(rows, final_size.height, children, Axis::Row);
    let column_sizes = resolve_tracks(columns, final_size.width, children, Axis::Column);
    let row_positions = calculate_positions(&row_sizes);
    let column_positions = calculate_positions(&column_sizes);

    children
        .iter()
        .map(|child| {
            let (y, height) = slot(&row_positions, &row_sizes, Axis::Row.extent(child));
            let (x, width) = slot(&column_positions, &column_sizes, Axis::Column.extent(child));

            let area = Rect::new(x, y, width, height).deflate(child.margin().unwrap_or_default());
            let rect = align(area, child.desired_size(), child.horizontal_alignment(), child.vertical_alignment());
            trace!(row = child.cell().row, column = child.cell().column, ?rect, "arranged grid child");
            rect
        })
        .collect()
}

/// Offset and length of a span of tracks.
fn slot(positions: &[f64], sizes: &[f64], (index, span, _): (usize, usize, f64)) -> (f64, f64) {
    let last = sizes.len() - 1;
    let start = index.min(last);
    let end = start.saturating_add(span).min(sizes.len());
    (positions[start], sizes[start..end].iter().sum())
}

fn resolve_tracks<C: GridChild>(tracks: &TrackList, available: f64, children: &[C], axis: Axis) -> Vec<f64> {
    let count = tracks.len();
    let mut sizes: Vec<f64> = tracks
        .iter()
        .map(|track| match track.size {
            TrackSize::Fixed(px) => px,
            TrackSize::Proportional(_) | TrackSize::Intrinsic => 0.0,
        })
        .collect();

    // Intrinsic tracks only grow for children that do not span
    for child in children {
        let (index, span, desired) = axis.extent(child);
        if span != 1 {
            continue;
        }
        let index = index.min(count - 1);
        if tracks.get(index).is_some_and(|t| t.size.is_intrinsic()) {
            sizes[index] = sizes[index].max(desired);
        }
    }

    for (_, members) in tracks.shared_groups() {
        let sized: Vec<usize> = members
            .into_iter()
            .filter(|&i| tracks.get(i).is_some_and(|t| !t.size.is_proportional()))
            .collect();
        let shared = sized.iter().map(|&i| sizes[i]).fold(0.0_f64, f64::max);
        for i in sized {
            sizes[i] = shared;
        }
    }

    let used: f64 = tracks
        .iter()
        .zip(&sizes)
        .filter(|(track, _)| !track.size.is_proportional())
        .map(|(_, size)| size)
        .sum();
    let weight_total: f64 = tracks.iter().map(|t| t.size.weight()).sum();

    if weight_total > 0.0 && available.is_finite() {
        let unit = (available - used).max(0.0) / weight_total;
        for (size, track) in sizes.iter_mut().zip(tracks.iter()) {
            if track.size.is_proportional() {
                *size = track.size.weight() * unit;
            }
        }
    }

    sizes
}

fn calculate_positions(sizes: &[f64]) -> Vec<f64> {
    let mut positions = Vec::with_capacity(sizes.len());
    let mut current = 0.0;
    for size in sizes {
        positions.push(current);
        current += size;
    }
    positions
}

/// Place a child of `desired` size inside `area`.
fn align(
    area: Rect,
    desired: Size,
    horizontal: Option<HorizontalAlignment>,
    vertical: Option<VerticalAlignment>,
) -> Rect {
    let horizontal = horizontal.unwrap_or_default();
    let vertical = vertical.unwrap_or_default();

    let width = match horizontal {
        HorizontalAlignment::Stretch => area.width,
        _ => desired.width.min(area.width),
    };
    let height = match vertical {
        VerticalAlignment::Stretch => area.height,
        _ => desired.height.min(area.height),
    };

    let x = area.x
        + match horizontal {
            HorizontalAlignment::Left | HorizontalAlignment::Stretch => 0.0,
            HorizontalAlignment::Center => (area.width - width) / 2.0,
            HorizontalAlignment::Right => area.width - width,
        };
    let y = area.y
        + match vertical {
            VerticalAlignment::Top | VerticalAlignment::Stretch => 0.0,
            VerticalAlignment::Center => (area.height - height) / 2.0,
            VerticalAlignment::Bottom => area.height - height,
        };

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridItem;
    use placer_core::{GridCell, Thickness};

    fn at(row: usize, column: usize, width: f64, height: f64) -> GridItem {
        GridItem::new(Size::new(width, height)).pinned(GridCell::new(row, column))
    }

    #[test]
    fn test_fixed_tracks() {
        let rows = TrackList::build("50,50", "", 1, TrackSize::Intrinsic);
        let columns = TrackList::build("100,100", "", 1, TrackSize::Intrinsic);
        let children = vec![at(0, 0, 0.0, 0.0), at(0, 1, 0.0, 0.0), at(1, 0, 0.0, 0.0), at(1, 1, 0.0, 0.0)];

        let result = arrange_grid(&rows, &columns, &children, Size::new(200.0, 100.0));

        assert_eq!(result.len(), 4);
        assert_eq!(result[0], Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(result[1], Rect::new(100.0, 0.0, 100.0, 50.0));
        assert_eq!(result[2], Rect::new(0.0, 50.0, 100.0, 50.0));
        assert_eq!(result[3], Rect::new(100.0, 50.0, 100.0, 50.0));
    }

    #[test]
    fn test_proportional_tracks_split_remainder() {
        let rows = TrackList::build("100", "", 1, TrackSize::Intrinsic);
        let columns = TrackList::build("60,*,2*", "", 1, TrackSize::Intrinsic);
        let children = vec![at(0, 1, 0.0, 0.0), at(0, 2, 0.0, 0.0)];

        let result = arrange_grid(&rows, &columns, &children, Size::new(360.0, 100.0));

        // 300px left after the fixed column: 1* = 100px, 2* = 200px
        assert!((result[0].x - 60.0).abs() < 0.001);
        assert!((result[0].width - 100.0).abs() < 0.001);
        assert!((result[1].x - 160.0).abs() < 0.001);
        assert!((result[1].width - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_intrinsic_tracks_fit_content() {
        let rows = TrackList::build("auto", "", 1, TrackSize::Intrinsic);
        let columns = TrackList::build("auto,auto", "", 1, TrackSize::Intrinsic);
        let children = vec![
            at(0, 0, 30.0, 10.0),
            at(0, 0, 20.0, 25.0).with_margin(Thickness::uniform(5.0)),
            at(0, 1, 15.0, 5.0),
        ];

        let result = arrange_grid(&rows, &columns, &children, Size::new(500.0, 500.0));

        // Column 0 is max(30, 20 + 10) wide, the row is 25 + 10 tall
        assert!((result[0].width - 30.0).abs() < 0.001);
        assert!((result[0].height - 35.0).abs() < 0.001);
        assert!((result[2].x - 30.0).abs() < 0.001);
        assert!((result[2].width - 15.0).abs() < 0.001);
    }

    #[test]
    fn test_spanning_child_does_not_size_intrinsic_tracks() {
        let rows = TrackList::build("20", "", 1, TrackSize::Intrinsic);
        let columns = TrackList::build("auto,auto", "", 1, TrackSize::Intrinsic);
        let children = vec![at(0, 0, 80.0, 20.0).with_column_span(2), at(0, 1, 10.0, 20.0)];

        let result = arrange_grid(&rows, &columns, &children, Size::new(500.0, 20.0));

        assert!((result[0].width - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_shared_group_equalises_tracks() {
        let rows = TrackList::build("40", "", 1, TrackSize::Intrinsic);
        let columns = TrackList::build("auto,*,auto", "label,,label", 1, TrackSize::Intrinsic);
        let children = vec![at(0, 0, 30.0, 10.0), at(0, 1, 0.0, 0.0), at(0, 2, 60.0, 10.0)];

        let result = arrange_grid(&rows, &columns, &children, Size::new(200.0, 40.0));

        assert!((result[0].width - 60.0).abs() < 0.001);
        assert!((result[2].width - 60.0).abs() < 0.001);
        assert!((result[1].width - 80.0).abs() < 0.001);
        assert!((result[2].x - 140.0).abs() < 0.001);
    }

    #[test]
    fn test_span_covers_consecutive_tracks() {
        let rows = TrackList::build("30,30", "", 1, TrackSize::Intrinsic);
        let columns = TrackList::build("100,100", "", 1, TrackSize::Intrinsic);
        let children = vec![at(0, 0, 0.0, 0.0).with_column_span(2).with_row_span(5)];

        let result = arrange_grid(&rows, &columns, &children, Size::new(200.0, 60.0));

        // The row span is clipped at the last row
        assert_eq!(result[0], Rect::new(0.0, 0.0, 200.0, 60.0));
    }

    #[test]
    fn test_out_of_range_cell_is_clamped() {
        let rows = TrackList::build("10,20", "", 1, TrackSize::Intrinsic);
        let columns = TrackList::build("5,15", "", 1, TrackSize::Intrinsic);
        let children = vec![at(9, 9, 0.0, 0.0)];

        let result = arrange_grid(&rows, &columns, &children, Size::new(20.0, 30.0));

        assert_eq!(result[0], Rect::new(5.0, 10.0, 15.0, 20.0));
    }

    #[test]
    fn test_alignment_and_margin() {
        let rows = TrackList::build("100", "", 1, TrackSize::Intrinsic);
        let columns = TrackList::build("100,100,100", "", 1, TrackSize::Intrinsic);
        let children = vec![
            at(0, 0, 40.0, 20.0).with_margin(Thickness::uniform(10.0)),
            at(0, 1, 40.0, 20.0).with_alignment(HorizontalAlignment::Center, VerticalAlignment::Bottom),
            at(0, 2, 40.0, 20.0)
                .with_margin(Thickness::new(0.0, 0.0, 10.0, 0.0))
                .with_alignment(HorizontalAlignment::Right, VerticalAlignment::Center),
        ];

        let result = arrange_grid(&rows, &columns, &children, Size::new(300.0, 100.0));

        // Unset alignment stretches inside the margin
        assert_eq!(result[0], Rect::new(10.0, 10.0, 80.0, 80.0));
        assert_eq!(result[1], Rect::new(130.0, 80.0, 40.0, 20.0));
        assert_eq!(result[2], Rect::new(250.0, 40.0, 40.0, 20.0));
    }

    #[test]
    fn test_no_children() {
        let tracks = TrackList::build("*", "", 1, TrackSize::Intrinsic);
        let children: Vec<GridItem> = Vec::new();
        assert!(arrange_grid(&tracks, &tracks, &children, Size::new(10.0, 10.0)).is_empty());
    }
}
