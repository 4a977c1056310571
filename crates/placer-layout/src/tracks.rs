//! Row and column track lists.
//!
//! A track list is rebuilt wholesale from its textual definition whenever
//! the definition changes. Between rebuilds the grid placer only grows or
//! truncates the auto-generated axis and rewrites individual sizes for
//! child overrides.

use indexmap::IndexMap;
use placer_core::TrackSize;
use placer_parser::{parse_shared_groups, parse_tracks};
use tracing::debug;

/// A single row or column definition.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    /// Sizing rule
    pub size: TrackSize,
    /// Name of the shared-size group this track belongs to
    pub shared_group: Option<String>,
}

impl Track {
    pub fn new(size: TrackSize) -> Self {
        Self {
            size,
            shared_group: None,
        }
    }

    /// Put the track in a shared-size group.
    pub fn with_shared_group(mut self, group: impl Into<String>) -> Self {
        self.shared_group = Some(group.into());
        self
    }
}

/// Ordered tracks of one axis. The index of a track is its identity.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TrackList {
    tracks: Vec<Track>,
}

impl TrackList {
    /// Create an empty track list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a track list with one track per size.
    pub fn from_sizes(sizes: impl IntoIterator<Item = TrackSize>) -> Self {
        Self {
            tracks: sizes.into_iter().map(Track::new).collect(),
        }
    }

    /// Build a track list from its textual definition.
    ///
    /// The list holds `max(1, min_count, explicit tracks)` tracks. Tracks
    /// past the explicit definitions use `default`; shared groups are
    /// assigned by position.
    pub fn build(spec: &str, shared_groups: &str, min_count: usize, default: TrackSize) -> Self {
        let sizes = parse_tracks(spec, default);
        let groups = parse_shared_groups(shared_groups);
        let count = min_count.max(sizes.len()).max(1);

        let tracks = (0..count)
            .map(|i| Track {
                size: sizes.get(i).copied().unwrap_or(default),
                shared_group: groups.get(i).cloned().flatten(),
            })
            .collect();

        debug!(count, explicit = sizes.len(), min_count, "rebuilt track list");
        Self { tracks }
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Get a track by index.
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Iterate over the tracks in order.
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Sizes of all tracks in order.
    pub fn sizes(&self) -> Vec<TrackSize> {
        self.tracks.iter().map(|t| t.size).collect()
    }

    /// Overwrite the size of one track. Returns false if the index is out of range.
    pub fn set_size(&mut self, index: usize, size: TrackSize) -> bool {
        match self.tracks.get_mut(index) {
            Some(track) => {
                track.size = size;
                true
            }
            None => false,
        }
    }

    /// Grow or truncate to `count` tracks.
    ///
    /// Retained tracks keep their size and group; added tracks use `default`.
    pub fn resize(&mut self, count: usize, default: TrackSize) {
        if count != self.tracks.len() {
            debug!(from = self.tracks.len(), to = count, "resizing track list");
        }
        self.tracks.resize_with(count, || Track::new(default));
    }

    /// Grow to at least `count` tracks, never truncating.
    pub fn ensure_len(&mut self, count: usize, default: TrackSize) {
        if count > self.tracks.len() {
            self.resize(count, default);
        }
    }

    /// Track indices of every shared-size group, in order of first appearance.
    pub fn shared_groups(&self) -> IndexMap<&str, Vec<usize>> {
        let mut groups: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (index, track) in self.tracks.iter().enumerate() {
            if let Some(name) = track.shared_group.as_deref() {
                groups.entry(name).or_default().push(index);
            }
        }
        groups
    }
}
