//! Grammar rules for track lists and shared-size-group lists.
//!
//! A token is classified in a fixed order: anything containing `*` is a
//! ratio, then a plain number is a pixel size, then `auto` is intrinsic.

use placer_core::{ParseError, TrackSize};
use tracing::debug;

use crate::lexer::{auto_keyword, whole_number};

/// Parse one track token strictly.
///
/// A bare `*` is a ratio of weight 1. Negative and non-finite numbers are
/// rejected.
pub fn parse_track_size(token: &str) -> Result<TrackSize, ParseError> {
    if token.contains('*') {
        let ratio: String = token.chars().filter(|&c| c != '*').collect();
        if ratio.trim().is_empty() {
            return Ok(TrackSize::STAR);
        }
        return match whole_number(&ratio) {
            Ok((_, weight)) if weight.is_finite() && weight >= 0.0 => {
                Ok(TrackSize::Proportional(weight))
            }
            _ => Err(ParseError::InvalidNumber {
                value: token.trim().to_string(),
            }),
        };
    }

    if let Ok((_, px)) = whole_number(token) {
        return if px.is_finite() && px >= 0.0 {
            Ok(TrackSize::Fixed(px))
        } else {
            Err(ParseError::InvalidNumber {
                value: token.trim().to_string(),
            })
        };
    }

    if auto_keyword(token).is_ok() {
        return Ok(TrackSize::Intrinsic);
    }

    Err(ParseError::InvalidTrackSize {
        value: token.trim().to_string(),
    })
}

/// Parse a comma separated track list, never failing.
///
/// Malformed ratios become `*`; every other malformed token becomes
/// `default`. The result always has one entry per comma separated token,
/// so an empty string yields a single `default`.
pub fn parse_tracks(text: &str, default: TrackSize) -> Vec<TrackSize> {
    text.split(',')
        .map(|token| match parse_track_size(token) {
            Ok(size) => size,
            Err(err) => {
                let fallback = if token.contains('*') {
                    TrackSize::STAR
                } else {
                    default
                };
                if !token.trim().is_empty() {
                    debug!(%err, %fallback, "malformed track definition");
                }
                fallback
            }
        })
        .collect()
}

/// Parse a comma separated list of shared-size-group names.
///
/// Blank entries stay as `None` so the names keep their track positions.
pub fn parse_shared_groups(text: &str) -> Vec<Option<String>> {
    text.split(',')
        .map(|group| {
            let group = group.trim();
            if group.is_empty() {
                None
            } else {
                Some(group.to_string())
            }
        })
        .collect()
}
