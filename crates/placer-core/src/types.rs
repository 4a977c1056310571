//! Value types and configuration enums for the grid and radial panels.

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseError;

/// Sizing rule of a row or column track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackSize {
    /// Fixed size in pixels
    Fixed(f64),
    /// Weighted share of the space left after fixed and intrinsic tracks ("star")
    Proportional(f64),
    /// Sized to the content of the track ("auto")
    #[default]
    Intrinsic,
}

impl TrackSize {
    /// A proportional track of weight 1 (`*`).
    pub const STAR: TrackSize = TrackSize::Proportional(1.0);

    pub fn is_proportional(&self) -> bool {
        matches!(self, Self::Proportional(_))
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Self::Intrinsic)
    }

    /// Get the star weight, or 0.0 if not proportional.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Proportional(weight) => *weight,
            _ => 0.0,
        }
    }
}

impl fmt::Display for TrackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(px) => write!(f, "{px}"),
            Self::Proportional(weight) if *weight == 1.0 => f.write_str("*"),
            Self::Proportional(weight) => write!(f, "{weight}*"),
            Self::Intrinsic => f.write_str("Auto"),
        }
    }
}

/// Row and column position of a grid child (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
}

impl GridCell {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Fill direction of the auto-indexing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Row-major: fill across the columns of a row, then move down
    #[default]
    Horizontal,
    /// Column-major: fill down the rows of a column, then move right
    Vertical,
}

/// Horizontal alignment of a child inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
    #[default]
    Stretch,
}

/// Vertical alignment of a child inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    #[default]
    Stretch,
}

/// Unit in which radial distances (radii, center offsets) are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceUnit {
    /// Percentage of the container size along the same axis
    #[default]
    PercentageOfPanelSize,
    /// Raw pixels
    AbsolutePositioning,
}

/// How the X and Y radii of a radial panel are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RadiusUse {
    /// Independent radii: children follow an ellipse
    XAndY,
    /// Both radii take the X radius
    XOnly,
    /// Both radii take the Y radius
    YOnly,
    /// Both radii take the smaller of the two
    #[default]
    Smallest,
    /// Both radii take the greater of the two
    Greatest,
    /// Both radii take their mean
    Average,
}

/// How children of a radial panel rotate themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationFollowing {
    /// Only the child's local angle offset is applied
    #[default]
    None,
    /// Children are rotated to face the center of the panel
    FaceCenter,
}

/// Lowercase a keyword and drop separators so `Look-At the_Center` matches `lookatthecenter`.
fn normalize_keyword(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn unknown(kind: &'static str, value: &str) -> ParseError {
    ParseError::UnknownKeyword {
        kind,
        value: value.to_string(),
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(s).as_str() {
            "horizontal" | "rowmajor" | "row" => Ok(Self::Horizontal),
            "vertical" | "columnmajor" | "column" => Ok(Self::Vertical),
            _ => Err(unknown("orientation", s)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
        })
    }
}

impl FromStr for HorizontalAlignment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(s).as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            "stretch" => Ok(Self::Stretch),
            _ => Err(unknown("horizontal alignment", s)),
        }
    }
}

impl fmt::Display for HorizontalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "Left",
            Self::Center => "Center",
            Self::Right => "Right",
            Self::Stretch => "Stretch",
        })
    }
}

impl FromStr for VerticalAlignment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(s).as_str() {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            "stretch" => Ok(Self::Stretch),
            _ => Err(unknown("vertical alignment", s)),
        }
    }
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "Top",
            Self::Center => "Center",
            Self::Bottom => "Bottom",
            Self::Stretch => "Stretch",
        })
    }
}

impl FromStr for DistanceUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(s).as_str() {
            "percentageofpanelsize" | "percentage" | "percent" | "%" => {
                Ok(Self::PercentageOfPanelSize)
            }
            "absolutepositioning" | "absolute" | "px" => Ok(Self::AbsolutePositioning),
            _ => Err(unknown("distance unit", s)),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PercentageOfPanelSize => "PercentageOfPanelSize",
            Self::AbsolutePositioning => "AbsolutePositioning",
        })
    }
}

impl FromStr for RadiusUse {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(s).as_str() {
            "radiusxandy" | "xandy" => Ok(Self::XAndY),
            "radiusxonly" | "xonly" => Ok(Self::XOnly),
            "radiusyonly" | "yonly" => Ok(Self::YOnly),
            "smallestradius" | "smallest" => Ok(Self::Smallest),
            "greatestradius" | "greatest" => Ok(Self::Greatest),
            "averageradius" | "average" => Ok(Self::Average),
            _ => Err(unknown("radius use", s)),
        }
    }
}

impl fmt::Display for RadiusUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::XAndY => "RadiusXAndY",
            Self::XOnly => "RadiusXOnly",
            Self::YOnly => "RadiusYOnly",
            Self::Smallest => "SmallestRadius",
            Self::Greatest => "GreatestRadius",
            Self::Average => "AverageRadius",
        })
    }
}

impl FromStr for RotationFollowing {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(s).as_str() {
            "none" => Ok(Self::None),
            "lookatthecenter" | "facecenter" => Ok(Self::FaceCenter),
            _ => Err(unknown("rotation following", s)),
        }
    }
}

impl fmt::Display for RotationFollowing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "None",
            Self::FaceCenter => "LookAtTheCenter",
        })
    }
}
