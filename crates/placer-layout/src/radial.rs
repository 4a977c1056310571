//! Radial (polar) placement.
//!
//! Children are spread evenly around an ellipse centred in the container,
//! starting at the base angle and moving counter-clockwise unless
//! configured otherwise. Angles are in degrees, 0° pointing right and 90°
//! pointing up; the container's y axis points down.

use glam::DVec2;
use placer_core::{
    ConfigError, DistanceUnit, PlacerError, RadiusUse, Rect, RotationFollowing, Size,
};
use tracing::{debug, trace};

/// Radial configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RadialConfig {
    /// Angle of the first child
    pub base_angle: f64,
    pub clockwise: bool,
    pub radius_x: f64,
    pub radius_x_unit: DistanceUnit,
    pub radius_y: f64,
    pub radius_y_unit: DistanceUnit,
    pub radius_use: RadiusUse,
    /// Offset of the ellipse centre from the container centre
    pub center_offset_x: f64,
    pub center_offset_x_unit: DistanceUnit,
    pub center_offset_y: f64,
    pub center_offset_y_unit: DistanceUnit,
    pub rotation_following: RotationFollowing,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            base_angle: 0.0,
            clockwise: false,
            radius_x: 50.0,
            radius_x_unit: DistanceUnit::PercentageOfPanelSize,
            radius_y: 50.0,
            radius_y_unit: DistanceUnit::PercentageOfPanelSize,
            radius_use: RadiusUse::Smallest,
            center_offset_x: 0.0,
            center_offset_x_unit: DistanceUnit::PercentageOfPanelSize,
            center_offset_y: 0.0,
            center_offset_y_unit: DistanceUnit::PercentageOfPanelSize,
            rotation_following: RotationFollowing::None,
        }
    }
}

impl RadialConfig {
    pub fn with_base_angle(mut self, degrees: f64) -> Self {
        self.base_angle = degrees;
        self
    }

    pub fn with_clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    /// Set both radii in the same unit.
    pub fn with_radius(mut self, x: f64, y: f64, unit: DistanceUnit) -> Self {
        self.radius_x = x;
        self.radius_y = y;
        self.radius_x_unit = unit;
        self.radius_y_unit = unit;
        self
    }

    pub fn with_radius_x(mut self, value: f64, unit: DistanceUnit) -> Self {
        self.radius_x = value;
        self.radius_x_unit = unit;
        self
    }

    pub fn with_radius_y(mut self, value: f64, unit: DistanceUnit) -> Self {
        self.radius_y = value;
        self.radius_y_unit = unit;
        self
    }

    pub fn with_radius_use(mut self, radius_use: RadiusUse) -> Self {
        self.radius_use = radius_use;
        self
    }

    /// Set the centre offset in the same unit on both axes.
    pub fn with_center_offset(mut self, x: f64, y: f64, unit: DistanceUnit) -> Self {
        self.center_offset_x = x;
        self.center_offset_y = y;
        self.center_offset_x_unit = unit;
        self.center_offset_y_unit = unit;
        self
    }

    pub fn with_rotation_following(mut self, rotation: RotationFollowing) -> Self {
        self.rotation_following = rotation;
        self
    }

    /// Reject non-finite angles and distances.
    pub fn validate(&self) -> Result<(), PlacerError> {
        let fields = [
            ("base_angle", self.base_angle),
            ("radius_x", self.radius_x),
            ("radius_y", self.radius_y),
            ("center_offset_x", self.center_offset_x),
            ("center_offset_y", self.center_offset_y),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value }.into());
            }
        }
        Ok(())
    }
}

/// Where a radial child ended up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadialPlacement {
    /// Rectangle of the child, centred on its point of the ellipse
    pub bounds: Rect,
    /// Rotation to apply to the child, in degrees
    pub facing_angle: f64,
}

/// Layout attributes a child exposes to the radial placer.
pub trait RadialChild {
    fn desired_size(&self) -> Size;

    /// Added to the child's evenly spaced angle.
    fn angle_offset(&self) -> f64 {
        0.0
    }

    /// Added to the child's own rotation.
    fn local_angle_offset(&self) -> f64 {
        0.0
    }

    /// Added to the container's X radius, in the X radius unit.
    fn radius_x_offset(&self) -> f64 {
        0.0
    }

    /// Added to the container's Y radius, in the Y radius unit.
    fn radius_y_offset(&self) -> f64 {
        0.0
    }

    /// Receive the computed placement. Does nothing unless overridden.
    fn set_placement(&mut self, _placement: RadialPlacement) {}
}

/// A plain radial child carrying its attributes as fields.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadialItem {
    pub desired_size: Size,
    pub angle_offset: f64,
    pub local_angle_offset: f64,
    pub radius_x_offset: f64,
    pub radius_y_offset: f64,
    /// Last placement written by the placer
    pub placement: Option<RadialPlacement>,
}

impl RadialItem {
    pub fn new(desired_size: Size) -> Self {
        Self {
            desired_size,
            ..Default::default()
        }
    }

    pub fn with_angle_offset(mut self, degrees: f64) -> Self {
        self.angle_offset = degrees;
        self
    }

    pub fn with_local_angle_offset(mut self, degrees: f64) -> Self {
        self.local_angle_offset = degrees;
        self
    }

    pub fn with_radius_offset(mut self, x: f64, y: f64) -> Self {
        self.radius_x_offset = x;
        self.radius_y_offset = y;
        self
    }
}

impl RadialChild for RadialItem {
    fn desired_size(&self) -> Size {
        self.desired_size
    }

    fn angle_offset(&self) -> f64 {
        self.angle_offset
    }

    fn local_angle_offset(&self) -> f64 {
        self.local_angle_offset
    }

    fn radius_x_offset(&self) -> f64 {
        self.radius_x_offset
    }

    fn radius_y_offset(&self) -> f64 {
        self.radius_y_offset
    }

    fn set_placement(&mut self, placement: RadialPlacement) {
        self.placement = Some(placement);
    }
}

/// Resolve a distance against a container dimension.
///
/// Percentages are of half the dimension, so 100% reaches the container edge.
fn resolve_distance(value: f64, unit: DistanceUnit, dimension: f64) -> f64 {
    match unit {
        DistanceUnit::PercentageOfPanelSize => dimension * value / 200.0,
        DistanceUnit::AbsolutePositioning => value,
    }
}

/// Places children around an ellipse. Stateless between passes.
#[derive(Debug, Clone, Default)]
pub struct RadialPlacer {
    config: RadialConfig,
}

impl RadialPlacer {
    pub fn new(config: RadialConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RadialConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RadialConfig) {
        self.config = config;
    }

    /// Place every child inside a container of `final_size`.
    ///
    /// Each placement is written back through [`RadialChild::set_placement`]
    /// and also returned, in child order.
    pub fn arrange<C: RadialChild>(&self, children: &mut [C], final_size: Size) -> Vec<RadialPlacement> {
        let count = children.len();
        if count == 0 {
            return Vec::new();
        }

        let config = &self.config;
        let step = if config.clockwise {
            -360.0 / count as f64
        } else {
            360.0 / count as f64
        };
        let center = final_size.to_vec() / 2.0
            + DVec2::new(
                resolve_distance(config.center_offset_x, config.center_offset_x_unit, final_size.width),
                resolve_distance(config.center_offset_y, config.center_offset_y_unit, final_size.height),
            );

        debug!(children = count, step, ?center, "arranging radial children");

        children
            .iter_mut()
            .enumerate()
            .map(|(index, child)| {
                let angle = config.base_angle + index as f64 * step + child.angle_offset();
                let radii = self.radii(child, final_size);
                let (sin, cos) = angle.to_radians().sin_cos();
                let point = DVec2::new(cos * radii.x, -sin * radii.y);

                let size = child.desired_size();
                let origin = center + point - size.to_vec() / 2.0;
                let facing_angle = match config.rotation_following {
                    RotationFollowing::FaceCenter => -angle + child.local_angle_offset(),
                    RotationFollowing::None => child.local_angle_offset(),
                };

                let placement = RadialPlacement {
                    bounds: Rect::from_origin_size(origin, size),
                    facing_angle,
                };
                trace!(index, angle, ?radii, facing_angle, "placed radial child");
                child.set_placement(placement);
                placement
            })
            .collect()
    }

    /// Effective radii of one child after unit resolution and combination.
    fn radii<C: RadialChild>(&self, child: &C, final_size: Size) -> DVec2 {
        let config = &self.config;
        let rx = resolve_distance(
            config.radius_x + child.radius_x_offset(),
            config.radius_x_unit,
            final_size.width,
        );
        let ry = resolve_distance(
            config.radius_y + child.radius_y_offset(),
            config.radius_y_unit,
            final_size.height,
        );

        match config.radius_use {
            RadiusUse::XAndY => DVec2::new(rx, ry),
            RadiusUse::XOnly => DVec2::splat(rx),
            RadiusUse::YOnly => DVec2::splat(ry),
            RadiusUse::Smallest => DVec2::splat(rx.min(ry)),
            RadiusUse::Greatest => DVec2::splat(rx.max(ry)),
            RadiusUse::Average => DVec2::splat((rx + ry) / 2.0),
        }
    }
}
