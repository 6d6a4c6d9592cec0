use hal::{Point2d, Vector2d};

use crate::angle::NEUTRAL_ANGLE;

/// Target angles for the two flaps, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlapPair {
    pub left: f64,
    pub right: f64,
}

impl FlapPair {
    /// Both flaps centered
    pub const NEUTRAL: FlapPair = FlapPair {
        left: NEUTRAL_ANGLE,
        right: NEUTRAL_ANGLE,
    };

    pub fn new(left: f64, right: f64) -> Self {
        FlapPair { left, right }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for FlapPair {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Plot window bounds, in flap-length units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

pub const VIEWPORT: Viewport = Viewport {
    x_min: -2.0,
    x_max: 2.0,
    y_min: -1.5,
    y_max: 1.5,
};

pub const FLAP_LENGTH: f64 = 1.0;

/// A flap drawn as a line from its hinge to its tip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub pivot: Point2d,
    pub tip: Point2d,
}

/// Plot geometry for one commanded flap pair.
///
/// The left flap hinges at (-1, 0) and the right at (1, 0). The right flap
/// is mirrored (its direction is `π - angle`) so equal angles on both sides
/// lean symmetrically toward each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlapGeometry {
    pub pair: FlapPair,
    pub left: Segment,
    pub right: Segment,
}

impl FlapGeometry {
    pub fn left_pivot() -> Point2d {
        Point2d::new(-1.0, 0.0)
    }

    pub fn right_pivot() -> Point2d {
        Point2d::new(1.0, 0.0)
    }

    pub fn from_pair(pair: FlapPair) -> Self {
        let left_rad = pair.left.to_radians();
        let right_rad = std::f64::consts::PI - pair.right.to_radians();

        FlapGeometry {
            pair,
            left: Self::segment(Self::left_pivot(), left_rad),
            right: Self::segment(Self::right_pivot(), right_rad),
        }
    }

    fn segment(pivot: Point2d, direction_rad: f64) -> Segment {
        let offset = Vector2d::new(direction_rad.cos(), direction_rad.sin()) * FLAP_LENGTH;
        Segment {
            pivot,
            tip: pivot + offset,
        }
    }

    pub fn title(&self) -> String {
        format!(
            "Left Flap: {}°, Right Flap: {}°",
            self.pair.left, self.pair.right
        )
    }
}
