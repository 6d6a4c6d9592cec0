use std::fmt;

use serde::Deserialize;

use crate::{FlapPair, SorterError};

/// Where the gate should send the next object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left = 1,
    Center = 2,
    Right = 3,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Left, Direction::Center, Direction::Right];

    pub fn code(self) -> i64 {
        self as i64
    }

    /// Line shown to the operator when this direction is selected
    pub fn status_line(self) -> &'static str {
        match self {
            Direction::Left => "Sorting to LEFT...",
            Direction::Center => "Staying at CENTER...",
            Direction::Right => "Sorting to RIGHT...",
        }
    }
}

impl TryFrom<i64> for Direction {
    type Error = SorterError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Direction::Left),
            2 => Ok(Direction::Center),
            3 => Ok(Direction::Right),
            other => Err(SorterError::InvalidDirection(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "LEFT",
            Direction::Center => "CENTER",
            Direction::Right => "RIGHT",
        };
        f.write_str(name)
    }
}

/// Message shown to the operator for a code outside 1..=3
pub const INVALID_DIRECTION_MESSAGE: &str = "Invalid direction! Use 1, 2, or 3.";

/// Per-direction overrides read from the `[directions]` config table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectionOverrides {
    pub left: Option<[f64; 2]>,
    pub center: Option<[f64; 2]>,
    pub right: Option<[f64; 2]>,
}

/// Lookup table from direction to flap angles
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionPolicy {
    left: FlapPair,
    center: FlapPair,
    right: FlapPair,
}

impl Default for DirectionPolicy {
    fn default() -> Self {
        DirectionPolicy {
            // left flap opens, right flap closes
            left: FlapPair::new(65.0, 50.0),
            center: FlapPair::NEUTRAL,
            // left flap closes, right flap opens
            right: FlapPair::new(130.0, 120.0),
        }
    }
}

impl DirectionPolicy {
    pub fn with_overrides(overrides: &DirectionOverrides) -> Self {
        let mut policy = Self::default();
        if let Some([l, r]) = overrides.left {
            policy.left = FlapPair::new(l, r);
        }
        if let Some([l, r]) = overrides.center {
            policy.center = FlapPair::new(l, r);
        }
        if let Some([l, r]) = overrides.right {
            policy.right = FlapPair::new(l, r);
        }
        policy
    }

    pub fn angles_for(&self, direction: Direction) -> FlapPair {
        match direction {
            Direction::Left => self.left,
            Direction::Center => self.center,
            Direction::Right => self.right,
        }
    }

    /// Resolve an operator direction code to target flap angles.
    pub fn resolve(&self, code: i64) -> Result<(Direction, FlapPair), SorterError> {
        let direction = Direction::try_from(code)?;
        let pair = self.angles_for(direction);
        log::debug!(
            "direction {} -> left {}°, right {}°",
            direction,
            pair.left,
            pair.right
        );
        Ok((direction, pair))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let policy = DirectionPolicy::default();
        assert_eq!(policy.resolve(1).unwrap().1, FlapPair::new(65.0, 50.0));
        assert_eq!(policy.resolve(2).unwrap().1, FlapPair::new(90.0, 90.0));
        assert_eq!(policy.resolve(3).unwrap().1, FlapPair::new(130.0, 120.0));
    }

    #[test]
    fn test_resolve_reports_direction() {
        let policy = DirectionPolicy::default();
        assert_eq!(policy.resolve(1).unwrap().0, Direction::Left);
        assert_eq!(policy.resolve(2).unwrap().0, Direction::Center);
        assert_eq!(policy.resolve(3).unwrap().0, Direction::Right);
    }

    #[test]
    fn test_invalid_codes() {
        let policy = DirectionPolicy::default();
        for code in [0, 4, -1, 42, i64::MAX] {
            match policy.resolve(code) {
                Err(SorterError::InvalidDirection(c)) => assert_eq!(c, code),
                other => panic!("Expected InvalidDirection for {}, got {:?}", code, other),
            }
        }
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(Direction::Left.status_line(), "Sorting to LEFT...");
        assert_eq!(Direction::Center.status_line(), "Staying at CENTER...");
        assert_eq!(Direction::Right.status_line(), "Sorting to RIGHT...");
    }

    #[test]
    fn test_codes_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::try_from(direction.code()).unwrap(), direction);
        }
    }

    #[test]
    fn test_overrides_replace_only_given_entries() {
        let overrides = DirectionOverrides {
            left: Some([70.0, 45.0]),
            center: None,
            right: None,
        };
        let policy = DirectionPolicy::with_overrides(&overrides);
        assert_eq!(policy.angles_for(Direction::Left), FlapPair::new(70.0, 45.0));
        assert_eq!(policy.angles_for(Direction::Center), FlapPair::NEUTRAL);
        assert_eq!(policy.angles_for(Direction::Right), FlapPair::new(130.0, 120.0));
    }
}
