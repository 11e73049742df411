//! Passive records placed on a [`Board`](crate::board::Board).

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::board::BoardError;

/// A cell coordinate. `x` grows to the east, `y` grows to the south.
pub type GridPos = IVec2;

/// Battery charge a robot starts with unless told otherwise.
pub const DEFAULT_BATTERY: u32 = 5;

/// One of the four cardinal directions a robot can step in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in the order perception reports them.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Unit offset of a single step.
    pub fn offset(self) -> GridPos {
        match self {
            Self::North => IVec2::NEG_Y,
            Self::South => IVec2::Y,
            Self::West => IVec2::NEG_X,
            Self::East => IVec2::X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// Direction in which `target` lies as seen from `from`, if both share a row
    /// or column. Coincident cells have no direction.
    pub fn towards(from: GridPos, target: GridPos) -> Option<Self> {
        if target.x == from.x {
            match target.y.cmp(&from.y) {
                std::cmp::Ordering::Less => Some(Self::North),
                std::cmp::Ordering::Greater => Some(Self::South),
                std::cmp::Ordering::Equal => None,
            }
        } else if target.y == from.y {
            if target.x < from.x {
                Some(Self::West)
            } else {
                Some(Self::East)
            }
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Self::North),
            "south" => Ok(Self::South),
            "east" => Ok(Self::East),
            "west" => Ok(Self::West),
            _ => Err(BoardError::InvalidDirection(s.to_string())),
        }
    }
}

/// A named, battery-powered robot occupying one cell.
///
/// Robots are owned by their board. Position and battery only change through
/// [`Board::move_robot`](crate::board::Board::move_robot).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    pub(crate) name: String,
    pub(crate) position: GridPos,
    pub(crate) battery: u32,
}

impl Robot {
    pub(crate) fn new(name: impl Into<String>, position: GridPos, battery: u32) -> Self {
        Self {
            name: name.into(),
            position,
            battery,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> GridPos {
        self.position
    }

    /// Remaining moves. A robot at zero is stuck for good.
    pub fn battery(&self) -> u32 {
        self.battery
    }

    pub fn is_exhausted(&self) -> bool {
        self.battery == 0
    }
}

/// A static obstacle. Walls block movement and sight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    pub position: GridPos,
}

impl Wall {
    pub fn new(position: GridPos) -> Self {
        Self { position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_direction_names_loosely() {
        assert_eq!(" North ".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("WEST".parse::<Direction>().unwrap(), Direction::West);
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(BoardError::InvalidDirection(s)) if s == "up"
        ));
    }

    #[test]
    fn towards_only_resolves_shared_lines() {
        let origin = IVec2::new(2, 2);
        assert_eq!(Direction::towards(origin, IVec2::new(2, 0)), Some(Direction::North));
        assert_eq!(Direction::towards(origin, IVec2::new(2, 4)), Some(Direction::South));
        assert_eq!(Direction::towards(origin, IVec2::new(0, 2)), Some(Direction::West));
        assert_eq!(Direction::towards(origin, IVec2::new(4, 2)), Some(Direction::East));
        assert_eq!(Direction::towards(origin, IVec2::new(3, 3)), None);
        assert_eq!(Direction::towards(origin, origin), None);
    }
}
