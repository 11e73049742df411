//! Perception rules: what a robot can see from its cell.
//!
//! A robot looks along its own row and column. It sees a board edge only when
//! standing on it, and it sees walls and other robots that share its row or
//! column. [`SightMode`] decides whether the first obstacle on a ray hides
//! everything behind it.

use crate::board::Board;
use crate::entity::{Direction, GridPos, Robot};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How far along a ray a robot can see.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SightMode {
    /// Every wall and robot on a shared row or column is reported, even when
    /// another obstacle sits in between.
    #[default]
    Axis,
    /// Only the nearest wall or robot per direction is reported.
    LineOfSight,
}

/// A single thing a robot can see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Observation {
    /// The robot stands on the board edge facing `direction`.
    Edge { direction: Direction },
    Wall { direction: Direction },
    Robot { name: String, direction: Direction },
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edge { direction } => write!(f, "{direction} board edge visible"),
            Self::Wall { direction } => {
                write!(f, "wall visible to {direction}, cannot see beyond it")
            }
            Self::Robot { name, direction } => write!(f, "{name} visible to {direction}"),
        }
    }
}

/// Something sitting on the same row or column as the observer.
struct Sighting<'a> {
    direction: Direction,
    distance: u32,
    /// `None` for walls.
    robot: Option<&'a str>,
}

impl Sighting<'_> {
    fn into_observation(self) -> Observation {
        match self.robot {
            Some(name) => Observation::Robot {
                name: name.to_string(),
                direction: self.direction,
            },
            None => Observation::Wall {
                direction: self.direction,
            },
        }
    }
}

fn sighting(from: GridPos, target: GridPos, range: Option<u32>) -> Option<(Direction, u32)> {
    let direction = Direction::towards(from, target)?;
    let distance = (target - from).abs().element_sum() as u32;
    match range {
        Some(limit) if distance > limit => None,
        _ => Some((direction, distance)),
    }
}

/// Computes the ordered observations for `robot` on `board`.
///
/// Order is: board edges (west, east, north, south), then walls, then other
/// robots. In [`SightMode::Axis`] walls and robots keep insertion order; in
/// [`SightMode::LineOfSight`] they follow [`Direction::ALL`].
pub(crate) fn observe(board: &Board, robot: &Robot) -> Vec<Observation> {
    let pos = robot.position;
    let mut seen = Vec::new();

    let edges = [
        (pos.x == 0, Direction::West),
        (pos.x == board.width - 1, Direction::East),
        (pos.y == 0, Direction::North),
        (pos.y == board.height - 1, Direction::South),
    ];
    for (visible, direction) in edges {
        if visible {
            seen.push(Observation::Edge { direction });
        }
    }

    let range = board.config.sight_range;
    let walls = board.walls.iter().filter_map(|wall| {
        sighting(pos, wall.position, range).map(|(direction, distance)| Sighting {
            direction,
            distance,
            robot: None,
        })
    });
    let robots = board
        .robots
        .iter()
        .filter(|other| other.name != robot.name)
        .filter_map(|other| {
            sighting(pos, other.position, range).map(|(direction, distance)| Sighting {
                direction,
                distance,
                robot: Some(other.name.as_str()),
            })
        });

    match board.config.sight_mode {
        SightMode::Axis => {
            seen.extend(walls.map(Sighting::into_observation));
            seen.extend(robots.map(Sighting::into_observation));
        }
        SightMode::LineOfSight => {
            let mut nearest: [Option<Sighting>; 4] = [None, None, None, None];
            // Walls first so a wall wins a tie with a robot on the same cell.
            for candidate in walls.chain(robots) {
                let slot = &mut nearest[ray_index(candidate.direction)];
                if slot
                    .as_ref()
                    .is_none_or(|current| candidate.distance < current.distance)
                {
                    *slot = Some(candidate);
                }
            }
            let (robot_hits, wall_hits): (Vec<_>, Vec<_>) = nearest
                .into_iter()
                .flatten()
                .partition(|hit| hit.robot.is_some());
            seen.extend(wall_hits.into_iter().map(Sighting::into_observation));
            seen.extend(robot_hits.into_iter().map(Sighting::into_observation));
        }
    }

    seen
}

fn ray_index(direction: Direction) -> usize {
    match direction {
        Direction::North => 0,
        Direction::South => 1,
        Direction::West => 2,
        Direction::East => 3,
    }
}
