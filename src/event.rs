//! Outcome records produced by the movement engine.

use crate::entity::{Direction, GridPos};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of a single [`Board::move_robot`](crate::board::Board::move_robot) call.
///
/// A failed move is still a valid event: inspect [`success`](Self::success)
/// rather than treating it as an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEvent {
    /// The robot that attempted to move.
    pub robot_name: String,

    /// The requested direction.
    pub direction: Direction,

    /// Where the robot stands after the attempt. Equal to the starting cell on failure.
    pub position: GridPos,

    /// Human-readable description, suitable for feeding back to an agent.
    pub message: String,

    pub success: bool,
}

impl BoardEvent {
    pub(crate) fn moved(robot_name: &str, direction: Direction, position: GridPos) -> Self {
        Self {
            robot_name: robot_name.to_string(),
            direction,
            position,
            message: format!("{robot_name} moved {direction}."),
            success: true,
        }
    }

    pub(crate) fn rejected(
        robot_name: &str,
        direction: Direction,
        position: GridPos,
        reason: &MoveRejection,
    ) -> Self {
        Self {
            robot_name: robot_name.to_string(),
            direction,
            position,
            message: reason.message(robot_name, direction),
            success: false,
        }
    }
}

impl fmt::Display for BoardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Why a move attempt was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    BatteryEmpty,
    BoardEdge,
    Wall,
    /// Blocked by the named robot.
    Robot(String),
}

impl MoveRejection {
    fn message(&self, robot_name: &str, direction: Direction) -> String {
        match self {
            Self::BatteryEmpty => format!("{robot_name} has no battery left."),
            Self::BoardEdge => format!("{robot_name} cannot move {direction}."),
            Self::Wall => {
                format!("{robot_name} cannot move {direction}. There is a wall in the way.")
            }
            Self::Robot(other) => {
                format!("{robot_name} cannot move {direction}. {other} is in the way.")
            }
        }
    }
}
