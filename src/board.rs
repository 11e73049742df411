//! The board: owner of all robots and walls, and the only authority on movement.
//!
//! Create a [`Board`] with [`Board::new`] or [`Board::with_config`], register
//! robots and walls, then drive it with [`Board::move_robot`] and
//! [`Board::what_can_robot_see`].

use crate::entity::{DEFAULT_BATTERY, Direction, GridPos, Robot, Wall};
use crate::event::{BoardEvent, MoveRejection};
use crate::snapshot::BoardSnapshot;
use crate::vision::{self, Observation, SightMode};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Errors raised by board construction, registration and lookups.
///
/// A refused move is not an error; see [`BoardEvent::success`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("robot not found: {0}")]
    RobotNotFound(String),
    #[error("a robot named {0} is already on the board")]
    DuplicateRobot(String),
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OffBoard {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    #[error("unknown direction {0:?}, expected north, south, east or west")]
    InvalidDirection(String),
}

/// Tunables for a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Battery given to robots added without an explicit charge. Default: 5.
    pub default_battery: u32,
    /// Whether obstacles hide what lies behind them.
    pub sight_mode: SightMode,
    /// Maximum distance, in cells, at which walls and robots are noticed.
    /// `None` means the whole row and column are visible.
    pub sight_range: Option<u32>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_battery: DEFAULT_BATTERY,
            sight_mode: SightMode::Axis,
            sight_range: None,
        }
    }
}

/// A requested step, resolved against the board before anything is mutated.
#[derive(Clone, Copy, Debug)]
struct MoveIntent {
    robot: usize,
    from: GridPos,
    direction: Direction,
    target: GridPos,
}

/// A bounded grid holding robots and walls.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) robots: Vec<Robot>,
    pub(crate) walls: Vec<Wall>,
    pub(crate) last_event: Option<BoardEvent>,
    pub(crate) config: BoardConfig,
}

impl Board {
    /// Creates an empty `width` x `height` board with the default configuration.
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        Self::with_config(width, height, BoardConfig::default())
    }

    /// Creates an empty board with explicit tunables.
    pub fn with_config(width: i32, height: i32, config: BoardConfig) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            robots: Vec::new(),
            walls: Vec::new(),
            last_event: None,
            config,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Robots in registration order.
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    /// Walls in registration order.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn robot(&self, name: &str) -> Option<&Robot> {
        self.robots.iter().find(|r| r.name == name)
    }

    /// The outcome of the most recent [`move_robot`](Self::move_robot) call.
    pub fn last_event(&self) -> Option<&BoardEvent> {
        self.last_event.as_ref()
    }

    pub fn is_on_board(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    fn check_on_board(&self, x: i32, y: i32) -> Result<(), BoardError> {
        if self.is_on_board(x, y) {
            Ok(())
        } else {
            Err(BoardError::OffBoard {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Places a robot carrying [`BoardConfig::default_battery`].
    pub fn add_robot(&mut self, name: impl Into<String>, x: i32, y: i32) -> Result<(), BoardError> {
        let battery = self.config.default_battery;
        self.add_robot_with_battery(name, x, y, battery)
    }

    /// Places a robot with an explicit battery charge.
    ///
    /// Names must be unique. Robots may start on an occupied cell.
    pub fn add_robot_with_battery(
        &mut self,
        name: impl Into<String>,
        x: i32,
        y: i32,
        battery: u32,
    ) -> Result<(), BoardError> {
        let name = name.into();
        if self.robot(&name).is_some() {
            warn!(robot = %name, "rejected duplicate robot name");
            return Err(BoardError::DuplicateRobot(name));
        }
        if let Err(err) = self.check_on_board(x, y) {
            warn!(robot = %name, x, y, "rejected off-board robot");
            return Err(err);
        }
        debug!(robot = %name, x, y, battery, "robot added");
        self.robots.push(Robot::new(name, IVec2::new(x, y), battery));
        Ok(())
    }

    /// Places a wall. Several walls may share a cell.
    pub fn add_wall(&mut self, x: i32, y: i32) -> Result<(), BoardError> {
        if let Err(err) = self.check_on_board(x, y) {
            warn!(x, y, "rejected off-board wall");
            return Err(err);
        }
        self.walls.push(Wall::new(IVec2::new(x, y)));
        Ok(())
    }

    fn robot_index(&self, name: &str) -> Result<usize, BoardError> {
        self.robots
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| BoardError::RobotNotFound(name.to_string()))
    }

    /// Attempts to move `robot_name` one cell in `direction`.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. the battery is not empty,
    /// 2. the robot is not standing on the edge it wants to cross,
    /// 3. no wall occupies the target cell,
    /// 4. no other robot occupies the target cell.
    ///
    /// On success the robot steps and loses one battery charge. Either way the
    /// returned event is also kept as [`last_event`](Self::last_event).
    ///
    /// # Errors
    ///
    /// [`BoardError::RobotNotFound`] if no robot has that name. The last event
    /// is left untouched in that case.
    pub fn move_robot(
        &mut self,
        robot_name: &str,
        direction: Direction,
    ) -> Result<BoardEvent, BoardError> {
        let index = self.robot_index(robot_name)?;
        let from = self.robots[index].position;
        let intent = MoveIntent {
            robot: index,
            from,
            direction,
            target: from + direction.offset(),
        };

        let event = match self.validate(&intent) {
            Ok(()) => {
                let robot = &mut self.robots[intent.robot];
                robot.position = intent.target;
                robot.battery -= 1;
                debug_assert!(
                    self.is_on_board(intent.target.x, intent.target.y),
                    "robot {robot_name} left the board at {}",
                    intent.target
                );
                BoardEvent::moved(robot_name, direction, intent.target)
            }
            Err(reason) => BoardEvent::rejected(robot_name, direction, intent.from, &reason),
        };

        debug!(
            robot = robot_name,
            %direction,
            success = event.success,
            x = event.position.x,
            y = event.position.y,
            "{}",
            event.message
        );
        self.last_event = Some(event.clone());
        Ok(event)
    }

    fn validate(&self, intent: &MoveIntent) -> Result<(), MoveRejection> {
        self.check_battery(intent)?;
        self.check_edge(intent)?;
        self.check_walls(intent)?;
        self.check_robots(intent)
    }

    fn check_battery(&self, intent: &MoveIntent) -> Result<(), MoveRejection> {
        if self.robots[intent.robot].is_exhausted() {
            return Err(MoveRejection::BatteryEmpty);
        }
        Ok(())
    }

    fn check_edge(&self, intent: &MoveIntent) -> Result<(), MoveRejection> {
        let at_edge = match intent.direction {
            Direction::North => intent.from.y == 0,
            Direction::South => intent.from.y == self.height - 1,
            Direction::West => intent.from.x == 0,
            Direction::East => intent.from.x == self.width - 1,
        };
        if at_edge {
            return Err(MoveRejection::BoardEdge);
        }
        Ok(())
    }

    fn check_walls(&self, intent: &MoveIntent) -> Result<(), MoveRejection> {
        if self.walls.iter().any(|w| w.position == intent.target) {
            return Err(MoveRejection::Wall);
        }
        Ok(())
    }

    fn check_robots(&self, intent: &MoveIntent) -> Result<(), MoveRejection> {
        let blocker = self
            .robots
            .iter()
            .enumerate()
            .find(|(i, r)| *i != intent.robot && r.position == intent.target);
        match blocker {
            Some((_, other)) => Err(MoveRejection::Robot(other.name.clone())),
            None => Ok(()),
        }
    }

    /// Typed observations for `robot_name`, in reporting order.
    pub fn observations(&self, robot_name: &str) -> Result<Vec<Observation>, BoardError> {
        let robot = &self.robots[self.robot_index(robot_name)?];
        let seen = vision::observe(self, robot);
        trace!(robot = robot_name, count = seen.len(), "perception query");
        Ok(seen)
    }

    /// What `robot_name` can see from its cell, one sentence per observation.
    ///
    /// The list is empty when nothing is in view.
    pub fn what_can_robot_see(&self, robot_name: &str) -> Result<Vec<String>, BoardError> {
        Ok(self
            .observations(robot_name)?
            .iter()
            .map(ToString::to_string)
            .collect())
    }

    /// All observations joined into a single space-separated report.
    pub fn perception_report(&self, robot_name: &str) -> Result<String, BoardError> {
        Ok(self.what_can_robot_see(robot_name)?.join(" "))
    }

    /// An owned copy of the board state for renderers and drivers.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: self.width,
            height: self.height,
            robots: self.robots.clone(),
            walls: self.walls.clone(),
            last_event: self.last_event.clone(),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board(width={}, height={})", self.width, self.height)
    }
}
