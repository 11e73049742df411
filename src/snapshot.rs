//! Read-only board state for renderers and external drivers.

use crate::entity::{GridPos, Robot, Wall};
use crate::event::BoardEvent;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An owned copy of everything a renderer needs, taken with
/// [`Board::snapshot`](crate::board::Board::snapshot).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: i32,
    pub height: i32,
    pub robots: Vec<Robot>,
    pub walls: Vec<Wall>,
    pub last_event: Option<BoardEvent>,
}

/// What occupies a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell<'a> {
    Empty,
    Wall,
    Robot(&'a str),
}

impl BoardSnapshot {
    /// Contents of the cell at `pos`. A wall takes precedence over a robot
    /// sharing its cell, and the first registered robot wins over later ones.
    pub fn cell(&self, pos: GridPos) -> Cell<'_> {
        if self.walls.iter().any(|w| w.position == pos) {
            return Cell::Wall;
        }
        self.robots
            .iter()
            .find(|r| r.position == pos)
            .map_or(Cell::Empty, |r| Cell::Robot(r.name()))
    }

    /// Rows of cells from north to south, each row west to east.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Cell<'_>>> + '_ {
        (0..self.height).map(move |y| {
            (0..self.width)
                .map(move |x| self.cell(IVec2::new(x, y)))
                .collect()
        })
    }
}
