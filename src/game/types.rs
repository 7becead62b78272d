use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parses a move token from a remote response. Anything outside
    /// the four lowercase tokens counts as no direction at all.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathCause {
    Starvation,
    WallCollision,
    SelfCollision,
    SnakeCollision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Death {
    pub turn: u32,
    pub cause: DeathCause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Created,
    Running,
    Finished,
    Errored,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: Uuid,
    pub width: i32,
    pub height: i32,
    /// Budget for the whole move-gathering phase of one turn.
    pub snake_timeout_ms: u64,
    pub status: GameStatus,
}

impl Game {
    pub fn snake_timeout(&self) -> Duration {
        Duration::from_millis(self.snake_timeout_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    pub id: Uuid,
    pub name: String,
    /// Base URL of this snake's remote move endpoint.
    pub url: String,
    /// Index 0 is the head, the last segment is the tail. Ordering is
    /// load-bearing: movement and collision rules depend on it.
    pub body: Vec<Point>,
    pub health: i32,
    /// Write-once: the first determined cause is never overwritten.
    pub death: Option<Death>,
    /// Latency of the last remote move decision, in milliseconds.
    pub latency_ms: u64,
}

impl Snake {
    pub fn alive(&self) -> bool {
        self.death.is_none()
    }
}

/// Immutable snapshot of one turn. A tick clones the previous frame's
/// snakes and food into a fresh frame before touching anything, so
/// emitted frames stay valid for replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameFrame {
    pub turn: u32,
    pub snakes: Vec<Snake>,
    pub food: Vec<Point>,
}

impl GameFrame {
    pub fn alive_snakes(&self) -> impl Iterator<Item = &Snake> {
        self.snakes.iter().filter(|s| s.alive())
    }

    pub fn alive_count(&self) -> usize {
        self.alive_snakes().count()
    }

    pub fn snake_mut(&mut self, id: Uuid) -> Option<&mut Snake> {
        self.snakes.iter_mut().find(|s| s.id == id)
    }
}

/// Outcome of one snake's remote move request. Lives for the duration
/// of a single tick; never persisted.
#[derive(Debug, Clone)]
pub struct SnakeUpdate {
    pub snake_id: Uuid,
    pub direction: Option<Direction>,
    pub error: Option<String>,
    pub latency: Duration,
}
