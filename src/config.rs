use serde::{Deserialize, Serialize};

/// Configuration for one game, as submitted at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    /// Budget for the whole move-gathering phase of one turn, in
    /// milliseconds. Slow or unreachable snakes get a default move.
    #[serde(default = "default_snake_timeout_ms")]
    pub snake_timeout_ms: u64,
    /// Number of food points placed on the initial frame.
    #[serde(default = "default_food")]
    pub food: usize,
    pub snakes: Vec<SnakeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnakeConfig {
    pub name: String,
    /// Base URL of the snake's move endpoint; the engine POSTs to
    /// `{url}/move` every turn.
    pub url: String,
}

fn default_snake_timeout_ms() -> u64 {
    200
}

fn default_food() -> usize {
    1
}
