use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::types::{Game, GameFrame, Point, Snake};

/// Body of the POST `{url}/move` request: the full current frame plus
/// the addressed snake under `you`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub game_id: Uuid,
    pub turn: u32,
    pub board: BoardState,
    pub you: SnakeState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardState {
    pub width: i32,
    pub height: i32,
    pub food: Vec<Point>,
    pub snakes: Vec<SnakeState>,
}

/// Snake as seen on the wire. The endpoint URL stays server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnakeState {
    pub id: Uuid,
    pub name: String,
    pub body: Vec<Point>,
    pub health: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub mov: String,
}

impl MoveRequest {
    pub fn new(game: &Game, frame: &GameFrame, you: &Snake) -> Self {
        Self {
            game_id: game.id,
            turn: frame.turn,
            board: BoardState {
                width: game.width,
                height: game.height,
                food: frame.food.clone(),
                snakes: frame.snakes.iter().map(SnakeState::from_snake).collect(),
            },
            you: SnakeState::from_snake(you),
        }
    }
}

impl SnakeState {
    fn from_snake(snake: &Snake) -> Self {
        Self {
            id: snake.id,
            name: snake.name.clone(),
            body: snake.body.clone(),
            health: snake.health,
        }
    }
}
