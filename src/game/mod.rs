pub mod snake;
pub mod types;

pub use types::{
    Death, DeathCause, Direction, Game, GameFrame, GameStatus, Point, Snake, SnakeUpdate,
};
