pub mod memory;

use thiserror::Error;
use uuid::Uuid;

use crate::game::types::{Game, GameFrame, GameStatus};

pub use memory::InMemStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("game {0} not found")]
    GameNotFound(Uuid),
    #[error("game {0} already exists")]
    GameExists(Uuid),
    #[error("frame turn {turn} does not follow stored turn {last}")]
    FrameOutOfOrder { turn: u32, last: u32 },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Durable append/read of games and their frame sequences. The engine
/// pushes exactly one frame per produced turn, in turn order, and
/// surfaces store failures to the caller instead of dropping frames.
pub trait FrameStore: Send + Sync {
    /// Stores a new game together with its initial frames (normally
    /// just frame 0).
    fn create_game(&self, game: Game, frames: Vec<GameFrame>) -> Result<(), StoreError>;

    fn set_game_status(&self, id: Uuid, status: GameStatus) -> Result<(), StoreError>;

    fn get_game(&self, id: Uuid) -> Result<Game, StoreError>;

    /// Frames in turn order starting at `offset`, at most `limit` of
    /// them. Reading past the end returns an empty vec.
    fn list_frames(
        &self,
        id: Uuid,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<GameFrame>, StoreError>;

    fn push_frame(&self, id: Uuid, frame: GameFrame) -> Result<(), StoreError>;
}
