//! Turn engine for multiplayer grid snake games.
//!
//! One tick gathers a move from every alive snake's remote endpoint
//! under a shared deadline, applies movement and collision rules, and
//! emits a new immutable frame. Frames are appended to a pluggable
//! [`store::FrameStore`]; the [`runner::Engine`] drives games from
//! creation to completion.

pub mod config;
pub mod game;
pub mod net;
pub mod rules;
pub mod runner;
pub mod store;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A tick was requested without a previous frame. This is a
    /// sequencing bug upstream, never recovered by guessing a frame.
    #[error("invalid state: previous frame is missing")]
    MissingFrame,
    #[error("game board must have positive dimensions, got {width}x{height}")]
    InvalidBoard { width: i32, height: i32 },
    #[error("no unoccupied point left to place snake {name}")]
    NoRoomForSnake { name: String },
    #[error(transparent)]
    Store(#[from] store::StoreError),
}
