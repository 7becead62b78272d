use std::sync::{Arc, Mutex};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{error, info};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::game::types::{Game, GameFrame, GameStatus, Snake};
use crate::rules::{food, tick};
use crate::store::FrameStore;
use crate::EngineError;

/// Drives games from creation to completion. One engine may run many
/// games at once; each game's frame sequence is owned by the single
/// `run_game` call driving it, so ticks of one game never overlap.
pub struct Engine {
    store: Arc<dyn FrameStore>,
    client: reqwest::Client,
    // Placement RNG is process-wide and seeded once, so draws across
    // concurrently running games stay uncorrelated.
    rng: Arc<Mutex<SmallRng>>,
}

impl Engine {
    pub fn new(store: Arc<dyn FrameStore>) -> Self {
        Self::with_rng(store, SmallRng::from_entropy())
    }

    /// Fixed seed, for reproducible placement under test.
    pub fn with_seed(store: Arc<dyn FrameStore>, seed: u64) -> Self {
        Self::with_rng(store, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(store: Arc<dyn FrameStore>, rng: SmallRng) -> Self {
        Self {
            store,
            client: reqwest::Client::new(),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Builds the game and its initial frame: every snake spawns as
    /// three stacked segments on a random free cell with full health,
    /// then the configured amount of food is placed.
    pub fn create_game(&self, config: &GameConfig) -> Result<Game, EngineError> {
        if config.width <= 0 || config.height <= 0 {
            return Err(EngineError::InvalidBoard {
                width: config.width,
                height: config.height,
            });
        }

        let mut rng = self.rng.lock().expect("rng lock poisoned");
        let mut snakes: Vec<Snake> = Vec::with_capacity(config.snakes.len());
        for sc in &config.snakes {
            let start = food::unoccupied_point(&mut rng, config.width, config.height, &[], &snakes)
                .ok_or_else(|| EngineError::NoRoomForSnake {
                    name: sc.name.clone(),
                })?;
            snakes.push(Snake {
                id: Uuid::new_v4(),
                name: sc.name.clone(),
                url: sc.url.clone(),
                body: vec![start; 3],
                health: 100,
                death: None,
                latency_ms: 0,
            });
        }

        let mut placed_food = Vec::with_capacity(config.food);
        for _ in 0..config.food {
            // A saturated board just stops placing; not an error.
            match food::unoccupied_point(
                &mut rng,
                config.width,
                config.height,
                &placed_food,
                &snakes,
            ) {
                Some(p) => placed_food.push(p),
                None => break,
            }
        }
        drop(rng);

        let game = Game {
            id: Uuid::new_v4(),
            width: config.width,
            height: config.height,
            snake_timeout_ms: config.snake_timeout_ms,
            status: GameStatus::Created,
        };
        let initial = GameFrame {
            turn: 0,
            snakes,
            food: placed_food,
        };
        info!(
            game_id = %game.id,
            width = game.width,
            height = game.height,
            snakes = initial.snakes.len(),
            "game created",
        );
        self.store.create_game(game.clone(), vec![initial])?;
        Ok(game)
    }

    /// Runs the game until it is over, pushing every produced frame to
    /// the store in turn order. Store or sequencing failures mark the
    /// game errored and surface to the caller.
    pub async fn run_game(&self, id: Uuid) -> Result<Game, EngineError> {
        let mut game = self.store.get_game(id)?;
        self.store.set_game_status(id, GameStatus::Running)?;
        game.status = GameStatus::Running;
        info!(game_id = %id, "game running");

        match self.drive(&game).await {
            Ok(final_turn) => {
                self.store.set_game_status(id, GameStatus::Finished)?;
                game.status = GameStatus::Finished;
                info!(game_id = %id, turns = final_turn, "game finished");
                Ok(game)
            }
            Err(err) => {
                error!(game_id = %id, error = %err, "game errored");
                // Best effort; the original failure is what surfaces.
                let _ = self.store.set_game_status(id, GameStatus::Errored);
                Err(err)
            }
        }
    }

    async fn drive(&self, game: &Game) -> Result<u32, EngineError> {
        let mut frame = self
            .latest_frame(game.id)?
            .ok_or(EngineError::MissingFrame)?;

        while !game_over(&frame) {
            let next = tick::advance(&self.client, game, Some(&frame)).await?;
            self.store.push_frame(game.id, next.clone())?;
            frame = next;
        }
        Ok(frame.turn)
    }

    fn latest_frame(&self, id: Uuid) -> Result<Option<GameFrame>, EngineError> {
        const PAGE: usize = 100;
        let mut offset = 0;
        let mut latest = None;
        loop {
            let page = self.store.list_frames(id, offset, PAGE)?;
            let got = page.len();
            if let Some(frame) = page.into_iter().last() {
                latest = Some(frame);
            }
            if got < PAGE {
                return Ok(latest);
            }
            offset += got;
        }
    }
}

/// Last-snake-standing: the game is over once fewer than two snakes
/// are alive. Game modes with other termination rules can layer their
/// own predicate over the frames; every death cause is in the frame.
pub fn game_over(frame: &GameFrame) -> bool {
    frame.alive_count() < 2
}
