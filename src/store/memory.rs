use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::game::types::{Game, GameFrame, GameStatus};
use crate::store::{FrameStore, StoreError};

/// Process-local store. Good enough for tests and single-process
/// deployments; anything durable implements [`FrameStore`] elsewhere.
#[derive(Default)]
pub struct InMemStore {
    games: Mutex<HashMap<Uuid, StoredGame>>,
}

struct StoredGame {
    game: Game,
    frames: Vec<GameFrame>,
}

impl InMemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameStore for InMemStore {
    fn create_game(&self, game: Game, frames: Vec<GameFrame>) -> Result<(), StoreError> {
        let mut games = self.games.lock().expect("store lock poisoned");
        if games.contains_key(&game.id) {
            return Err(StoreError::GameExists(game.id));
        }
        games.insert(game.id, StoredGame { game, frames });
        Ok(())
    }

    fn set_game_status(&self, id: Uuid, status: GameStatus) -> Result<(), StoreError> {
        let mut games = self.games.lock().expect("store lock poisoned");
        let stored = games.get_mut(&id).ok_or(StoreError::GameNotFound(id))?;
        stored.game.status = status;
        Ok(())
    }

    fn get_game(&self, id: Uuid) -> Result<Game, StoreError> {
        let games = self.games.lock().expect("store lock poisoned");
        games
            .get(&id)
            .map(|stored| stored.game.clone())
            .ok_or(StoreError::GameNotFound(id))
    }

    fn list_frames(
        &self,
        id: Uuid,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<GameFrame>, StoreError> {
        let games = self.games.lock().expect("store lock poisoned");
        let stored = games.get(&id).ok_or(StoreError::GameNotFound(id))?;
        Ok(stored
            .frames
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn push_frame(&self, id: Uuid, frame: GameFrame) -> Result<(), StoreError> {
        let mut games = self.games.lock().expect("store lock poisoned");
        let stored = games.get_mut(&id).ok_or(StoreError::GameNotFound(id))?;
        if let Some(last) = stored.frames.last() {
            if frame.turn != last.turn + 1 {
                return Err(StoreError::FrameOutOfOrder {
                    turn: frame.turn,
                    last: last.turn,
                });
            }
        }
        stored.frames.push(frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Point;

    fn game() -> Game {
        Game {
            id: Uuid::new_v4(),
            width: 5,
            height: 5,
            snake_timeout_ms: 200,
            status: GameStatus::Created,
        }
    }

    fn frame(turn: u32) -> GameFrame {
        GameFrame {
            turn,
            snakes: Vec::new(),
            food: vec![Point::new(0, 0)],
        }
    }

    #[test]
    fn create_then_get_round_trips_the_game() {
        let store = InMemStore::new();
        let g = game();
        let id = g.id;

        store.create_game(g, vec![frame(0)]).unwrap();
        let loaded = store.get_game(id).unwrap();

        assert_eq!(loaded.id, id);
        assert_eq!(loaded.status, GameStatus::Created);
    }

    #[test]
    fn duplicate_create_is_rejected() {
        let store = InMemStore::new();
        let g = game();

        store.create_game(g.clone(), vec![frame(0)]).unwrap();

        assert!(matches!(
            store.create_game(g, vec![frame(0)]),
            Err(StoreError::GameExists(_)),
        ));
    }

    #[test]
    fn unknown_game_is_an_error() {
        let store = InMemStore::new();
        let id = Uuid::new_v4();

        assert!(matches!(store.get_game(id), Err(StoreError::GameNotFound(_))));
        assert!(matches!(
            store.push_frame(id, frame(0)),
            Err(StoreError::GameNotFound(_)),
        ));
    }

    #[test]
    fn list_frames_paginates_in_turn_order() {
        let store = InMemStore::new();
        let g = game();
        let id = g.id;
        store.create_game(g, vec![frame(0)]).unwrap();
        for turn in 1..6 {
            store.push_frame(id, frame(turn)).unwrap();
        }

        let first = store.list_frames(id, 0, 3).unwrap();
        let rest = store.list_frames(id, 3, 100).unwrap();
        let past_end = store.list_frames(id, 42, 10).unwrap();

        assert_eq!(first.iter().map(|f| f.turn).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(rest.iter().map(|f| f.turn).collect::<Vec<_>>(), vec![3, 4, 5]);
        assert!(past_end.is_empty());
    }

    #[test]
    fn out_of_order_push_is_rejected() {
        let store = InMemStore::new();
        let g = game();
        let id = g.id;
        store.create_game(g, vec![frame(0)]).unwrap();

        assert!(matches!(
            store.push_frame(id, frame(2)),
            Err(StoreError::FrameOutOfOrder { turn: 2, last: 0 }),
        ));
    }

    #[test]
    fn status_updates_persist() {
        let store = InMemStore::new();
        let g = game();
        let id = g.id;
        store.create_game(g, vec![frame(0)]).unwrap();

        store.set_game_status(id, GameStatus::Running).unwrap();

        assert_eq!(store.get_game(id).unwrap().status, GameStatus::Running);
    }
}
