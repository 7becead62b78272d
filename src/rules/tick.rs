use tracing::info;

use crate::game::types::{Game, GameFrame, Snake, SnakeUpdate};
use crate::net::gather::gather_snake_moves;
use crate::rules::death::check_for_death;
use crate::EngineError;

/// Runs the game one tick: gathers a move from every alive snake
/// under the game's timeout, then applies the turn pipeline.
pub async fn advance(
    client: &reqwest::Client,
    game: &Game,
    last_frame: Option<&GameFrame>,
) -> Result<GameFrame, EngineError> {
    let frame = last_frame.ok_or(EngineError::MissingFrame)?;
    let timeout = game.snake_timeout();
    info!(
        game_id = %game.id,
        turn = frame.turn + 1,
        timeout_ms = game.snake_timeout_ms,
        "gather snake moves",
    );
    let moves = gather_snake_moves(client, timeout, game, frame).await;
    game_tick(game, last_frame, moves)
}

/// The deterministic core of one turn. Derives the next frame from the
/// previous one plus this turn's gathered moves:
/// move every alive snake (flip check, then tail trim), decrement
/// health of the still-alive, evaluate deaths, emit `turn + 1`.
pub fn game_tick(
    game: &Game,
    last_frame: Option<&GameFrame>,
    moves: Vec<SnakeUpdate>,
) -> Result<GameFrame, EngineError> {
    let last_frame = last_frame.ok_or(EngineError::MissingFrame)?;
    // Copy-on-write: the next frame owns its own snakes and food, so
    // the previous frame stays untouched for replay.
    let mut next_frame = GameFrame {
        turn: last_frame.turn + 1,
        snakes: last_frame.snakes.clone(),
        food: last_frame.food.clone(),
    };

    update_snakes(game, &mut next_frame, moves);

    for snake in next_frame.snakes.iter_mut().filter(|s| s.alive()) {
        snake.health -= 1;
    }

    let death_updates = check_for_death(game.width, game.height, &next_frame);
    let turn = next_frame.turn;
    for du in death_updates {
        if let Some(snake) = next_frame.snake_mut(du.snake_id) {
            // First determined cause wins, never overwritten.
            if snake.death.is_none() {
                snake.death = Some(du.death);
                info!(
                    game_id = %game.id,
                    snake_id = %snake.id,
                    name = %snake.name,
                    turn,
                    cause = ?du.death.cause,
                    "snake died",
                );
            }
        }
    }
    Ok(next_frame)
}

fn update_snakes(game: &Game, frame: &mut GameFrame, moves: Vec<SnakeUpdate>) {
    let turn = frame.turn;
    for update in moves {
        let snake = match frame.snake_mut(update.snake_id) {
            Some(s) if s.alive() => s,
            _ => continue,
        };
        snake.latency_ms = update.latency.as_millis() as u64;
        if let Some(err) = &update.error {
            info!(
                game_id = %game.id,
                snake_id = %snake.id,
                name = %snake.name,
                turn,
                error = %err,
                "default move",
            );
            snake.default_move();
        } else {
            snake.apply_move(update.direction);
        }
        if check_for_backflip(snake) {
            info!(
                game_id = %game.id,
                snake_id = %snake.id,
                name = %snake.name,
                turn,
                "snake flipped",
            );
            snake.flip();
        }
        // Tail trim comes last: the flip check must read the post-move
        // head/neck pair before the body shrinks.
        snake.body.pop();
    }
}

fn check_for_backflip(snake: &Snake) -> bool {
    match (snake.head(), snake.neck()) {
        (Some(head), Some(neck)) => head == neck,
        _ => false,
    }
}
