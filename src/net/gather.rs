use std::time::Duration;

use futures_util::future::join_all;
use tokio::time::{timeout_at, Instant};
use tracing::debug;

use crate::game::types::{Direction, Game, GameFrame, SnakeUpdate};
use crate::net::messages::{MoveRequest, MoveResponse};

/// Requests a move from every alive snake's endpoint, all requests in
/// flight at once against one shared deadline. Returns one update per
/// alive snake no later than the deadline plus scheduling overhead; a
/// slow, unreachable or malformed participant yields an update that
/// carries an error and no direction, never an aborted tick.
pub async fn gather_snake_moves(
    client: &reqwest::Client,
    timeout: Duration,
    game: &Game,
    frame: &GameFrame,
) -> Vec<SnakeUpdate> {
    let deadline = Instant::now() + timeout;
    let requests = frame.alive_snakes().map(|snake| {
        let request = MoveRequest::new(game, frame, snake);
        let snake_id = snake.id;
        let url = move_url(&snake.url);
        async move {
            let started = Instant::now();
            let outcome = timeout_at(deadline, request_move(client, &url, &request)).await;
            let latency = started.elapsed();
            match outcome {
                Ok(Ok(direction)) => SnakeUpdate {
                    snake_id,
                    direction,
                    error: None,
                    latency,
                },
                Ok(Err(err)) => {
                    debug!(snake_id = %snake_id, error = %err, "move request failed");
                    SnakeUpdate {
                        snake_id,
                        direction: None,
                        error: Some(err.to_string()),
                        latency,
                    }
                }
                Err(_) => SnakeUpdate {
                    snake_id,
                    direction: None,
                    error: Some(format!("no response within {}ms", timeout.as_millis())),
                    latency,
                },
            }
        }
    });
    join_all(requests).await
}

/// A well-formed response with an unrecognized move token is not a
/// transport error; it comes back as `Ok(None)` and the tick engine
/// applies the default move.
async fn request_move(
    client: &reqwest::Client,
    url: &str,
    request: &MoveRequest,
) -> Result<Option<Direction>, reqwest::Error> {
    let response = client
        .post(url)
        .json(request)
        .send()
        .await?
        .error_for_status()?;
    let body: MoveResponse = response.json().await?;
    Ok(Direction::parse(&body.mov))
}

fn move_url(base: &str) -> String {
    format!("{}/move", base.trim_end_matches('/'))
}
