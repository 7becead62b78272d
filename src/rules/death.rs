use uuid::Uuid;

use crate::game::types::{Death, DeathCause, GameFrame, Point};

/// One snake's death verdict for this turn. Applied by the tick engine
/// with a first-write-wins guard on the snake's death field.
#[derive(Debug, Clone, Copy)]
pub struct DeathUpdate {
    pub snake_id: Uuid,
    pub death: Death,
}

/// Scans the post-move frame for snakes that died this turn. Causes
/// are checked in precedence order and evaluation stops at the first
/// match per snake: starvation, then wall collision, then body
/// collision (self or other).
pub fn check_for_death(width: i32, height: i32, frame: &GameFrame) -> Vec<DeathUpdate> {
    let mut updates = Vec::new();
    for snake in frame.alive_snakes() {
        if starved(snake.health) {
            updates.push(DeathUpdate {
                snake_id: snake.id,
                death: Death {
                    turn: frame.turn,
                    cause: DeathCause::Starvation,
                },
            });
            continue;
        }
        let head = match snake.head() {
            Some(h) => h,
            None => continue,
        };
        if out_of_bounds(head, width, height) {
            updates.push(DeathUpdate {
                snake_id: snake.id,
                death: Death {
                    turn: frame.turn,
                    cause: DeathCause::WallCollision,
                },
            });
            continue;
        }

        // This snake's head checked against the non-head segments of
        // every alive snake, its own body included. Two heads sharing
        // a cell do not match here: index 0 is never scanned.
        'others: for other in frame.alive_snakes() {
            for segment in other.body.iter().skip(1) {
                if head == *segment {
                    let cause = if snake.id == other.id {
                        DeathCause::SelfCollision
                    } else {
                        DeathCause::SnakeCollision
                    };
                    updates.push(DeathUpdate {
                        snake_id: snake.id,
                        death: Death {
                            turn: frame.turn,
                            cause,
                        },
                    });
                    break 'others;
                }
            }
        }
    }
    updates
}

fn starved(health: i32) -> bool {
    health <= 0
}

fn out_of_bounds(head: Point, width: i32, height: i32) -> bool {
    head.x < 0 || head.x >= width || head.y < 0 || head.y >= height
}
