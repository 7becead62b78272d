use crate::game::types::{Direction, Point, Snake};

impl Snake {
    /// Advances the head one cell. The tail is NOT removed here; that
    /// happens as a separate step later in the turn pipeline, so a
    /// snake that is about to eat keeps its length for one extra step.
    /// No direction falls back to [`Snake::default_move`].
    pub fn apply_move(&mut self, direction: Option<Direction>) {
        let head = match self.head() {
            Some(h) => h,
            None => return,
        };
        let next = match direction {
            Some(Direction::Up) => Point::new(head.x, head.y - 1),
            Some(Direction::Down) => Point::new(head.x, head.y + 1),
            Some(Direction::Left) => Point::new(head.x - 1, head.y),
            Some(Direction::Right) => Point::new(head.x + 1, head.y),
            None => {
                self.default_move();
                return;
            }
        };
        self.body.insert(0, next);
    }

    /// Keeps moving in the direction the snake was already heading,
    /// read off the head/neck pair. At game start all segments sit on
    /// one point; that degenerate case heads up.
    pub fn default_move(&mut self) {
        let (head, neck) = match (self.head(), self.neck()) {
            (Some(h), Some(n)) => (h, n),
            _ => {
                self.apply_move(Some(Direction::Up));
                return;
            }
        };

        if head.x == neck.x && head.y == neck.y {
            self.apply_move(Some(Direction::Up));
        } else if head.x == neck.x {
            if head.y > neck.y {
                self.apply_move(Some(Direction::Down));
            } else {
                self.apply_move(Some(Direction::Up));
            }
        } else if head.y == neck.y {
            if head.x > neck.x {
                self.apply_move(Some(Direction::Right));
            } else {
                self.apply_move(Some(Direction::Left));
            }
        }
    }

    /// Reverses the body in place. Triggered when the head lands on
    /// the neck; the former head becomes the tail and gets trimmed, so
    /// the snake appears to have held still.
    pub fn flip(&mut self) {
        self.body.reverse();
    }

    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }

    pub fn neck(&self) -> Option<Point> {
        self.body.get(1).copied()
    }

    pub fn tail(&self) -> Option<Point> {
        self.body.last().copied()
    }
}
