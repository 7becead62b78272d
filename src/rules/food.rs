use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::game::types::{Point, Snake};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

/// Every cell of the `width x height` grid not covered by food or by
/// any snake body segment. Empty when the board is saturated.
pub fn unoccupied_points(width: i32, height: i32, food: &[Point], snakes: &[Snake]) -> Vec<Point> {
    let mut occupied: HashSet<Point> = food.iter().copied().collect();
    for snake in snakes {
        occupied.extend(snake.body.iter().copied());
    }

    let capacity = (width as usize * height as usize).saturating_sub(occupied.len());
    let mut candidates = Vec::with_capacity(capacity);
    for x in 0..width {
        for y in 0..height {
            let p = Point::new(x, y);
            if !occupied.contains(&p) {
                candidates.push(p);
            }
        }
    }
    candidates
}

/// Uniform draw from the candidate set. `None` when nothing is free;
/// a saturated board is not an error, it just places no point.
pub fn pick_random_point(rng: &mut SmallRng, candidates: &[Point]) -> Option<Point> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.gen_range(0..candidates.len())])
}

/// Keeps only candidates whose coordinate sum matches the parity,
/// supporting checkerboard-fair placement strategies.
pub fn filter_points(candidates: &[Point], parity: Parity) -> Vec<Point> {
    let rem = match parity {
        Parity::Even => 0,
        Parity::Odd => 1,
    };
    candidates
        .iter()
        .copied()
        .filter(|p| (p.x + p.y).rem_euclid(2) == rem)
        .collect()
}

pub fn unoccupied_point(
    rng: &mut SmallRng,
    width: i32,
    height: i32,
    food: &[Point],
    snakes: &[Snake],
) -> Option<Point> {
    let candidates = unoccupied_points(width, height, food, snakes);
    pick_random_point(rng, &candidates)
}

pub fn unoccupied_point_even(
    rng: &mut SmallRng,
    width: i32,
    height: i32,
    food: &[Point],
    snakes: &[Snake],
) -> Option<Point> {
    let candidates = filter_points(&unoccupied_points(width, height, food, snakes), Parity::Even);
    pick_random_point(rng, &candidates)
}

pub fn unoccupied_point_odd(
    rng: &mut SmallRng,
    width: i32,
    height: i32,
    food: &[Point],
    snakes: &[Snake],
) -> Option<Point> {
    let candidates = filter_points(&unoccupied_points(width, height, food, snakes), Parity::Odd);
    pick_random_point(rng, &candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use uuid::Uuid;

    fn snake(body: Vec<Point>) -> Snake {
        Snake {
            id: Uuid::new_v4(),
            name: "occupier".to_owned(),
            url: String::new(),
            body,
            health: 100,
            death: None,
            latency_ms: 0,
        }
    }

    #[test]
    fn excludes_food_and_snake_segments() {
        let food = vec![Point::new(0, 0)];
        let snakes = vec![snake(vec![Point::new(1, 0), Point::new(1, 1)])];

        let open = unoccupied_points(2, 2, &food, &snakes);

        assert_eq!(open, vec![Point::new(0, 1)]);
    }

    #[test]
    fn duplicate_occupiers_do_not_shrink_the_grid() {
        // Stacked start: three segments on one point, plus food on the
        // same cell. Only that single cell is excluded.
        let p = Point::new(1, 1);
        let food = vec![p];
        let snakes = vec![snake(vec![p, p, p])];

        let open = unoccupied_points(3, 3, &food, &snakes);

        assert_eq!(open.len(), 8);
        assert!(!open.contains(&p));
    }

    #[test]
    fn saturated_board_has_no_candidates() {
        let food = vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(1, 0),
            Point::new(1, 1),
        ];

        let open = unoccupied_points(2, 2, &food, &[]);
        let mut rng = SmallRng::seed_from_u64(7);

        assert!(open.is_empty());
        assert_eq!(pick_random_point(&mut rng, &open), None);
    }

    #[test]
    fn parity_filters_split_the_checkerboard() {
        let open = unoccupied_points(3, 3, &[], &[]);

        let even = filter_points(&open, Parity::Even);
        let odd = filter_points(&open, Parity::Odd);

        assert_eq!(even.len(), 5);
        assert_eq!(odd.len(), 4);
        assert!(even.iter().all(|p| (p.x + p.y) % 2 == 0));
        assert!(odd.iter().all(|p| (p.x + p.y) % 2 == 1));
    }

    #[test]
    fn pick_never_selects_an_occupied_cell() {
        let food = vec![Point::new(2, 2)];
        let snakes = vec![snake(vec![Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)])];
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..100 {
            let p = unoccupied_point(&mut rng, 3, 3, &food, &snakes).unwrap();
            assert!(!food.contains(&p));
            assert!(!snakes[0].body.contains(&p));
        }
    }

    #[test]
    fn parity_variants_respect_their_checkerboard() {
        let mut rng = SmallRng::seed_from_u64(3);

        for _ in 0..50 {
            let even = unoccupied_point_even(&mut rng, 4, 4, &[], &[]).unwrap();
            let odd = unoccupied_point_odd(&mut rng, 4, 4, &[], &[]).unwrap();
            assert_eq!((even.x + even.y) % 2, 0);
            assert_eq!((odd.x + odd.y) % 2, 1);
        }
    }

    #[test]
    fn same_seed_draws_the_same_sequence() {
        let open = unoccupied_points(5, 5, &[], &[]);
        let mut a = SmallRng::seed_from_u64(9);
        let mut b = SmallRng::seed_from_u64(9);

        for _ in 0..20 {
            assert_eq!(pick_random_point(&mut a, &open), pick_random_point(&mut b, &open));
        }
    }
}
