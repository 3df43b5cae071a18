use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use rand::{rngs::StdRng, Rng, SeedableRng};

use toroid_snake::{Coords, GridSpace, RandomCells, RunState, RunSummary, Simulation, Snake, TickOutcome};
use toroid_snake::snake::Direction::{self, *};

const ALL: [Direction; 4] = [Up, Down, Left, Right];

fn grid(size: i32) -> GridSpace {
    GridSpace::new(size).unwrap()
}

fn toroidal_distance(grid: GridSpace, a: Coords, b: Coords) -> i32 {
    let axis = |p: i32, q: i32| {
        let d = (p - q).abs();
        d.min(grid.size() - d)
    };
    axis(a.0, b.0) + axis(a.1, b.1)
}

#[test]
fn left_turn_from_spawn() {
    let mut sim = Simulation::new(grid(20), (10, 10), || (0, 0)).unwrap();
    assert_eq!(sim.snake().direction(), Down);

    sim.tick(Some(Left)).unwrap();

    assert_eq!(sim.snapshot().body, vec![(9, 10)]);
    assert_eq!(sim.snake().head().direction(), Left);
    assert_eq!(sim.snake().direction(), Left);
}

#[test]
fn three_segments_turn_at_the_same_cell() {
    let mut snake = Snake::new(grid(20), (5, 5));
    snake.grow();
    snake.grow();
    assert_eq!(snake.positions(), vec![(5, 5), (5, 4), (5, 3)]);

    let mut sim = Simulation::with_snake(snake, Some((15, 15)), (10, 10), || (15, 15)).unwrap();

    sim.tick(Some(Right)).unwrap();
    sim.tick(None).unwrap();
    assert_eq!(sim.snake().pending_turns().get((5, 5)), Some(Right));
    sim.tick(None).unwrap();

    assert!(sim.snake().segments().iter().all(|s| s.direction() == Right));
    assert_eq!(sim.snapshot().body, vec![(8, 5), (7, 5), (6, 5)]);
    assert!(sim.snake().pending_turns().is_empty());
}

#[test]
fn eaten_food_is_not_drawn_again() {
    let draws = Rc::new(RefCell::new(vec![]));
    let mut script = vec![(0, 0), (0, 0), (7, 3)].into_iter();
    let log = Rc::clone(&draws);
    let source = move || {
        let cell = script.next().unwrap_or((1, 1));
        log.borrow_mut().push(cell);
        cell
    };

    let mut sim = Simulation::new(grid(20), (0, 19), source).unwrap();
    assert_eq!(sim.food(), (0, 0));

    assert_eq!(sim.tick(None).unwrap(), TickOutcome::Ate { score: 1 });
    assert_eq!(sim.snake().len(), 2);
    assert_eq!(sim.snake().head().position(), (0, 0));
    // (0, 0) was offered again and rejected, it is under the head now
    assert_eq!(sim.food(), (7, 3));
    assert_eq!(*draws.borrow(), vec![(0, 0), (0, 0), (7, 3)]);
    assert!(!sim.snake().occupied().contains(&sim.food()));
}

#[test]
fn collision_resets_to_spawn() {
    let mut snake = Snake::new(grid(20), (5, 5));
    for _ in 0..4 {
        snake.grow();
    }
    let mut sim = Simulation::with_snake(snake, Some((15, 15)), (10, 10), || (15, 15)).unwrap();

    assert_eq!(sim.tick(Some(Right)).unwrap(), TickOutcome::Moved);
    assert_eq!(sim.tick(Some(Up)).unwrap(), TickOutcome::Moved);
    let outcome = sim.tick(Some(Left)).unwrap();

    assert_eq!(outcome, TickOutcome::RunEnded(RunSummary { score: 4, length: 5 }));
    assert_eq!(sim.state(), RunState::Running);
    assert_eq!(sim.runs(), 1);
    assert_eq!(sim.snapshot().body, vec![(10, 10)]);
    assert_eq!(sim.snake().direction(), Down);
    assert!(sim.snake().pending_turns().is_empty());
    assert_eq!(sim.food(), (15, 15));

    assert_eq!(sim.tick(None).unwrap(), TickOutcome::Moved);
    assert_eq!(sim.snapshot().body, vec![(10, 11)]);
}

#[test]
fn food_on_spawn_is_moved_after_reset() {
    let mut snake = Snake::new(grid(20), (5, 5));
    for _ in 0..4 {
        snake.grow();
    }
    let mut next = vec![(10, 10), (12, 12)].into_iter();
    let source = move || next.next().unwrap_or((3, 3));
    let mut sim = Simulation::with_snake(snake, Some((10, 10)), (10, 10), source).unwrap();

    for dir in [Right, Up, Left].iter() {
        sim.tick(Some(*dir)).unwrap();
    }

    assert_eq!(sim.runs(), 1);
    assert_eq!(sim.food(), (12, 12));
}

#[test]
fn positions_always_wrap_into_the_grid() {
    let mut rng = StdRng::seed_from_u64(1234);

    for size in [2, 3, 7, 20].iter() {
        let grid = grid(*size);
        let cells = RandomCells::new(grid, StdRng::seed_from_u64(*size as u64));
        let mut sim = Simulation::new(grid, grid.center(), cells).unwrap();

        for _ in 0..300 {
            let intent = if rng.gen_bool(0.3) { Some(ALL[rng.gen_range(0..4)]) } else { None };
            match sim.tick(intent) {
                Ok(_) => {}
                // Small grids can fill up
                Err(_) => break,
            }
            for pos in sim.snapshot().body {
                assert!(grid.contains(pos), "{:?} outside a grid of {}", pos, size);
            }
            assert!(grid.contains(sim.food()));
        }
    }
}

#[test]
fn reversal_never_changes_direction() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut snake = Snake::new(grid(15), (7, 7));

    for _ in 0..500 {
        let current = snake.direction();
        assert!(!snake.set_direction(current.reverse()));
        assert_eq!(snake.direction(), current);

        snake.set_direction(ALL[rng.gen_range(0..4)]);
        snake.advance();
    }
}

#[test]
fn growth_adds_one_adjacent_segment() {
    let grid = grid(12);
    let mut snake = Snake::new(grid, (6, 6));

    for dir in [Right, Right, Up, Up, Left, Up, Right, Right, Down].iter() {
        snake.set_direction(*dir);
        snake.advance();

        let old_tail = snake.tail().position();
        let old_len = snake.len();
        snake.grow();

        assert_eq!(snake.len(), old_len + 1);
        assert_eq!(toroidal_distance(grid, old_tail, snake.tail().position()), 1);
        let distinct: HashSet<Coords> = snake.positions().into_iter().collect();
        assert_eq!(distinct.len(), snake.len());
        assert!(!snake.has_self_collision());
    }
}

#[test]
fn straight_chains_never_collide() {
    let mut snake = Snake::new(grid(30), (0, 0));
    for _ in 0..9 {
        snake.grow();
    }
    snake.set_direction(Right);
    for _ in 0..100 {
        snake.advance();
        assert!(!snake.has_self_collision());
    }
}
