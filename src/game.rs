use std::{thread::sleep, time::Duration};

use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};

use toroid_snake::{Coords, GameError, GridSpace, RandomCells, Simulation, TickOutcome};
use toroid_snake::config::Config;
use toroid_snake::snake::Direction::{*, self};

use crate::term::{ScreenPos, TermInt, TermManager};

use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};

const SNAKE_BODY_CELL: [char; 2] = ['█', '█'];
const FOOD_CELL: [char; 2] = ['(', ')'];
const DEAD_SNAKE_CELL: [char; 2] = ['X', 'X'];
const EMPTY_CELL: [char; 2] = [' ', ' '];

type Sim = Simulation<RandomCells<StdRng>>;

pub struct SnakeGame {
    config: Config,
    grid: GridSpace,
    paused: bool,
    term: TermManager,
    origin: ScreenPos,
    drawn_body: Vec<Coords>,
    drawn_food: Option<Coords>,
}

impl SnakeGame {
    pub fn new(config: Config) -> Result<Self, GameError> {
        let grid = config.grid()?;
        let term = TermManager::new()?;

        // Two columns per cell, plus the border
        let size = grid.size() as u32;
        let needed = (size * 2 + 2, size + 3);
        let available = term.get_terminal_size();
        if needed.0 > available.0 as u32 || needed.1 > available.1 as u32 {
            return Err(GameError::TerminalTooSmall {
                needed: (needed.0.min(u16::MAX as u32) as u16, needed.1.min(u16::MAX as u32) as u16),
                available,
            });
        }

        let origin = (
            (available.0 - needed.0 as TermInt) / 2,
            (available.1 - needed.1 as TermInt) / 2,
        );

        Ok(SnakeGame { config, grid, paused: false, term, origin, drawn_body: vec![], drawn_food: None })
    }

    pub fn initialize(&mut self) -> Result<(), GameError> {
        self.term.setup()?;
        Ok(())
    }

    pub fn shutdown(&mut self) -> Result<(), GameError> {
        self.term.restore()?;
        Ok(())
    }

    /// Plays rounds until the user quits.
    pub fn run(&mut self) -> Result<(), GameError> {
        if !self.show_intro()? {
            return Ok(());
        }

        while self.play()? {}

        info!("Quitting");
        Ok(())
    }

    /// Returns false if the user asked to quit.
    fn show_intro(&mut self) -> Result<bool, GameError> {
        let lines = &[
            "Arrow keys or WASD to move",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;

        if is_ctrl_c(&self.term.read_key_blocking()?) {
            return Ok(false);
        }

        self.term.hide_message()?;
        Ok(true)
    }

    /// Plays until the grid is full or the user quits. Returns false on quit.
    fn play(&mut self) -> Result<bool, GameError> {
        self.term.clear()?;
        let frame = (self.grid.size() as TermInt * 2 + 2, self.grid.size() as TermInt + 2);
        self.term.draw_borders(self.origin, frame)?;
        self.drawn_body.clear();
        self.drawn_food = None;

        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let cells = RandomCells::new(self.grid, rng);
        let mut sim: Sim = Simulation::new(self.grid, self.config.spawn(), cells)?;

        self.render(&sim)?;

        loop {
            sleep(Duration::from_millis(self.config.tick_ms));

            let mut dir_change: Option<Direction> = None;

            for key_ev in self.term.read_key_events_queue()? {
                match &key_ev {
                    ev if is_ctrl_c(ev) => return Ok(false),
                    KeyEvent { code, .. } => match code {
                        KeyCode::Char('w') | KeyCode::Up => dir_change = Some(Up),
                        KeyCode::Char('a') | KeyCode::Left => dir_change = Some(Left),
                        KeyCode::Char('s') | KeyCode::Down => dir_change = Some(Down),
                        KeyCode::Char('d') | KeyCode::Right => dir_change = Some(Right),
                        KeyCode::Esc => self.toggle_pause()?,
                        _ => {}
                    }
                }
            }

            if self.paused { continue; }

            match sim.tick(dir_change) {
                Ok(TickOutcome::RunEnded(summary)) => {
                    let best = sim.best_score();
                    if !self.game_over(summary.score, best)? {
                        return Ok(false);
                    }
                    self.render(&sim)?;
                },
                Ok(_) => self.render(&sim)?,
                Err(GameError::FoodPlacementExhausted { cells }) => {
                    info!("Grid of {} cells filled, run won", cells);
                    return self.game_won(sim.score());
                },
                Err(e) => return Err(e),
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    /// Marks the body that crashed, then waits for a key. Returns false on quit.
    fn game_over(&mut self, score: usize, best: usize) -> Result<bool, GameError> {
        for pos in self.drawn_body.clone() {
            self.draw_cell(pos, DEAD_SNAKE_CELL)?;
        }

        self.term.show_message(&[
            "You lost!",
            &*format!("Score: {}  Best: {}", score, best),
            "",
            "Press any key to play again,",
            "or CTRL+C to quit."
        ])?;

        let key = self.term.read_key_blocking()?;
        self.term.hide_message()?;
        Ok(!is_ctrl_c(&key))
    }

    fn game_won(&mut self, score: usize) -> Result<bool, GameError> {
        self.term.show_message(&[
            "You won!",
            &*format!("Score: {}", score),
            "",
            "Press any key to play again,",
            "or CTRL+C to quit."
        ])?;

        let key = self.term.read_key_blocking()?;
        self.term.hide_message()?;
        Ok(!is_ctrl_c(&key))
    }

    fn render(&mut self, sim: &Sim) -> Result<(), GameError> {
        let snapshot = sim.snapshot();

        for pos in std::mem::take(&mut self.drawn_body).into_iter().chain(self.drawn_food.take()) {
            self.draw_cell(pos, EMPTY_CELL)?;
        }

        for (i, pos) in snapshot.body.iter().enumerate() {
            let cell = if i == 0 {head_cell(sim.snake().head().direction())} else {SNAKE_BODY_CELL};
            self.draw_cell(*pos, cell)?;
        }
        self.draw_cell(snapshot.food, FOOD_CELL)?;

        self.drawn_body = snapshot.body;
        self.drawn_food = Some(snapshot.food);

        let status = format!("Score: {:<5} Best: {:<5}", snapshot.score, sim.best_score());
        let y = self.origin.1 + self.grid.size() as TermInt + 2;
        for (i, ch) in status.chars().enumerate() {
            self.term.print_at((self.origin.0 + i as TermInt, y), ch)?;
        }

        self.term.flush()?;
        Ok(())
    }

    fn draw_cell(&mut self, pos: Coords, cell: [char; 2]) -> Result<(), GameError> {
        if !self.grid.contains(pos) {
            warn!("Refusing to draw off-grid cell {:?}", pos);
            return Ok(());
        }

        let x = self.origin.0 + 1 + pos.0 as TermInt * 2;
        let y = self.origin.1 + 1 + pos.1 as TermInt;
        self.term.print_at((x, y), cell[0])?;
        self.term.print_at((x + 1, y), cell[1])?;
        Ok(())
    }

    fn toggle_pause(&mut self) -> Result<(), GameError> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Ctrl+C to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        self.paused = !self.paused;
        Ok(())
    }
}

fn head_cell(direction: Direction) -> [char; 2] {
    match direction {
        Up => ['^', '^'],
        Down => ['v', 'v'],
        Left => ['<', '<'],
        Right => ['>', '>'],
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL, .. })
}
