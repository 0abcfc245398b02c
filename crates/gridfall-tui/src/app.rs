use std::time::Duration;

use crossterm::event::{Event, KeyCode};
use gridfall_engine::{Direction, Game};
use ratatui::Frame;

use crate::{
    tui::{App, Runtime},
    widgets::GameDisplay,
};

/// Gravity interval: one tick every 500 ms, constant for the whole game.
const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// The interactive game application: owns the engine, feeds it key
/// commands and gravity ticks, and draws it after every change.
#[derive(Debug)]
pub struct GameApp {
    game: Game,
    is_exiting: bool,
}

impl GameApp {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            is_exiting: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Halts the gravity timer once the game has ended.
    fn sync_timer(&self, runtime: &mut Runtime) {
        if self.game.state().is_over() {
            runtime.set_tick_interval(None);
        }
    }
}

impl App for GameApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_interval(Some(TICK_INTERVAL));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        let is_running = self.game.state().is_running();

        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left if is_running => self.game.move_horizontal(Direction::Left),
                KeyCode::Right if is_running => self.game.move_horizontal(Direction::Right),
                KeyCode::Down if is_running => self.game.soft_drop(),
                KeyCode::Up if is_running => self.game.rotate(),
                KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
                _ => {}
            }
            self.sync_timer(runtime);
        }
    }

    fn update(&mut self, runtime: &mut Runtime) {
        self.game.tick();
        self.sync_timer(runtime);
    }

    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(GameDisplay::new(&self.game), frame.area());
    }
}
