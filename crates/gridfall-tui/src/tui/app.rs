use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Runtime;

/// Trait for applications executed by [`Runtime::run`].
pub trait App {
    /// Called once before the event loop starts; configure the tick
    /// interval here.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Draws the screen (called on each render event).
    fn draw(&self, frame: &mut Frame);

    /// Updates game logic (called on each tick event).
    fn update(&mut self, runtime: &mut Runtime);
}
