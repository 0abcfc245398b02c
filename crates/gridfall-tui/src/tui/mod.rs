//! Minimal TUI runtime: a single-threaded event loop producing tick,
//! render, and terminal events for one application.

pub use self::{app::App, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
