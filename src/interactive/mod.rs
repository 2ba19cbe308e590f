//! Interactive TUI for watching the solver play

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Session, Statistics, run_tui};
