// Command-line front end: command parsing, dispatch, and rendering, kept in
// the library so they can be tested without a terminal.

pub mod commands;
pub mod render;
pub mod session;
