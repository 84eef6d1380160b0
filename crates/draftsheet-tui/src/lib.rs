// Library root: re-exports the app loop, protocol types, and terminal UI so
// integration tests and the binary share one public API.

pub mod app;
pub mod protocol;
pub mod tui;
