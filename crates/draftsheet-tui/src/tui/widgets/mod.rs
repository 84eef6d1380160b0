// TUI widget modules for each dashboard panel.

pub mod available;
pub mod confirm;
pub mod status_bar;
pub mod teams;
