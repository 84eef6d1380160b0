// Library root for the roster store, sheet backends, and change detection.

pub mod backend;
pub mod config;
pub mod detector;
pub mod error;
pub mod seed;
pub mod sheet;
pub mod store;
