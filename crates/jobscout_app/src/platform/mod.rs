//! Host bridge: wires stdin/stdout to the routing engine.
mod app;
mod config;
mod host;

pub use app::run_app;
