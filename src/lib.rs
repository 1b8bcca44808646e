pub mod cmds;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod grid;
pub mod ui;
