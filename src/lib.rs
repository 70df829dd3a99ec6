pub mod apple;
pub mod config;
pub mod error;
pub mod field;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
