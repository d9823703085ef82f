pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod exit;
pub mod export;
pub mod normalize;
pub mod scanner;
pub mod ui;
