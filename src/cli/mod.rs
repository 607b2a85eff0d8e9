pub mod apply;
pub mod commands;

pub use commands::Cli;
