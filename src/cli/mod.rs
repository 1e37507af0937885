pub mod args;
pub mod commands;

pub use args::OutputFormat;
