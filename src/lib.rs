//! ccstat library
//!
//! A CLI wrapper around the `ccache` compiler cache: locates the installed
//! binary, invokes its maintenance operations, and parses its statistics
//! report into structured rows.

pub mod ccache;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
