mod common;
mod config;
mod maintenance;
mod stats;
mod watch;
mod which;

pub use self::config::config;
pub use self::maintenance::{cleanup, clear, zero};
pub use self::stats::stats;
pub use self::watch::watch;
pub use self::which::which;
