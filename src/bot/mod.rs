mod bot_error;
mod config;
mod types;

pub use bot_error::*;
pub use types::*;

pub use config::*;
