mod command;
mod keyboard;

pub use command::{delete, setup, Command, CommandPlatform, CommandScope, CommandTier};
pub use keyboard::Keyboard;
