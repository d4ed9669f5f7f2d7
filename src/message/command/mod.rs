mod registrar;
mod table;

pub use registrar::{delete, setup, CommandPlatform, CommandScope};
pub use table::{Command, CommandTier};
