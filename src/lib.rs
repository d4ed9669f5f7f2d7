mod bot;
mod callback;
mod message;
mod text;
mod util;

pub use bot::{connect, Bot, BotError, Config, ConfigurationError, Paths, Telegram};
pub use callback::CallbackData;
pub use message::{delete, setup, Command, CommandPlatform, CommandScope, CommandTier, Keyboard};
pub use text::{
    render, CatalogData, Html, Language, TextCatalog, TextError, TextMessage, SUPPORTED_LANGUAGES,
};
pub use util::is_bad_request;
