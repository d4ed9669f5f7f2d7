use std::time::Duration;

use teloxide::adaptors::throttle::Limits;
use teloxide::adaptors::{DefaultParseMode, Throttle};
use teloxide::net::default_reqwest_settings;
use teloxide::requests::RequesterExt;
use teloxide::types::ParseMode;

use super::{BotError, Config};

/// All texts are telegram html, so html is the default parse mode.
pub type Bot = DefaultParseMode<Throttle<teloxide::Bot>>;

/// Must be called from within a tokio runtime (the throttle worker is spawned
/// onto it).
pub fn connect(config: &Config) -> Result<Bot, BotError> {
    let client = default_reqwest_settings()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(anyhow::Error::from)?;
    let bot = teloxide::Bot::with_client(config.telegram.token.clone(), client)
        .throttle(Limits::default())
        .parse_mode(ParseMode::Html);
    Ok(bot)
}
