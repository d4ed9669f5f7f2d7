use log::{debug, error, info};
use teloxide::prelude::*;
use teloxide::types::{BotCommand, BotCommandScope};
use teloxide::RequestError;

use crate::bot::{Bot, BotError, Config, ConfigurationError};
use crate::text::Language;
use crate::util::is_bad_request;

use super::CommandTier;

/// The part of the bot api that manages command menus.
#[allow(async_fn_in_trait)]
pub trait CommandPlatform {
    async fn set_commands(
        &self,
        commands: Vec<BotCommand>,
        scope: BotCommandScope,
        language_code: Option<&'static str>,
    ) -> Result<(), RequestError>;

    async fn delete_commands(
        &self,
        scope: BotCommandScope,
        language_code: Option<&'static str>,
    ) -> Result<(), RequestError>;
}

impl CommandPlatform for Bot {
    async fn set_commands(
        &self,
        commands: Vec<BotCommand>,
        scope: BotCommandScope,
        language_code: Option<&'static str>,
    ) -> Result<(), RequestError> {
        let request = self.set_my_commands(commands).scope(scope);
        match language_code {
            Some(language_code) => request.language_code(language_code).await?,
            None => request.await?,
        };
        Ok(())
    }

    async fn delete_commands(
        &self,
        scope: BotCommandScope,
        language_code: Option<&'static str>,
    ) -> Result<(), RequestError> {
        let request = self.delete_my_commands().scope(scope);
        match language_code {
            Some(language_code) => request.language_code(language_code).await?,
            None => request.await?,
        };
        Ok(())
    }
}

/// Where a command menu shows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandScope {
    /// The configured dev/admin chat only.
    DevChat,
    AllPrivateChats,
    AllGroupChats,
}

impl CommandScope {
    /// Registration order. The dev chat goes first so a wrong `dev_id` is
    /// reported before anything else is touched.
    pub const ALL: [Self; 3] = [Self::DevChat, Self::AllPrivateChats, Self::AllGroupChats];

    #[must_use]
    pub const fn tier(self) -> CommandTier {
        match self {
            Self::DevChat => CommandTier::Admin,
            Self::AllPrivateChats => CommandTier::User,
            Self::AllGroupChats => CommandTier::Group,
        }
    }

    #[must_use]
    pub const fn to_bot_scope(self, config: &Config) -> BotCommandScope {
        match self {
            Self::DevChat => BotCommandScope::Chat {
                chat_id: config.get_dev_recipient(),
            },
            Self::AllPrivateChats => BotCommandScope::AllPrivateChats,
            Self::AllGroupChats => BotCommandScope::AllGroupChats,
        }
    }
}

/// Registers the command menus of every scope in every supported language.
///
/// A dev chat telegram does not know aborts the whole run with
/// [`ConfigurationError::DevChatNotFound`]; no other scope is registered
/// afterwards. Any other api error is returned as is.
pub async fn setup<P>(platform: &P, config: &Config) -> Result<(), BotError>
where
    P: CommandPlatform,
{
    for scope in CommandScope::ALL {
        for language in Language::all() {
            debug!("setting {scope:?} commands for {language}");
            let result = platform
                .set_commands(
                    scope.tier().bot_commands(language),
                    scope.to_bot_scope(config),
                    language.api_language_code(),
                )
                .await;
            check_scope_result(scope, config, result)?;
        }
    }
    info!("command menus registered");
    Ok(())
}

/// Removes everything [`setup`] registered. Errors are handled the same way.
pub async fn delete<P>(platform: &P, config: &Config) -> Result<(), BotError>
where
    P: CommandPlatform,
{
    for scope in CommandScope::ALL {
        for language in Language::all() {
            debug!("deleting {scope:?} commands for {language}");
            let result = platform
                .delete_commands(scope.to_bot_scope(config), language.api_language_code())
                .await;
            check_scope_result(scope, config, result)?;
        }
    }
    info!("command menus deleted");
    Ok(())
}

fn check_scope_result(
    scope: CommandScope,
    config: &Config,
    result: Result<(), RequestError>,
) -> Result<(), BotError> {
    match result {
        Err(err) if scope == CommandScope::DevChat && is_bad_request(&err) => {
            error!("dev chat {} rejected: {err}", config.dev_id);
            Err(ConfigurationError::DevChatNotFound {
                chat_id: config.dev_id,
            }
            .into())
        }
        result => Ok(result?),
    }
}
