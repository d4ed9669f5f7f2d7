use teloxide::{types::BotCommand, utils::command::BotCommands};

use crate::text::{Language, SUPPORTED_LANGUAGES};

/// Every command the bot shows in a command menu.
#[derive(BotCommands, Debug, Clone, Copy, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    Start,
    Language,
    Newsletter,
    Ban,
    Silent,
    Information,
}

impl Command {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Language => "language",
            Self::Newsletter => "newsletter",
            Self::Ban => "ban",
            Self::Silent => "silent",
            Self::Information => "information",
        }
    }

    #[must_use]
    pub const fn description(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Start, Language::En) => "Restart bot",
            (Self::Start, Language::Ar) => "إعادة تشغيل البوت",
            (Self::Language, Language::En) => "Change language",
            (Self::Language, Language::Ar) => "تغيير اللغة",
            (Self::Newsletter, Language::En) => "Newsletter menu",
            (Self::Newsletter, Language::Ar) => "قائمة النشرة",
            (Self::Ban, Language::En) => "Block/Unblock a user",
            (Self::Ban, Language::Ar) => "حظر/إلغاء حظر مستخدم",
            (Self::Silent, Language::En) => "Activate/Deactivate silent Mode",
            (Self::Silent, Language::Ar) => "تفعيل/إلغاء الوضع الصامت",
            (Self::Information, Language::En) => "User information",
            (Self::Information, Language::Ar) => "معلومات المستخدم",
        }
    }

    #[must_use]
    pub fn to_bot_command(self, language: Language) -> BotCommand {
        BotCommand::new(self.name(), self.description(language))
    }
}

/// Audience a command menu is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTier {
    /// Everyone talking to the bot in a private chat.
    User,
    /// Support staff in group chats.
    Group,
    /// The user menu plus admin-only entries.
    Admin,
}

impl CommandTier {
    #[must_use]
    pub fn commands(self) -> Vec<Command> {
        match self {
            Self::User => {
                let mut commands = vec![Command::Start];
                if SUPPORTED_LANGUAGES.len() > 1 {
                    commands.push(Command::Language);
                }
                commands
            }
            Self::Group => vec![Command::Ban, Command::Silent, Command::Information],
            Self::Admin => {
                let mut commands = Self::User.commands();
                commands.push(Command::Newsletter);
                commands
            }
        }
    }

    #[must_use]
    pub fn bot_commands(self, language: Language) -> Vec<BotCommand> {
        self.commands()
            .into_iter()
            .map(|command| command.to_bot_command(language))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(commands: &[BotCommand]) -> Vec<&str> {
        commands.iter().map(|command| command.command.as_str()).collect()
    }

    #[test]
    fn admin_menu_extends_user_menu() {
        for language in Language::all() {
            let user = CommandTier::User.bot_commands(language);
            let admin = CommandTier::Admin.bot_commands(language);
            assert_eq!(admin.len(), user.len() + 1);
            assert_eq!(names(&admin[..user.len()]), names(&user));
            assert_eq!(admin[user.len()].command, "newsletter");
        }
    }

    #[test]
    fn user_menu_offers_language_switch() {
        assert_eq!(
            names(&CommandTier::User.bot_commands(Language::En)),
            vec!["start", "language"]
        );
    }

    #[test]
    fn group_menu() {
        let commands = CommandTier::Group.bot_commands(Language::Ar);
        assert_eq!(names(&commands), vec!["ban", "silent", "information"]);
        assert_eq!(commands[0].description, "حظر/إلغاء حظر مستخدم");
    }

    #[test]
    fn descriptions_are_localized() {
        assert_eq!(Command::Start.to_bot_command(Language::En).description, "Restart bot");
        assert_eq!(
            Command::Start.to_bot_command(Language::Ar).description,
            "إعادة تشغيل البوت"
        );
    }

    #[test]
    fn parse_command_text() {
        assert!(matches!(Command::parse("/ban", "support_bot"), Ok(Command::Ban)));
        assert!(matches!(
            Command::parse("/newsletter@support_bot", "support_bot"),
            Ok(Command::Newsletter)
        ));
        assert!(Command::parse("/unknown", "support_bot").is_err());
    }
}
