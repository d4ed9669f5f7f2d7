use std::io::ErrorKind;
use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};
use teloxide::types::{ChatId, Recipient};
use tokio::fs::{read_to_string, write};

use super::BotError;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub telegram: Telegram,
    /// Chat that receives the admin command menu (usually the developer or
    /// the support group).
    pub dev_id: i64,
}

#[derive(Debug, Clone)]
pub struct Paths {
    pub config_file_path: String,
}

impl Paths {
    #[must_use]
    pub fn config(&self) -> PathBuf {
        self.config_file_path.clone().into()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Telegram {
    pub token: String,
}

impl Config {
    /// Reads the config file, or writes and returns the default config if
    /// there is none yet.
    pub async fn load_or_create(paths: &Paths) -> Result<Self, BotError> {
        match read_to_string(paths.config()).await {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let config = Self::default();
                write(paths.config(), toml::to_string(&config)?).await?;
                warn!(
                    "no config found, wrote defaults to {}",
                    paths.config().display()
                );
                Ok(config)
            }
            Err(err) => Err(err.into()),
        }
    }

    #[must_use]
    pub const fn get_dev_chat_id(&self) -> ChatId {
        ChatId(self.dev_id)
    }

    #[must_use]
    pub const fn get_dev_recipient(&self) -> Recipient {
        Recipient::Id(self.get_dev_chat_id())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            telegram: Telegram::default(),
            dev_id: 0,
        }
    }
}

impl Default for Telegram {
    fn default() -> Self {
        Self {
            token: "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn parse_config() -> Result<()> {
        let config: Config = toml::from_str(
            r#"
            dev_id = -1001234567890

            [telegram]
            token = "123:abc"
            "#,
        )?;
        assert_eq!(config.telegram.token, "123:abc");
        assert_eq!(config.get_dev_chat_id(), ChatId(-1_001_234_567_890));
        Ok(())
    }

    fn paths_in(dir: &tempfile::TempDir, file_name: &str) -> Paths {
        Paths {
            config_file_path: dir.path().join(file_name).display().to_string(),
        }
    }

    #[tokio::test]
    async fn missing_config_is_created_with_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let paths = paths_in(&dir, "config.toml");

        let config = Config::load_or_create(&paths).await?;
        assert_eq!(config.dev_id, 0);

        let written: Config = toml::from_str(&std::fs::read_to_string(paths.config())?)?;
        assert_eq!(written.telegram.token, config.telegram.token);
        Ok(())
    }

    #[tokio::test]
    async fn existing_config_is_loaded() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let paths = paths_in(&dir, "config.toml");
        std::fs::write(paths.config(), "dev_id = 42\n\n[telegram]\ntoken = \"123:abc\"\n")?;

        let config = Config::load_or_create(&paths).await?;
        assert_eq!(config.dev_id, 42);
        assert_eq!(config.telegram.token, "123:abc");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_config_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let paths = paths_in(&dir, "config.toml");
        std::fs::write(paths.config(), "dev_id = \"not a number\"")?;

        let result = Config::load_or_create(&paths).await;
        assert!(matches!(result, Err(BotError::Other(_))));
        let untouched = std::fs::read_to_string(paths.config())?;
        assert_eq!(untouched, "dev_id = \"not a number\"");
        Ok(())
    }

    #[tokio::test]
    async fn unreadable_config_is_not_overwritten() -> Result<()> {
        let dir = tempfile::tempdir()?;
        // a directory cannot be read as a file, but it exists
        std::fs::create_dir_all(dir.path().join("config.toml"))?;
        let paths = paths_in(&dir, "config.toml");

        let result = Config::load_or_create(&paths).await;
        assert!(matches!(result, Err(BotError::Other(_))));
        assert!(paths.config().is_dir());
        Ok(())
    }
}
